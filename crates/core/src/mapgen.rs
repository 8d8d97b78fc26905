//! Deterministic rooms-and-corridors generation for one depth level.
//! Layout is a pure function of the run seed, depth, and rebuild generation,
//! so replays regenerate identical levels without storing them.

use crate::state::Map;
use crate::types::{Pos, TileKind};

pub const LEVEL_WIDTH: usize = 40;
pub const LEVEL_HEIGHT: usize = 20;

const MIN_ROOM_SIZE: usize = 4;
const MAX_ROOM_SIZE: usize = 8;
const ROOM_ATTEMPTS: u64 = 60;

pub struct GeneratedLevel {
    pub map: Map,
    pub player_start: Pos,
    pub exit: Pos,
}

/// Mix the run seed with depth and rebuild generation. Restarting a depth
/// bumps the generation, so a restarted level gets a fresh layout while
/// replays stay deterministic.
pub fn derive_level_seed(run_seed: u64, depth: u32, generation: u32) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= u64::from(depth).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= u64::from(generation).wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

pub(crate) fn mix_seed_stream(seed: u64, stream: u64) -> u64 {
    let mut mixed = seed ^ stream.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}

pub(crate) fn random_usize(seed: u64, stream: u64, min_value: usize, max_value: usize) -> usize {
    debug_assert!(min_value <= max_value);
    let range_size = max_value - min_value + 1;
    min_value + (mix_seed_stream(seed, stream) as usize % range_size)
}

pub fn generate_level(level_seed: u64) -> GeneratedLevel {
    let mut map = Map::filled(LEVEL_WIDTH, LEVEL_HEIGHT);
    let target_rooms = 5 + random_usize(level_seed, 1, 0, 2);
    let mut centers: Vec<Pos> = Vec::new();

    for attempt in 0..ROOM_ATTEMPTS {
        if centers.len() >= target_rooms {
            break;
        }
        let room_width = random_usize(level_seed, attempt * 8 + 2, MIN_ROOM_SIZE, MAX_ROOM_SIZE);
        let room_height = random_usize(level_seed, attempt * 8 + 3, MIN_ROOM_SIZE, MAX_ROOM_SIZE);
        let max_x = LEVEL_WIDTH - room_width - 1;
        let max_y = LEVEL_HEIGHT - room_height - 1;
        let x = random_usize(level_seed, attempt * 8 + 4, 1, max_x);
        let y = random_usize(level_seed, attempt * 8 + 5, 1, max_y);

        carve_room(&mut map, x, y, room_width, room_height);
        centers.push(Pos {
            y: (y + room_height / 2) as i32,
            x: (x + room_width / 2) as i32,
        });
    }

    // Chain the rooms with L-shaped corridors so every center is reachable.
    for pair in centers.windows(2) {
        carve_corridor(&mut map, pair[0], pair[1], level_seed);
    }

    let player_start = centers[0];
    // Overlapping rooms can collapse centers onto each other; the exit must
    // never share the spawn tile or the level would end on arrival.
    let exit = centers
        .iter()
        .rev()
        .copied()
        .find(|center| *center != player_start)
        .unwrap_or(Pos { y: player_start.y, x: player_start.x + 1 });
    map.set_tile(exit, TileKind::Exit);

    GeneratedLevel { map, player_start, exit }
}

fn carve_room(map: &mut Map, x: usize, y: usize, width: usize, height: usize) {
    for room_y in y..y + height {
        for room_x in x..x + width {
            map.set_tile(Pos { y: room_y as i32, x: room_x as i32 }, TileKind::Floor);
        }
    }
}

fn carve_corridor(map: &mut Map, from: Pos, to: Pos, level_seed: u64) {
    // Elbow direction varies per corridor to avoid a uniform look.
    let stream = 7000 + (from.y as u64) * 97 + (from.x as u64);
    let horizontal_first = random_usize(level_seed, stream, 0, 1) == 0;
    let elbow = if horizontal_first {
        Pos { y: from.y, x: to.x }
    } else {
        Pos { y: to.y, x: from.x }
    };
    carve_line(map, from, elbow);
    carve_line(map, elbow, to);
}

fn carve_line(map: &mut Map, from: Pos, to: Pos) {
    let mut current = from;
    loop {
        if map.tile_at(current) == TileKind::Wall {
            map.set_tile(current, TileKind::Floor);
        }
        if current == to {
            break;
        }
        current.x += (to.x - current.x).signum();
        current.y += (to.y - current.y).signum();
    }
}

/// Sample `count` distinct walkable positions, skipping `reserved` ones.
/// Deterministic in the level seed; used for creature and item placement.
pub fn find_valid_positions(
    map: &Map,
    level_seed: u64,
    stream_base: u64,
    count: usize,
    reserved: &[Pos],
) -> Vec<Pos> {
    let mut candidates: Vec<Pos> = Vec::new();
    for y in 0..map.height {
        for x in 0..map.width {
            let pos = Pos { y: y as i32, x: x as i32 };
            if map.tile_at(pos) == TileKind::Floor && !reserved.contains(&pos) {
                candidates.push(pos);
            }
        }
    }

    let mut picked = Vec::new();
    for pick_index in 0..count.min(candidates.len()) {
        let idx = random_usize(level_seed, stream_base + pick_index as u64, 0, candidates.len() - 1);
        picked.push(candidates.swap_remove(idx));
    }
    picked
}

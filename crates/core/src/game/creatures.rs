//! Creature roster behavior: spawning, chase movement, and corpse cleanup.
//! Decision logic is deliberately simple and table-driven; the combat
//! system only consumes the roster through the helpers here.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::content;
use crate::game::visibility::VisibilityTracker;
use crate::mapgen;
use crate::state::{CombatActor, Creature, DiveState};
use crate::types::{EntityId, Pos, chebyshev};

/// Ids sorted by position so behavior never depends on insertion order.
pub(crate) fn ids_in_stable_order(state: &DiveState) -> Vec<EntityId> {
    let mut ids: Vec<EntityId> = state.creatures.keys().collect();
    ids.sort_by_key(|id| {
        let creature = &state.creatures[*id];
        (creature.pos.y, creature.pos.x)
    });
    ids
}

/// The living creature standing on `pos`, if any. Creatures never stack.
pub(crate) fn living_creature_at(state: &DiveState, pos: Pos) -> Option<EntityId> {
    state
        .creatures
        .iter()
        .find(|(_, creature)| creature.pos == pos && creature.is_alive())
        .map(|(id, _)| id)
}

fn occupied(state: &DiveState, pos: Pos) -> bool {
    pos == state.player.pos || state.creatures.values().any(|creature| creature.pos == pos)
}

/// Move every living creature once. A creature the diver can currently see
/// (and that is within its sense range) swims one tile toward the diver;
/// everything else drifts aimlessly now and then.
pub(crate) fn update_creatures(
    state: &mut DiveState,
    visibility: &VisibilityTracker,
    rng: &mut ChaCha8Rng,
    sense_radius: i32,
) -> Vec<String> {
    for id in ids_in_stable_order(state) {
        let Some(creature) = state.creatures.get(id) else {
            continue;
        };
        if !creature.is_alive() {
            continue;
        }

        let pos = creature.pos;
        let distance = chebyshev(pos, state.player.pos);
        let hunting =
            visibility.is_visible(pos) && distance <= sense_radius as u32 && distance > 1;

        let next = if hunting {
            chase_step(state, pos)
        } else {
            drift_step(state, pos, rng)
        };

        if let Some(next_pos) = next {
            state.creatures[id].pos = next_pos;
        }
    }

    // No ambient narration yet; the interface keeps message parity with
    // the combat phase so callers treat both phases the same.
    Vec::new()
}

/// Greedy 4-directional step that closes the larger axis gap first.
fn chase_step(state: &DiveState, from: Pos) -> Option<Pos> {
    let dx = state.player.pos.x - from.x;
    let dy = state.player.pos.y - from.y;

    let horizontal = Pos { y: from.y, x: from.x + dx.signum() };
    let vertical = Pos { y: from.y + dy.signum(), x: from.x };

    let ordered = if dx.abs() >= dy.abs() {
        [horizontal, vertical]
    } else {
        [vertical, horizontal]
    };

    ordered
        .into_iter()
        .find(|candidate| {
            *candidate != from && state.map.is_walkable(*candidate) && !occupied(state, *candidate)
        })
}

fn drift_step(state: &DiveState, from: Pos, rng: &mut ChaCha8Rng) -> Option<Pos> {
    // Drift roughly every fourth turn so idle creatures do not jitter.
    if rng.next_u64() % 4 != 0 {
        return None;
    }
    let candidate = match rng.next_u64() % 4 {
        0 => Pos { y: from.y - 1, x: from.x },
        1 => Pos { y: from.y + 1, x: from.x },
        2 => Pos { y: from.y, x: from.x - 1 },
        _ => Pos { y: from.y, x: from.x + 1 },
    };
    (state.map.is_walkable(candidate) && !occupied(state, candidate)).then_some(candidate)
}

pub(crate) fn purge_dead(state: &mut DiveState) {
    state.creatures.retain(|_, creature| creature.is_alive());
}

/// Populate the roster from the depth's spawn table at deterministic
/// positions derived from the level seed.
pub(crate) fn spawn_creatures(
    state: &mut DiveState,
    level_seed: u64,
    depth: u32,
    count: usize,
    reserved: &[Pos],
) {
    let positions = mapgen::find_valid_positions(&state.map, level_seed, 5000, count, reserved);
    let weight_total = content::spawn_weight_total(depth);

    for (spawn_index, pos) in positions.into_iter().enumerate() {
        let roll =
            mapgen::random_usize(level_seed, 5100 + spawn_index as u64, 0, weight_total as usize - 1);
        let kind = content::creature_for_roll(depth, roll as u32);
        let stats = content::stats_for(kind, depth);

        let creature = Creature {
            id: EntityId::default(),
            kind,
            pos,
            hp: stats.hp,
            max_hp: stats.hp,
            attack_power: stats.attack,
        };
        let id = state.creatures.insert(creature);
        state.creatures[id].id = id;
    }
}

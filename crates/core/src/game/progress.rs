//! Run progression: depth, score, and the victory/defeat flags.

use crate::state::{Map, Player};
use crate::types::{BASE_FOV_RADIUS, MIN_FOV_RADIUS, Pos, TileKind};

/// Flags and tallies that survive level rebuilds. `victory` means "standing
/// on the exit, descent pending"; it clears as soon as the next level loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunStatus {
    pub depth: u32,
    pub victory: bool,
    pub game_over: bool,
    pub score: u32,
}

impl Default for RunStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStatus {
    pub fn new() -> Self {
        Self { depth: 1, victory: false, game_over: false, score: 0 }
    }

    /// True iff the diver stands on the exit hatch. Flags the pending
    /// descent as a side effect; repeat calls re-set the same flag.
    pub fn check_victory(&mut self, player_pos: Pos, map: &Map) -> bool {
        if map.tile_at(player_pos) == TileKind::Exit {
            self.victory = true;
            return true;
        }
        false
    }

    /// True iff the diver is out of oxygen. Sets the game-over flag.
    pub fn check_defeat(&mut self, player: &Player) -> bool {
        if player.hp <= 0 {
            self.game_over = true;
            return true;
        }
        false
    }

    /// Descend one zone: clears the pending-descent flag and awards
    /// 100 points per new depth reached.
    pub fn advance_level(&mut self) {
        self.depth += 1;
        self.victory = false;
        self.score += 100 * self.depth;
    }

    /// Water gets darker one tile per zone, down to a floor of 4.
    pub fn fov_radius(&self) -> i32 {
        (BASE_FOV_RADIUS - (self.depth as i32 - 1)).max(MIN_FOV_RADIUS)
    }
}

pub fn creature_count_for_depth(depth: u32) -> usize {
    (3 + depth).min(10) as usize
}

pub fn item_count_for_depth(depth: u32) -> usize {
    (5 + depth).min(12) as usize
}

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use crate::content;
use crate::game::combat::CombatSystem;
use crate::game::progress::RunStatus;
use crate::game::visibility::VisibilityTracker;
use crate::mapgen;
use crate::state::{DiveState, Map, Player};
use crate::types::*;

pub mod combat;
pub mod creatures;
pub mod fov;
pub mod items;
pub mod progress;
pub mod visibility;

mod hash;
mod turn;

#[cfg(test)]
pub(crate) mod test_support;

/// One dive run. Everything downstream of the seed and the accepted
/// command sequence is deterministic, which is what replay relies on.
pub struct Game {
    seed: u64,
    turn: u64,
    rng: ChaCha8Rng,
    state: DiveState,
    status: RunStatus,
    combat: CombatSystem,
    visibility: VisibilityTracker,
    next_input_seq: u64,
    // Bumped on every level rebuild so a restarted depth reshuffles
    // while staying a pure function of the accepted inputs.
    generation: u32,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            seed,
            turn: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            state: DiveState {
                map: Map::filled(1, 1),
                creatures: SlotMap::with_key(),
                items: SlotMap::with_key(),
                player: Player::new(Pos { y: 0, x: 0 }),
            },
            status: RunStatus::new(),
            combat: CombatSystem::new(),
            visibility: VisibilityTracker::new(),
            next_input_seq: 0,
            generation: 0,
        };
        game.rebuild_level();
        game
    }

    /// Tear down the current level and build the one for the current depth
    /// and generation. The diver carries over (position excepted).
    fn rebuild_level(&mut self) {
        let depth = self.status.depth;
        let level_seed = mapgen::derive_level_seed(self.seed, depth, self.generation);
        let generated = mapgen::generate_level(level_seed);

        let mut player = self.state.player.clone();
        player.pos = generated.player_start;

        let mut state = DiveState {
            map: generated.map,
            creatures: SlotMap::with_key(),
            items: SlotMap::with_key(),
            player,
        };
        let reserved = [generated.player_start, generated.exit];
        creatures::spawn_creatures(
            &mut state,
            level_seed,
            depth,
            progress::creature_count_for_depth(depth),
            &reserved,
        );
        items::spawn_items(&mut state, level_seed, progress::item_count_for_depth(depth), &reserved);

        self.state = state;
        self.visibility.reset();
        self.refresh_fov();
    }

    fn refresh_fov(&mut self) {
        let visible =
            fov::raycast_fov(&self.state.map, self.state.player.pos, self.status.fov_radius());
        self.visibility.update_visibility(visible);
    }

    fn descend(&mut self) -> Vec<String> {
        self.status.advance_level();
        self.generation += 1;
        self.rebuild_level();

        let zone = content::zone_name(self.status.depth);
        let messages =
            vec![format!("You descend into the {zone}!"), "The pressure increases...".to_string()];
        self.combat.append_messages(&messages);
        messages
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_turn(&self) -> u64 {
        self.turn
    }

    pub fn next_input_seq(&self) -> u64 {
        self.next_input_seq
    }

    pub fn state(&self) -> &DiveState {
        &self.state
    }

    pub fn status(&self) -> &RunStatus {
        &self.status
    }

    pub fn visibility(&self) -> &VisibilityTracker {
        &self.visibility
    }

    pub fn recent_messages(&self, count: usize) -> Vec<String> {
        self.combat.recent_messages(count)
    }
}

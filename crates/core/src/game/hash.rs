//! Snapshot hashing for replay divergence checks.

use super::*;

impl Game {
    /// Digest of the run-defining state. Replays compare this against the
    /// value the original session recorded; map tiles and creature rosters
    /// are derived from (seed, depth, generation), so hashing the drivers
    /// is enough to catch divergence.
    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);
        hasher.write_u64(self.next_input_seq);
        hasher.write_u32(self.generation);

        hasher.write_u32(self.status.depth);
        hasher.write_u32(self.status.score);
        hasher.write_u8(u8::from(self.status.victory));
        hasher.write_u8(u8::from(self.status.game_over));

        let player = &self.state.player;
        hasher.write_i32(player.pos.x);
        hasher.write_i32(player.pos.y);
        hasher.write_i32(player.hp);
        hasher.write_i32(player.attack_power);
        hasher.write_u32(player.inventory.data_points);

        hasher.finish()
    }
}

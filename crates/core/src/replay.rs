//! Headless re-execution of a journal. The engine is deterministic in
//! (seed, accepted commands), so replay just feeds the journal back in
//! and reports where the run ended up.

use crate::game::Game;
use crate::journal::InputJournal;
use crate::types::{Command, Direction, GameError};

#[derive(Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// The engine rejected a command the original session accepted,
    /// which means the journal and the build disagree.
    RejectedCommand { seq: u64, error: GameError },
    /// Sequence numbers are not dense from zero.
    SequenceGap { expected: u64, found: u64 },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_turn: u64,
    pub final_depth: u32,
    pub final_score: u32,
    pub defeated: bool,
    pub final_snapshot_hash: u64,
}

/// Rebuild the live game a journal describes. Used to resume a session
/// from its journal after a crash.
pub fn replay_journal_inputs(journal: &InputJournal) -> Result<Game, ReplayError> {
    let mut game = Game::new(journal.seed);

    for (index, record) in journal.inputs.iter().enumerate() {
        let expected = index as u64;
        if record.seq != expected {
            return Err(ReplayError::SequenceGap { expected, found: record.seq });
        }
        game.apply_command(record.command)
            .map_err(|error| ReplayError::RejectedCommand { seq: record.seq, error })?;
    }

    Ok(game)
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let game = replay_journal_inputs(journal)?;

    Ok(ReplayResult {
        final_turn: game.current_turn(),
        final_depth: game.status().depth,
        final_score: game.status().score,
        defeated: game.status().game_over,
        final_snapshot_hash: game.snapshot_hash(),
    })
}

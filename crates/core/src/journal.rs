use serde::{Deserialize, Serialize};

use crate::types::Command;

/// In-memory record of one session: the seed plus every accepted command,
/// in order. Together with the engine this reproduces the whole run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub command: Command,
}

impl InputJournal {
    pub fn new(seed: u64) -> Self {
        Self { format_version: 1, build_id: "dev".to_string(), seed, inputs: Vec::new() }
    }

    pub fn append_command(&mut self, command: Command, seq: u64) {
        self.inputs.push(InputRecord { seq, command });
    }
}

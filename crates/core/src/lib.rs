pub mod content;
pub mod game;
pub mod journal;
pub mod journal_file;
pub mod mapgen;
pub mod replay;
pub mod state;
pub mod types;

pub use game::Game;
pub use game::progress::RunStatus;
pub use game::visibility::VisibilityTracker;
pub use journal::{InputJournal, InputRecord};
pub use journal_file::{JournalLoadError, JournalWriter, LoadedJournal, load_journal_from_file};
pub use replay::*;
pub use state::{DiveState, Map, Player};
pub use types::*;

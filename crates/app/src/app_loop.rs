//! Per-frame input handling: key presses become engine commands, and
//! commands the engine accepts are queued for the journal file.

use core::{Command, Direction, Game, GameError, ItemKind, content};
use macroquad::prelude::{KeyCode, is_key_pressed};

const ACTION_KEYS: [KeyCode; 12] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::S,
    KeyCode::A,
    KeyCode::D,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::R,
];

/// A command the engine accepted this frame, ready to persist.
pub struct AcceptedInput {
    pub turn: u64,
    pub command: Command,
}

#[derive(Default)]
pub struct AppState {
    /// Drained by the caller after each tick to append to the journal.
    pub accepted_inputs: Vec<AcceptedInput>,
    /// Host-side notice for the dive log area (for example an empty item
    /// stack). Never journaled; the engine did not accept anything.
    pub notice: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process at most one command per frame.
    pub fn tick(&mut self, game: &mut Game, keys_pressed: &[KeyCode]) {
        self.accepted_inputs.clear();
        let Some(command) = command_for_keys(keys_pressed) else {
            return;
        };

        let turn = game.current_turn();
        match game.apply_command(command) {
            Ok(_) => {
                self.notice = None;
                self.accepted_inputs.push(AcceptedInput { turn, command });
            }
            Err(GameError::ItemNotHeld) => {
                if let Command::UseItem(kind) = command {
                    self.notice = Some(out_of_stock_notice(kind));
                }
            }
            // The game-over screen only listens for restart; anything
            // else falls through silently.
            Err(GameError::GameOver) => {}
        }
    }
}

pub fn capture_frame_input() -> Vec<KeyCode> {
    ACTION_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect()
}

pub fn command_for_keys(keys_pressed: &[KeyCode]) -> Option<Command> {
    for key in keys_pressed {
        let command = match key {
            KeyCode::Up | KeyCode::W => Command::Step(Direction::North),
            KeyCode::Down | KeyCode::S => Command::Step(Direction::South),
            KeyCode::Left | KeyCode::A => Command::Step(Direction::West),
            KeyCode::Right | KeyCode::D => Command::Step(Direction::East),
            KeyCode::Key1 => Command::UseItem(ItemKind::OxygenTank),
            KeyCode::Key2 => Command::UseItem(ItemKind::SignalFlare),
            KeyCode::Key3 => Command::UseItem(ItemKind::HarpoonUpgrade),
            KeyCode::R => Command::Restart,
            _ => continue,
        };
        return Some(command);
    }
    None
}

pub fn out_of_stock_notice(kind: ItemKind) -> String {
    match kind {
        ItemKind::OxygenTank => "No oxygen tanks available!".to_string(),
        ItemKind::SignalFlare => "No signal flares available!".to_string(),
        _ => format!("No {} available!", content::item_name(kind)),
    }
}

use std::path::PathBuf;

use app::app_loop::{self, AppState};
use app::{render, seed};
use core::Game;
use core::journal_file::JournalWriter;
use macroquad::prelude::*;

#[macroquad::main("Terminus Veil")]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed_choice = match seed::resolve_seed_from_args(&args, seed::generate_runtime_seed()) {
        Ok(choice) => choice,
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };
    let run_seed = seed_choice.value();

    let mut game = Game::new(run_seed);
    let journal_path = PathBuf::from(format!("journals/dive-{run_seed}.jsonl"));
    let mut journal = match JournalWriter::create(&journal_path, run_seed, env!("CARGO_PKG_VERSION"))
    {
        Ok(writer) => Some(writer),
        Err(error) => {
            eprintln!("journal disabled: {error}");
            None
        }
    };

    let mut app_state = AppState::new();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let keys = app_loop::capture_frame_input();
        app_state.tick(&mut game, &keys);

        if let Some(writer) = journal.as_mut() {
            for accepted in &app_state.accepted_inputs {
                if let Err(error) = writer.append(accepted.turn, accepted.command) {
                    eprintln!("journal write failed: {error}");
                    break;
                }
            }
        }

        clear_background(BLACK);
        render::draw_frame(&game, &app_state, run_seed);
        next_frame().await
    }
}

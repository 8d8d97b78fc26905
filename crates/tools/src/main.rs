use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::journal_file::load_journal_from_file;
use game_core::replay::replay_to_end;

/// Replay a recorded dive journal and print where the run ended up.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSONL journal file to replay
    #[arg(short, long)]
    journal: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = load_journal_from_file(&args.journal)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("failed to load journal {}", args.journal.display()))?;

    let result = replay_to_end(&loaded.journal)
        .map_err(|e| anyhow::anyhow!("replay diverged: {e:?}"))?;

    println!("Replay complete.");
    println!("Seed: {}", loaded.journal.seed);
    println!("Inputs: {}", loaded.journal.inputs.len());
    println!("Final Turn: {}", result.final_turn);
    println!("Final Depth: {}", result.final_depth);
    println!("Final Score: {}", result.final_score);
    println!("Defeated: {}", result.defeated);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}

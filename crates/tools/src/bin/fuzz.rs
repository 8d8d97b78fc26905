use anyhow::Result;
use clap::Parser;
use game_core::{Command, Direction, Game, GameError, ItemKind, TileKind};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Drive a run with random commands and assert engine invariants after
/// every accepted input.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 2000)]
    commands: u32,
}

const DIRECTIONS: [Direction; 4] =
    [Direction::North, Direction::South, Direction::West, Direction::East];
const ITEMS: [ItemKind; 3] =
    [ItemKind::OxygenTank, ItemKind::SignalFlare, ItemKind::HarpoonUpgrade];

fn random_command(rng: &mut ChaCha8Rng, game: &Game) -> Command {
    if game.status().game_over {
        return Command::Restart;
    }
    // Mostly walk; occasionally use an item or restart.
    match rng.next_u64() % 20 {
        0..=15 => Command::Step(DIRECTIONS[(rng.next_u64() % 4) as usize]),
        16..=18 => Command::UseItem(ITEMS[(rng.next_u64() % 3) as usize]),
        _ => Command::Restart,
    }
}

fn assert_invariants(game: &Game) {
    let state = game.state();
    let status = game.status();
    let visibility = game.visibility();

    let player = &state.player;
    assert!(player.hp <= player.max_hp, "invariant failed: oxygen above max");
    assert!(player.hp >= 0, "invariant failed: oxygen below zero");
    assert!(
        state.map.tile_at(player.pos) != TileKind::Wall,
        "invariant failed: diver inside a wall"
    );

    for creature in state.creatures.values() {
        assert!(creature.hp > 0, "invariant failed: corpse left in roster");
        assert!(creature.hp <= creature.max_hp, "invariant failed: creature hp above max");
        assert!(
            state.map.tile_at(creature.pos) != TileKind::Wall,
            "invariant failed: creature inside a wall"
        );
    }

    assert!(
        visibility.explored().is_superset(visibility.visible()),
        "invariant failed: visible cell never explored"
    );
    assert!(
        visibility.is_visible(player.pos),
        "invariant failed: diver cannot see own tile"
    );

    assert!(game.recent_messages(100).len() <= 10, "invariant failed: dive log overflow");
    assert!(status.score % 100 == 0, "invariant failed: score not a descent multiple");
    assert!(status.depth >= 1, "invariant failed: depth below surface");
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Fuzzing seed {} for {} commands...", args.seed, args.commands);
    let mut game = Game::new(args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut accepted = 0u32;
    let mut deepest = 1u32;
    for _ in 0..args.commands {
        let command = random_command(&mut rng, &game);
        match game.apply_command(command) {
            Ok(_) => accepted += 1,
            Err(GameError::ItemNotHeld) => {}
            Err(GameError::GameOver) => unreachable!("fuzz always restarts after defeat"),
        }
        assert_invariants(&game);
        deepest = deepest.max(game.status().depth);
    }

    println!(
        "Fuzzing completed: {} accepted, {} turns, deepest zone {}, final score {}.",
        accepted,
        game.current_turn(),
        deepest,
        game.status().score
    );
    Ok(())
}

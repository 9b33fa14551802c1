//! Headless AI vs AI games
//!
//! ```text
//! cargo run --release --bin selfplay -- --difficulty hard --red aggressive --blue favor-center
//! ```

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fourth::config::CONFIG_FILE;
use fourth::{AIEngine, Difficulty, Game, GameConfig, Side, Status, Strategy, Turn};

#[derive(Parser, Debug)]
#[command(name = "selfplay", about = "Let two AIs play The Fourth Protocol")]
struct Args {
    /// Config file (defaults apply when missing)
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Difficulty preset: easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Strategy for Red
    #[arg(long)]
    red: Option<Strategy>,

    /// Strategy for Blue
    #[arg(long)]
    blue: Option<Strategy>,

    /// Search depth, overriding the preset
    #[arg(long)]
    depth: Option<u32>,

    /// Board size, overriding the preset
    #[arg(long)]
    grid: Option<usize>,

    /// Stop after this many moves
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// Randomise opening placements with this seed
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the final position
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let mut config = GameConfig::load_or_default(&args.config)?;
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    config.depth = args.depth.or(config.depth);
    config.grid_size = args.grid.or(config.grid_size);
    config.random_placement_seed = args.seed.or(config.random_placement_seed);
    config.validate()?;

    let strategies = [
        args.red.unwrap_or(config.strategy),
        args.blue.unwrap_or(config.strategy),
    ];
    let mut engines = strategies.map(|strategy| AIEngine::with_config(&config.ai_config_with(strategy)));

    println!(
        "{}x{} board, {} in a row, depth {}: Red {} vs Blue {}",
        config.grid_size(),
        config.grid_size(),
        config.win_length,
        config.search_depth(),
        strategies[0],
        strategies[1]
    );

    let mut game = Game::new(&config);
    let started = Instant::now();
    let mut nodes = [0u64; 2];

    while !game.is_over() && game.turn_count() < args.max_turns {
        let side = game.side_to_move();
        let result = engines[side.index()].get_move_with_stats(game.board(), side, game.phase());
        nodes[side.index()] += result.nodes;

        let Some(mv) = result.best_move else {
            return Err(format!("{side} has no move in a live game").into());
        };
        let turn = game.play(mv)?;

        if !args.quiet {
            println!(
                "{:>3}. {side:<4} {mv}  score {} ({:?}, {} nodes, {}ms)",
                game.turn_count(),
                result.score,
                result.search_type,
                result.nodes,
                result.time_ms
            );
            println!("{}", game.board());
        }
        if let Turn::Passed(again) = turn {
            println!("     {} cannot move, {again} plays again", again.opponent());
        }
    }

    if args.quiet {
        println!("{}", game.board());
    }
    match game.status() {
        Status::Won { side, line } => {
            let cells: Vec<String> = line.iter().map(|p| p.to_string()).collect();
            println!("{side} wins after {} moves: {}", game.turn_count(), cells.join(" "));
        }
        Status::Drawn => println!("Draw after {} moves", game.turn_count()),
        Status::InProgress => println!("Stopped after {} moves", game.turn_count()),
    }
    println!(
        "Nodes: Red {} / Blue {}, {:.2}s",
        nodes[Side::Red.index()],
        nodes[Side::Blue.index()],
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

use anyhow::{bail, Context, Result};
use clap::Parser;
use jumpin_solver::engine::Board;
use jumpin_solver::generator::scramble;
use jumpin_solver::levels;
use jumpin_solver::solver::Solver;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generates scrambled Jump In' puzzles", long_about = None)]
struct Args {
    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 20)]
    count: u64,

    /// Seed of the first puzzle; puzzle `i` uses `start_seed + i`
    #[arg(long, default_value_t = 0)]
    start_seed: u64,

    /// Random moves played from the solved layout
    #[arg(long, default_value_t = 12)]
    steps: usize,

    /// Built-in level whose pieces are scrambled
    #[arg(short, long, default_value = "farmyard")]
    level: String,
}

/// Plays the level's own solution to get a solved board to scramble from.
fn solved_board(level: &str) -> Result<Board> {
    let mut board =
        levels::by_name(level).with_context(|| format!("Unknown level '{}'", level))?;
    for mv in Solver::new().solve(&board) {
        if !board.move_piece(&mv) {
            bail!("Solution move {} was rejected on level '{}'", mv, level);
        }
    }
    if !board.is_in_winning_state() {
        bail!("Level '{}' cannot be solved", level);
    }
    Ok(board)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let solved = solved_board(&args.level)?;
    info!(level = %args.level, board = %solved, "scrambling from solved layout");
    println!(
        "Generating {} puzzles from level '{}' ({} random moves each)...",
        args.count, args.level, args.steps
    );

    let mut lengths: Vec<usize> = Vec::new();
    for i in 0..args.count {
        let seed = args.start_seed + i;
        let board = scramble(&solved, args.steps, seed);
        let moves = Solver::new().solve(&board);
        if moves.is_empty() {
            println!("\nSeed {}: already solved after scrambling, skipped", seed);
            continue;
        }
        println!("\nPuzzle (Seed: {}), optimal moves: {}", seed, moves.len());
        println!("  {}", board);
        lengths.push(moves.len());
    }

    println!("\n--- Generation Complete ---");
    if lengths.is_empty() {
        println!("No unsolved puzzles were produced.");
        return Ok(());
    }
    let total: usize = lengths.iter().sum();
    let longest = lengths.iter().max().copied().unwrap_or(0);
    println!("Puzzles produced: {}", lengths.len());
    println!(
        "Average optimal length: {:.2}",
        total as f64 / lengths.len() as f64
    );
    println!("Longest optimal length: {}", longest);
    Ok(())
}

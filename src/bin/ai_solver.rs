use anyhow::{Context, Result};
use clap::Parser;
use jumpin_solver::engine::Board;
use jumpin_solver::generator::scramble;
use jumpin_solver::levels;
use jumpin_solver::solver::Solver;
use jumpin_solver::utils::board_from_text;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Prints a shortest solution for a Jump In' board", long_about = None)]
struct Args {
    /// Board string: 25 whitespace-separated tokens in row-major order
    #[arg(short, long, conflicts_with_all = ["file", "level"])]
    board: Option<String>,

    /// Path to a board file (a single board string, or one row of tokens per line)
    #[arg(short, long, conflicts_with = "level")]
    file: Option<PathBuf>,

    /// Name of a built-in level; the default layout is used when no board is given
    #[arg(short, long)]
    level: Option<String>,

    /// Scramble the board with random moves from this seed before solving
    #[arg(long)]
    scramble_seed: Option<u64>,

    /// Number of random moves used when scrambling
    #[arg(long, default_value_t = 10)]
    scramble_steps: usize,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_board_file(path: &Path) -> Result<Board> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("file");
    board_from_text(name, &content)
        .with_context(|| format!("Invalid board format in {}", path.display()))
}

fn load_board(args: &Args) -> Result<Board> {
    if let Some(representation) = &args.board {
        return Board::parse("command-line", representation).context("Invalid --board value");
    }
    if let Some(path) = &args.file {
        return read_board_file(path);
    }
    match &args.level {
        Some(name) => levels::by_name(name).with_context(|| {
            format!(
                "Unknown level '{}' (available: {})",
                name,
                levels::names().collect::<Vec<_>>().join(", ")
            )
        }),
        None => Ok(Board::new()),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut board = load_board(&args)?;
    if let Some(seed) = args.scramble_seed {
        board = scramble(&board, args.scramble_steps, seed);
    }

    println!("Loaded board '{}'\n", board.name());
    println!("Initial board state:\n{}\n", board.to_grid_string(None));
    println!("Board string: {}\n", board);

    if board.is_in_winning_state() {
        println!("The board is already solved.");
        return Ok(());
    }

    println!("Searching for the shortest solution...\n");
    let mut solver = Solver::new();
    let started = Instant::now();
    let moves = solver.solve(&board);
    let elapsed = started.elapsed();
    let stats = solver.last_stats();

    if moves.is_empty() {
        println!(
            "No solution exists ({} configurations explored in {:.2?}).",
            stats.discovered, elapsed
        );
        return Ok(());
    }

    println!(
        "Solution found in {:.2?} ({} configurations explored, {} expanded):\n",
        elapsed, stats.discovered, stats.expanded
    );
    println!("Moves ({}):", moves.len());
    for (i, mv) in moves.iter().enumerate() {
        println!("  Move {}: {}", i + 1, mv);
        if !board.move_piece(mv) {
            warn!(step = i + 1, %mv, "solution move was rejected by the board");
            break;
        }
    }
    println!("\nFinal board state:\n{}\n", board.to_grid_string(None));
    Ok(())
}

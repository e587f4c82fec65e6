use anyhow::{Context, Result};
use clap::Parser;
use jumpin_solver::engine::Board;
use jumpin_solver::game::Game;
use jumpin_solver::levels;
use jumpin_solver::moves::Move;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Jump In' in the terminal", long_about = None)]
struct Args {
    /// Name of a built-in level to play
    #[arg(short, long)]
    level: Option<String>,
}

fn parse_move(parts: &[&str]) -> Option<Move> {
    let coords: Vec<i32> = parts
        .iter()
        .map(|p| p.parse::<i32>())
        .collect::<Result<_, _>>()
        .ok()?;
    match coords.as_slice() {
        [x0, y0, x1, y1] => Some(Move::new(*x0, *y0, *x1, *y1)),
        _ => None,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let board = match &args.level {
        Some(name) => {
            levels::by_name(name).with_context(|| format!("Unknown level '{}'", name))?
        }
        None => Board::new(),
    };
    let mut game = Game::new(board);
    let mut highlight: Option<(usize, usize)> = None;
    println!("Welcome to Jump In'! Get every rabbit into a brown hole.");

    loop {
        println!("---------------------");
        println!("Level: {}, Moves: {}", game.board().name(), game.moves_made());
        println!("{}", game.board().to_grid_string(highlight.take()));

        if game.is_won() {
            println!();
            println!("---------------------");
            println!("🎉 SOLVED! 🎉");
            println!("Total Moves: {}", game.moves_made());
            println!("---------------------");
            break;
        }

        print!("Enter a move (x0 y0 x1 y1), 'h' for a hint, 'm' to list moves, 'u' to undo, 'r' to redo, 'q' to quit: ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input).context("Failed to read input")? == 0 {
            println!();
            break;
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "u" => {
                if game.undo() {
                    println!("Move undone.");
                } else {
                    println!("Nothing to undo.");
                }
            }
            "r" => {
                if game.redo() {
                    println!("Move redone.");
                } else {
                    println!("Nothing to redo.");
                }
            }
            "h" => {
                let hint = game.hint();
                if hint.is_valid() {
                    println!("Hint: move {}", hint);
                    highlight = Some((hint.x_start as usize, hint.y_start as usize));
                } else {
                    println!("No winning sequence exists from here. Try undoing a few moves.");
                }
            }
            "m" => {
                let moves = game.board().possible_moves();
                if moves.is_empty() {
                    println!("No piece can move.");
                }
                for mv in moves {
                    println!("  {}", mv);
                }
            }
            other => {
                let parts: Vec<&str> = other.split_whitespace().collect();
                match parse_move(&parts) {
                    Some(mv) => {
                        if game.play(&mv) {
                            println!("Move played.");
                        } else {
                            println!("Illegal move: {}", mv);
                        }
                    }
                    None => println!(
                        "Invalid input format. Use 'x0 y0 x1 y1', 'h', 'm', 'u', 'r' or 'q'."
                    ),
                }
            }
        }
    }
    Ok(())
}

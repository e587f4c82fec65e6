//! Seeded puzzle generation.
//!
//! Every rabbit jump and fox slide can be undone by another legal move, so the
//! configurations reachable from a board form an undirected graph. A random walk
//! that starts on a solved board therefore always ends on a solvable one.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::engine::Board;

/// Scrambles `start` by playing random legal moves.
///
/// The same `start`, `steps` and `seed` always produce the same board. The walk
/// makes `steps` moves and then keeps going while the board is in a winning
/// state, for at most `2 * steps` moves in total, so the result may still be
/// winning when the reachable set is very small. The walk also stops early if
/// no piece can move.
///
/// # Arguments
/// * `start`: The board to scramble, usually a solved one. It is not modified.
/// * `steps`: Number of random moves to play.
/// * `seed`: Seed for the random number generator.
///
/// # Returns
/// A new board named `<start name>-<seed>`, without listeners.
///
/// # Examples
/// ```
/// use jumpin_solver::engine::Board;
/// use jumpin_solver::generator::scramble;
///
/// let start = Board::new();
/// let a = scramble(&start, 8, 42);
/// let b = scramble(&start, 8, 42);
/// assert_eq!(a, b);
/// assert_eq!(a.name(), "default-42");
/// ```
pub fn scramble(start: &Board, steps: usize, seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = start.snapshot();
    board.rename(&format!("{}-{}", start.name(), seed));

    let limit = steps.saturating_mul(2);
    let mut made = 0;
    while made < limit && (made < steps || board.is_in_winning_state()) {
        let moves = board.possible_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        board.move_piece(mv);
        made += 1;
    }

    debug!(seed, moves = made, board = %board, "scrambled board");
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels;
    use crate::solver::Solver;
    use std::collections::HashSet;

    fn solved_farmyard() -> Board {
        let mut board = levels::by_name("farmyard").unwrap();
        for mv in Solver::new().solve(&board) {
            assert!(board.move_piece(&mv));
        }
        assert!(board.is_in_winning_state());
        board
    }

    #[test]
    fn test_scramble_is_deterministic_per_seed() {
        let start = solved_farmyard();
        assert_eq!(scramble(&start, 12, 7), scramble(&start, 12, 7));

        let distinct: HashSet<String> = (0..10)
            .map(|seed| scramble(&start, 12, seed).to_string())
            .collect();
        assert!(distinct.len() > 1, "all seeds produced the same board");
    }

    #[test]
    fn test_scramble_keeps_boards_solvable() {
        let start = solved_farmyard();
        for seed in 0..5 {
            let mut board = scramble(&start, 10, seed);
            let moves = Solver::new().solve(&board);
            if moves.is_empty() {
                assert!(board.is_in_winning_state());
                continue;
            }
            for mv in &moves {
                assert!(board.move_piece(mv));
            }
            assert!(board.is_in_winning_state(), "seed {} did not solve", seed);
        }
    }

    #[test]
    fn test_scramble_without_moves_returns_copy() {
        let start = Board::empty("bare");
        let board = scramble(&start, 5, 1);
        assert_eq!(board, start);
        assert_eq!(board.name(), "bare-1");
    }

    #[test]
    fn test_scramble_leaves_start_untouched() {
        let start = Board::new();
        let before = start.to_string();
        let _ = scramble(&start, 20, 3);
        assert_eq!(start.to_string(), before);
    }
}

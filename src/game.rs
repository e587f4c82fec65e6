//! Play sessions with undo, redo and hints.

use crate::engine::Board;
use crate::moves::Move;
use crate::solver::Solver;

/// Manages a single play session on a live board.
///
/// Every accepted move stores a snapshot of the board as it was before the move,
/// so moves can be undone and redone by restoring snapshots. Hints come from a
/// solver owned by the session, which keeps its cached path between requests.
///
/// # Examples
/// ```
/// use jumpin_solver::engine::Board;
/// use jumpin_solver::game::Game;
///
/// let mut game = Game::new(Board::new());
/// let hint = game.hint();
/// assert!(game.play(&hint));
/// assert_eq!(game.moves_made(), 1);
///
/// assert!(game.undo());
/// assert_eq!(game.board(), &Board::new());
/// assert!(game.redo());
/// assert!(!game.redo()); // nothing left to redo
/// ```
#[derive(Debug)]
pub struct Game {
    board: Board,
    history: Vec<Board>,
    undone: Vec<Board>,
    solver: Solver,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Game {
            board,
            history: Vec::new(),
            undone: Vec::new(),
            solver: Solver::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the live board, e.g. to register listeners.
    /// Changes made through it are not recorded in the history.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Number of moves currently on the undo stack.
    pub fn moves_made(&self) -> usize {
        self.history.len()
    }

    /// Plays `mv` on the live board.
    ///
    /// # Returns
    /// `true` if the board accepted the move. Accepting a move discards any
    /// moves that were available for redo.
    pub fn play(&mut self, mv: &Move) -> bool {
        let before = self.board.snapshot();
        if !self.board.move_piece(mv) {
            return false;
        }
        self.history.push(before);
        self.undone.clear();
        true
    }

    /// Reverts the last played move. Returns `false` if nothing was played.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.undone.push(self.board.snapshot());
        self.board.restore(&previous);
        true
    }

    /// Replays the last undone move. Returns `false` if nothing was undone.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.undone.pop() else {
            return false;
        };
        self.history.push(self.board.snapshot());
        self.board.restore(&next);
        true
    }

    /// Suggests the next move of a shortest winning path, or `Move::INVALID`
    /// when the board is won or cannot be won.
    pub fn hint(&mut self) -> Move {
        self.solver.next_best_move(&self.board)
    }

    pub fn is_won(&self) -> bool {
        self.board.is_in_winning_state()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Board::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BoardListener;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct Changes(AtomicUsize);

    impl BoardListener for Changes {
        fn on_board_changed(&self, _board: &Board) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_rejected_move_is_not_recorded() {
        let mut game = Game::default();
        assert!(!game.play(&Move::new(0, 2, 1, 2)));
        assert!(!game.play(&Move::INVALID));
        assert_eq!(game.moves_made(), 0);
        assert!(!game.undo());
    }

    #[test]
    fn test_undo_redo_restore_exact_boards() {
        let mut game = Game::default();
        let start = game.board().to_string();
        assert!(game.play(&Move::new(0, 2, 0, 0)));
        let after_first = game.board().to_string();
        assert!(game.play(&Move::new(4, 2, 4, 0)));
        assert!(game.is_won());

        assert!(game.undo());
        assert_eq!(game.board().to_string(), after_first);
        assert!(game.undo());
        assert_eq!(game.board().to_string(), start);
        assert!(!game.undo());

        assert!(game.redo());
        assert!(game.redo());
        assert!(game.is_won());
        assert_eq!(game.moves_made(), 2);
    }

    #[test]
    fn test_new_move_clears_redo() {
        let mut game = Game::default();
        assert!(game.play(&Move::new(0, 2, 0, 0)));
        assert!(game.undo());
        assert!(game.play(&Move::new(4, 2, 4, 0)));
        assert!(!game.redo());
    }

    #[test]
    fn test_hints_lead_to_a_win() {
        let mut game = Game::default();
        while !game.is_won() {
            let hint = game.hint();
            assert!(hint.is_valid());
            assert!(game.play(&hint));
        }
        assert_eq!(game.moves_made(), 2);
        assert_eq!(game.hint(), Move::INVALID);
    }

    #[test]
    fn test_undo_notifies_listeners() {
        let changes = Arc::new(Changes::default());
        let mut game = Game::default();
        game.board_mut().add_listener(changes.clone());
        assert!(game.play(&Move::new(0, 2, 0, 0)));
        assert!(game.undo());
        assert!(game.redo());
        assert_eq!(changes.0.load(Ordering::SeqCst), 3);
    }
}

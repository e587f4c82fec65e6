//! Built-in puzzle layouts.

use crate::engine::Board;
use crate::error::ParseBoardError;

/// A named puzzle and the length of its shortest solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Level {
    pub name: &'static str,
    /// Board string, row-major.
    pub layout: &'static str,
    pub optimal_moves: usize,
}

impl Level {
    pub fn board(&self) -> Result<Board, ParseBoardError> {
        Board::parse(self.name, self.layout)
    }
}

/// All built-in levels. The first one is the layout of `Board::new`.
pub const LEVELS: &[Level] = &[
    Level {
        name: "starter",
        layout: "X X X X X \
                 MU X X X MU \
                 RBB X X X RBG \
                 X X X X X \
                 X X X X X",
        optimal_moves: 2,
    },
    Level {
        name: "fox-gate",
        layout: "X X X X X \
                 X X FHU0 X X \
                 X X FTU0 X X \
                 X X MU X X \
                 X X RBW X X",
        optimal_moves: 2,
    },
    Level {
        name: "farmyard",
        layout: "X X X X X \
                 MU X FHU0 X MU \
                 RBB X FTU0 X RBG \
                 X X MU X X \
                 X X RBW X X",
        optimal_moves: 4,
    },
];

pub fn find(name: &str) -> Option<&'static Level> {
    LEVELS.iter().find(|level| level.name == name)
}

/// Builds the board of the level called `name`.
pub fn by_name(name: &str) -> Option<Board> {
    find(name).and_then(|level| level.board().ok())
}

pub fn names() -> impl Iterator<Item = &'static str> {
    LEVELS.iter().map(|level| level.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solver;

    #[test]
    fn test_first_level_is_default_layout() {
        assert_eq!(by_name(LEVELS[0].name), Some(Board::new()));
    }

    #[test]
    fn test_levels_parse_and_keep_their_names() {
        for level in LEVELS {
            let board = level.board().unwrap();
            assert_eq!(board.name(), level.name);
            assert!(!board.is_in_winning_state(), "{} starts solved", level.name);
        }
        assert!(by_name("no-such-level").is_none());
        assert_eq!(names().count(), LEVELS.len());
    }

    #[test]
    fn test_levels_have_declared_optimal_length() {
        for level in LEVELS {
            let mut board = level.board().unwrap();
            let moves = Solver::new().solve(&board);
            assert_eq!(moves.len(), level.optimal_moves, "level {}", level.name);
            for mv in &moves {
                assert!(board.move_piece(mv), "level {}: {} rejected", level.name, mv);
            }
            assert!(board.is_in_winning_state());
        }
    }
}

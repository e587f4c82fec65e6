//! Moves between two board coordinates.

use std::fmt;

/// The axis a move travels along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Diagonal or zero-length.
    Invalid,
}

/// An immutable request to move whatever stands on `(x_start, y_start)` to
/// `(x_end, y_end)`.
///
/// Coordinates are signed so that `Move::INVALID`, the "no move" answer of the
/// solver, can be represented. Such a move is always out of range for a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub x_start: i32,
    pub y_start: i32,
    pub x_end: i32,
    pub y_end: i32,
}

impl Move {
    /// Sentinel meaning "no valid move".
    pub const INVALID: Move = Move {
        x_start: -1,
        y_start: -1,
        x_end: -1,
        y_end: -1,
    };

    pub fn new(x_start: i32, y_start: i32, x_end: i32, y_end: i32) -> Self {
        Move {
            x_start,
            y_start,
            x_end,
            y_end,
        }
    }

    /// Classifies the move by the coordinates it changes.
    ///
    /// # Examples
    /// ```
    /// use jumpin_solver::moves::{Direction, Move};
    /// assert_eq!(Move::new(0, 0, 3, 0).direction(), Direction::Horizontal);
    /// assert_eq!(Move::new(1, 4, 1, 2).direction(), Direction::Vertical);
    /// assert_eq!(Move::new(0, 0, 1, 1).direction(), Direction::Invalid);
    /// assert_eq!(Move::new(2, 2, 2, 2).direction(), Direction::Invalid);
    /// ```
    pub fn direction(&self) -> Direction {
        let x_changes = self.x_start != self.x_end;
        let y_changes = self.y_start != self.y_end;
        match (x_changes, y_changes) {
            (true, false) => Direction::Horizontal,
            (false, true) => Direction::Vertical,
            _ => Direction::Invalid,
        }
    }

    pub fn x_distance(&self) -> i32 {
        (self.x_end - self.x_start).abs()
    }

    pub fn y_distance(&self) -> i32 {
        (self.y_end - self.y_start).abs()
    }

    /// Number of cells travelled along a straight move. Zero for invalid moves.
    pub fn distance(&self) -> i32 {
        match self.direction() {
            Direction::Horizontal => self.x_distance(),
            Direction::Vertical => self.y_distance(),
            Direction::Invalid => 0,
        }
    }

    /// Unit step `(dx, dy)` from start towards end, or `None` when the move is not
    /// a straight line.
    pub fn step(&self) -> Option<(i32, i32)> {
        match self.direction() {
            Direction::Horizontal => Some(((self.x_end - self.x_start).signum(), 0)),
            Direction::Vertical => Some((0, (self.y_end - self.y_start).signum())),
            Direction::Invalid => None,
        }
    }

    /// Whether this move differs from the sentinel.
    pub fn is_valid(&self) -> bool {
        *self != Move::INVALID
    }

    /// The same path walked the other way.
    pub fn reversed(&self) -> Move {
        Move::new(self.x_end, self.y_end, self.x_start, self.y_start)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.x_start, self.y_start, self.x_end, self.y_end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sentinel() {
        assert!(!Move::INVALID.is_valid());
        assert_eq!(Move::INVALID.direction(), Direction::Invalid);
        assert_eq!(Move::INVALID, Move::new(-1, -1, -1, -1));
    }

    #[test]
    fn test_distances() {
        let mv = Move::new(4, 1, 1, 1);
        assert_eq!(mv.x_distance(), 3);
        assert_eq!(mv.y_distance(), 0);
        assert_eq!(mv.distance(), 3);
        assert_eq!(mv.step(), Some((-1, 0)));

        let diagonal = Move::new(0, 0, 2, 2);
        assert_eq!(diagonal.distance(), 0);
        assert_eq!(diagonal.step(), None);
    }

    #[test]
    fn test_reversed_and_display() {
        let mv = Move::new(0, 2, 0, 0);
        assert_eq!(mv.reversed(), Move::new(0, 0, 0, 2));
        assert_eq!(mv.to_string(), "(0, 2) -> (0, 0)");
    }
}

//! Pieces that can occupy a tile.
//!
//! This module defines the three piece families of the puzzle:
//! - `Mushroom`: a static obstacle that never moves.
//! - `Rabbit`: moves by jumping over a contiguous run of occupied tiles.
//! - `Fox`: a rigid two-cell piece that slides along a fixed axis.
//!
//! A fox is stored as two `Piece::Fox` values, one per occupied tile. The halves
//! do not point at each other; each half finds its partner from its own position
//! and orientation (see `Fox::partner_offset`).

use std::fmt;

use crate::moves::Direction;

/// Coarse classification of a piece, independent of its per-piece attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Mushroom,
    Rabbit,
    Fox,
}

/// Cosmetic colour of a rabbit. It takes no part in movement legality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RabbitColour {
    Brown,
    White,
    Gray,
}

impl RabbitColour {
    /// Returns the single-letter code used in the board string.
    pub fn to_char(self) -> char {
        match self {
            RabbitColour::Brown => 'B',
            RabbitColour::White => 'W',
            RabbitColour::Gray => 'G',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(RabbitColour::Brown),
            'W' => Some(RabbitColour::White),
            'G' => Some(RabbitColour::Gray),
            _ => None,
        }
    }
}

/// Which end of a fox a half represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FoxHalf {
    Head,
    Tail,
}

/// The direction a fox faces. The head is always the cell farther in this direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FoxOrientation {
    Left,
    Right,
    Up,
    Down,
}

impl FoxOrientation {
    /// Unit step `(dx, dy)` pointing the way the fox faces. `y` grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            FoxOrientation::Left => (-1, 0),
            FoxOrientation::Right => (1, 0),
            FoxOrientation::Up => (0, -1),
            FoxOrientation::Down => (0, 1),
        }
    }

    /// The only axis along which a fox with this orientation may slide.
    pub fn axis(self) -> Direction {
        match self {
            FoxOrientation::Left | FoxOrientation::Right => Direction::Horizontal,
            FoxOrientation::Up | FoxOrientation::Down => Direction::Vertical,
        }
    }

    fn to_char(self) -> char {
        match self {
            FoxOrientation::Left => 'L',
            FoxOrientation::Right => 'R',
            FoxOrientation::Up => 'U',
            FoxOrientation::Down => 'D',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(FoxOrientation::Left),
            'R' => Some(FoxOrientation::Right),
            'U' => Some(FoxOrientation::Up),
            'D' => Some(FoxOrientation::Down),
            _ => None,
        }
    }
}

/// One half of a two-cell fox.
///
/// `pair` tells apart the (at most two) foxes on a board. It is only consulted
/// when cleaning solver paths; movement rules ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fox {
    pub half: FoxHalf,
    pub orientation: FoxOrientation,
    pub pair: bool,
}

impl Fox {
    pub fn new(half: FoxHalf, orientation: FoxOrientation, pair: bool) -> Self {
        Fox {
            half,
            orientation,
            pair,
        }
    }

    /// The half that completes this one.
    pub fn partner(&self) -> Fox {
        let half = match self.half {
            FoxHalf::Head => FoxHalf::Tail,
            FoxHalf::Tail => FoxHalf::Head,
        };
        Fox { half, ..*self }
    }

    /// Offset `(dx, dy)` from this half to its partner.
    ///
    /// # Examples
    /// ```
    /// use jumpin_solver::piece::{Fox, FoxHalf, FoxOrientation};
    /// let head = Fox::new(FoxHalf::Head, FoxOrientation::Up, false);
    /// // Facing up, the tail sits one row below the head.
    /// assert_eq!(head.partner_offset(), (0, 1));
    /// assert_eq!(head.partner().partner_offset(), (0, -1));
    /// ```
    pub fn partner_offset(&self) -> (i32, i32) {
        let (dx, dy) = self.orientation.delta();
        match self.half {
            FoxHalf::Head => (-dx, -dy),
            FoxHalf::Tail => (dx, dy),
        }
    }
}

/// A piece standing on a tile.
///
/// Pieces are plain values: two tiles holding equal pieces are indistinguishable,
/// which is what lets board equality ignore how a configuration was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    Mushroom,
    Rabbit(RabbitColour),
    Fox(Fox),
}

impl Piece {
    pub fn kind(&self) -> PieceKind {
        match self {
            Piece::Mushroom => PieceKind::Mushroom,
            Piece::Rabbit(_) => PieceKind::Rabbit,
            Piece::Fox(_) => PieceKind::Fox,
        }
    }

    /// Whether this piece can ever be the subject of a move.
    pub fn is_movable(&self) -> bool {
        !matches!(self, Piece::Mushroom)
    }

    /// Renders the canonical short code used in the board string.
    ///
    /// # Examples
    /// ```
    /// use jumpin_solver::piece::{Fox, FoxHalf, FoxOrientation, Piece, RabbitColour};
    /// assert_eq!(Piece::Mushroom.code(), "MU");
    /// assert_eq!(Piece::Rabbit(RabbitColour::Gray).code(), "RBG");
    /// let tail = Fox::new(FoxHalf::Tail, FoxOrientation::Left, true);
    /// assert_eq!(Piece::Fox(tail).code(), "FTL1");
    /// ```
    pub fn code(&self) -> String {
        match self {
            Piece::Mushroom => "MU".to_string(),
            Piece::Rabbit(colour) => format!("RB{}", colour.to_char()),
            Piece::Fox(fox) => {
                let half = match fox.half {
                    FoxHalf::Head => 'H',
                    FoxHalf::Tail => 'T',
                };
                let pair = if fox.pair { '1' } else { '0' };
                format!("F{}{}{}", half, fox.orientation.to_char(), pair)
            }
        }
    }

    /// Parses a short code back into a piece. Returns `None` for anything that is
    /// not exactly a mushroom, rabbit or fox code. The empty-tile token `X` is
    /// not a piece and is handled by the board parser.
    pub fn from_code(code: &str) -> Option<Piece> {
        let chars: Vec<char> = code.chars().collect();
        match chars.as_slice() {
            ['M', 'U'] => Some(Piece::Mushroom),
            ['R', 'B', colour] => RabbitColour::from_char(*colour).map(Piece::Rabbit),
            ['F', half, orientation, pair] => {
                let half = match *half {
                    'H' => FoxHalf::Head,
                    'T' => FoxHalf::Tail,
                    _ => return None,
                };
                let orientation = FoxOrientation::from_char(*orientation)?;
                let pair = match *pair {
                    '0' => false,
                    '1' => true,
                    _ => return None,
                };
                Some(Piece::Fox(Fox::new(half, orientation, pair)))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back() {
        let pieces = [
            Piece::Mushroom,
            Piece::Rabbit(RabbitColour::Brown),
            Piece::Rabbit(RabbitColour::White),
            Piece::Fox(Fox::new(FoxHalf::Head, FoxOrientation::Down, false)),
            Piece::Fox(Fox::new(FoxHalf::Tail, FoxOrientation::Right, true)),
        ];
        for piece in pieces {
            assert_eq!(Piece::from_code(&piece.code()), Some(piece));
        }
    }

    #[test]
    fn test_from_code_rejects_malformed() {
        for bad in ["", "X", "M", "MUU", "RB", "RBX", "RXB", "FHL", "FHL2", "FXL0", "FHQ0"] {
            assert_eq!(Piece::from_code(bad), None, "{:?} should not parse", bad);
        }
    }

    #[test]
    fn test_partner_offsets_are_opposite() {
        for orientation in [
            FoxOrientation::Left,
            FoxOrientation::Right,
            FoxOrientation::Up,
            FoxOrientation::Down,
        ] {
            let head = Fox::new(FoxHalf::Head, orientation, false);
            let (hx, hy) = head.partner_offset();
            let (tx, ty) = head.partner().partner_offset();
            assert_eq!((hx + tx, hy + ty), (0, 0));
            assert_eq!(head.partner().partner(), head);
        }
    }

    #[test]
    fn test_kind_and_movability() {
        assert_eq!(Piece::Mushroom.kind(), PieceKind::Mushroom);
        assert!(!Piece::Mushroom.is_movable());
        assert!(Piece::Rabbit(RabbitColour::Gray).is_movable());
        let fox = Fox::new(FoxHalf::Head, FoxOrientation::Left, false);
        assert_eq!(Piece::Fox(fox).kind(), PieceKind::Fox);
        assert_eq!(fox.orientation.axis(), Direction::Horizontal);
    }
}

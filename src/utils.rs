use crate::engine::{Board, BOARD_SIZE, EMPTY_TOKEN};
use crate::error::ParseBoardError;

/// Name given to boards built by `board_from_rows`.
pub const ROWS_BOARD_NAME: &str = "custom";

/// Parses an array of row strings into a `Board`.
///
/// Each string slice describes one row, starting from row 0, as whitespace-separated
/// tokens in the board-string format (`X`, `MU`, `RBB`, `FHL0`, ...).
/// If fewer than `BOARD_SIZE` rows are provided, the remaining rows are empty.
/// Similarly, if a row has fewer than `BOARD_SIZE` tokens, the rest of that row is empty.
///
/// # Arguments
/// * `rows`: A slice of string slices, one per row, top row first.
///
/// # Returns
/// * `Ok(Board)` named `ROWS_BOARD_NAME` if parsing is successful.
/// * `Err(ParseBoardError)` if:
///     - The number of rows exceeds `BOARD_SIZE`.
///     - Any row holds more than `BOARD_SIZE` tokens.
///     - A token is not recognized.
///
/// # Examples
/// ```
/// use jumpin_solver::utils::board_from_rows;
/// use jumpin_solver::piece::Piece;
///
/// let board = board_from_rows(&[
///     "X MU",   // Row 0
///     "",       // Row 1 is empty
///     "X X RBW", // Row 2
/// ])
/// .unwrap();
/// assert_eq!(board.piece(1, 0), Some(Piece::Mushroom));
/// assert!(!board.is_occupied(0, 1));
/// assert!(board.is_in_winning_state()); // the rabbit sits in the centre hole
///
/// assert!(board_from_rows(&["X X X X X X"]).is_err());
/// assert!(board_from_rows(&["RBQ"]).is_err());
/// ```
pub fn board_from_rows(rows: &[&str]) -> Result<Board, ParseBoardError> {
    if rows.len() > BOARD_SIZE {
        return Err(ParseBoardError::TooManyRows {
            expected: BOARD_SIZE,
            found: rows.len(),
        });
    }

    let mut tokens = vec![EMPTY_TOKEN; BOARD_SIZE * BOARD_SIZE];
    for (r, row) in rows.iter().enumerate() {
        let row_tokens: Vec<&str> = row.split_whitespace().collect();
        if row_tokens.len() > BOARD_SIZE {
            return Err(ParseBoardError::RowTooLong {
                row: r,
                expected: BOARD_SIZE,
                found: row_tokens.len(),
            });
        }
        for (c, token) in row_tokens.into_iter().enumerate() {
            tokens[r * BOARD_SIZE + c] = token;
        }
    }

    Board::parse(ROWS_BOARD_NAME, &tokens.join(" "))
}

/// Reads a board from free-form text.
///
/// Lines that are blank or start with `#` are ignored. If what remains is a
/// single line it must be a complete board string; otherwise each line is a row,
/// as accepted by `board_from_rows`.
pub fn board_from_text(name: &str, text: &str) -> Result<Board, ParseBoardError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    if lines.len() == 1 {
        return Board::parse(name, lines[0]);
    }
    let board = board_from_rows(&lines)?;
    Board::parse(name, &board.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Piece, RabbitColour};

    #[test]
    fn test_board_from_rows_valid() {
        let board = board_from_rows(&[
            "X X X X X",
            "MU X X X MU",
            "RBB X X X RBG",
            "X X X X X",
            "X X X X X",
        ])
        .unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(board.name(), ROWS_BOARD_NAME);
    }

    #[test]
    fn test_board_from_rows_unknown_token() {
        let result = board_from_rows(&["X X ZZ"]);
        assert_eq!(
            result,
            Err(ParseBoardError::UnknownToken {
                index: 2,
                token: "ZZ".to_string()
            })
        );
    }

    #[test]
    fn test_board_from_rows_row_too_long() {
        let result = board_from_rows(&["", "X X X X X MU"]);
        assert!(matches!(
            result,
            Err(ParseBoardError::RowTooLong { row: 1, found: 6, .. })
        ));
    }

    #[test]
    fn test_board_from_rows_too_many_rows() {
        let rows = vec!["X"; BOARD_SIZE + 1];
        let result = board_from_rows(&rows);
        assert!(matches!(
            result,
            Err(ParseBoardError::TooManyRows { found: 6, .. })
        ));
        assert!(result.unwrap_err().to_string().contains("invalid number of rows"));
    }

    #[test]
    fn test_board_from_rows_empty_input() {
        let board = board_from_rows(&[]).unwrap();
        assert_eq!(board, Board::empty("anything"));
    }

    #[test]
    fn test_board_from_text_accepts_both_layouts() {
        let single = "# one line\nX X X X X MU X X X MU RBB X X X RBG X X X X X X X X X X\n";
        let rows = "X X X X X\nMU X X X MU\n\nRBB X X X RBG\n";
        let a = board_from_text("a", single).unwrap();
        let b = board_from_text("b", rows).unwrap();
        assert_eq!(a, b);
        assert_eq!(b.name(), "b");
        assert_eq!(b.piece(4, 2), Some(Piece::Rabbit(RabbitColour::Gray)));
    }
}

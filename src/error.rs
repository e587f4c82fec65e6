//! Error types for reading boards from text.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected {expected} tokens, found {found}")]
    WrongTokenCount { expected: usize, found: usize },

    #[error("unrecognized token '{token}' at position {index}")]
    UnknownToken { index: usize, token: String },

    #[error("invalid number of rows: expected at most {expected}, found {found}")]
    TooManyRows { expected: usize, found: usize },

    #[error("row {row} is too long: expected at most {expected} tokens, found {found}")]
    RowTooLong {
        row: usize,
        expected: usize,
        found: usize,
    },
}

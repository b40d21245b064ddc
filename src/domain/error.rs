use super::Point;

/// Errors raised when building or editing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions { rows: usize, cols: usize },

    #[error("board of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("point {point} is outside the {rows}x{cols} board")]
    OutOfBounds { point: Point, rows: usize, cols: usize },

    #[error("unexpected character {found:?} at line {line}, column {column}")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },
}

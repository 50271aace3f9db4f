use crate::{Cell, Position};

/// The error type for [`Board::from_rows()`](crate::Board::from_rows).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidBoard {
    TooSmall {
        rows: usize,
        columns: usize,
    },
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    InvalidTile {
        position: Position,
        value: Cell,
    },
}

impl std::error::Error for InvalidBoard {}

impl std::fmt::Display for InvalidBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidBoard::TooSmall { rows, columns } =>
                write!(f, "A board needs at least 2 rows and 2 columns, got {}x{}", rows, columns),
            InvalidBoard::Ragged { row, expected, found } =>
                write!(f, "Row {} has {} cells, but the first row has {}", row, found, expected),
            InvalidBoard::InvalidTile { position, value } =>
                write!(f, "The tile {} at {} is neither empty nor a power of two of at least 2", value, position),
        }
    }
}

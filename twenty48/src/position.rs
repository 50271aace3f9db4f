use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, or a step between two coordinates.
///
/// Components are signed so that a traversal can step one past either edge
/// of the board, which it uses as its end sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Self) {
        self.row += rhs.row;
        self.column += rhs.column;
    }
}

impl Add for Position {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl SubAssign for Position {
    fn sub_assign(&mut self, rhs: Self) {
        self.row -= rhs.row;
        self.column -= rhs.column;
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

/// Two adjacent cells on a line.
///
/// Tiles travel from `first` to `second`, i.e. `second` is one step closer
/// to the end of the line that tiles are shifted towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionPair {
    pub first: Position,
    pub second: Position,
}

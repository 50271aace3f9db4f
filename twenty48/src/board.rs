mod error;
mod positions;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

pub use error::*;
pub use positions::*;

use crate::{handle_pair, Direction, LineTraversal, PairOutcome, Position, PositionPair};

/// The value of a single cell. `0` means the cell is empty.
pub type Cell = u64;

/// Number of rows of the [default](Board::default) board.
pub const ROW_COUNT: usize = 4;
/// Number of columns of the [default](Board::default) board.
pub const COLUMN_COUNT: usize = 4;
/// The value of every tile placed by [`Board::spawn()`].
pub const SPAWN_VALUE: Cell = 2;

/// A rectangular grid of tiles.
///
/// The only ways to change a board are [`shift()`](Self::shift),
/// [`spawn()`](Self::spawn) and [`reset()`](Self::reset). Every cell holds
/// either `0` or a power of two that is at least [`SPAWN_VALUE`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "BoardRows")]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Row-major.
    cells: Vec<Cell>,
}

/// Serialized form of a [`Board`].
#[derive(Clone, Debug, Serialize)]
struct BoardRows {
    rows: Vec<Vec<Cell>>,
}

impl From<Board> for BoardRows {
    fn from(board: Board) -> Self {
        Self {
            rows: board.to_rows(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(ROW_COUNT, COLUMN_COUNT)
    }
}

impl Board {
    /// Creates an empty board.
    ///
    /// Panics if either dimension is smaller than 2.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(
            rows >= 2 && columns >= 2,
            "a board needs at least 2 rows and 2 columns, got {}x{}",
            rows,
            columns
        );
        Self {
            rows,
            columns,
            cells: vec![0; rows * columns],
        }
    }

    /// Creates a board from a list of rows, e.g. to set up a particular position.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self, InvalidBoard> {
        let columns = rows.first().map_or(0, Vec::len);
        if rows.len() < 2 || columns < 2 {
            return Err(InvalidBoard::TooSmall {
                rows: rows.len(),
                columns,
            });
        }

        let mut cells = Vec::with_capacity(rows.len() * columns);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(InvalidBoard::Ragged {
                    row: row_idx,
                    expected: columns,
                    found: row.len(),
                });
            }
            for (column_idx, &value) in row.iter().enumerate() {
                if value != 0 && (value < SPAWN_VALUE || !value.is_power_of_two()) {
                    return Err(InvalidBoard::InvalidTile {
                        position: Position::new(row_idx as i32, column_idx as i32),
                        value,
                    });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.column >= 0
            && (position.row as usize) < self.rows
            && (position.column as usize) < self.columns
    }

    /// Returns the value at `position`.
    ///
    /// Panics if the position is outside of the board.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[self.index(position)]
    }

    /// Copies the cells out, one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.columns)
            .map(|row| row.to_vec())
            .collect()
    }

    /// All positions of the board in row-major order.
    pub fn positions(&self) -> Positions {
        Positions::new(self.rows, self.columns)
    }

    /// All cells of the board together with their positions, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.positions().map(move |position| (position, self.get(position)))
    }

    /// Slides all tiles towards `direction`, merging equal neighbours.
    ///
    /// A tile that was created by a merge does not merge again during the
    /// same shift. Returns whether any tile moved or merged.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let line_count = if direction.is_vertical() {
            self.columns
        } else {
            self.rows
        };
        // Cells holding a tile that was produced by a merge during this shift
        let mut merged = vec![false; self.cells.len()];
        let mut changed = false;
        for index in 0..line_count {
            changed |= self.shift_line(direction, index as i32, &mut merged);
        }

        #[cfg(feature = "tracing")]
        if changed {
            tracing::trace!(%direction, "shifted board");
        }
        changed
    }

    // Repeats passes over one line until a pass changes nothing.
    //
    // Every tile that can still move advances by one cell per pass, so a line
    // of length L changes in at most L-1 passes. The L-th pass only confirms it.
    fn shift_line(&mut self, direction: Direction, index: i32, merged: &mut [bool]) -> bool {
        let line_len = if direction.is_vertical() {
            self.rows
        } else {
            self.columns
        };

        let mut any_change = false;
        for _ in 0..line_len {
            let mut pass_change = false;
            for PositionPair { first, second } in self.traversal(direction, index) {
                let (first_idx, second_idx) = (self.index(first), self.index(second));
                let mut first_value = self.cells[first_idx];
                let mut second_value = self.cells[second_idx];
                if first_value == second_value && (merged[first_idx] || merged[second_idx]) {
                    continue;
                }
                match handle_pair(&mut first_value, &mut second_value) {
                    PairOutcome::Unchanged => continue,
                    PairOutcome::Moved => merged[second_idx] = merged[first_idx],
                    PairOutcome::Merged => merged[second_idx] = true,
                }
                merged[first_idx] = false;
                self.cells[first_idx] = first_value;
                self.cells[second_idx] = second_value;
                pass_change = true;
            }

            if !pass_change {
                break;
            }
            any_change = true;
        }
        any_change
    }

    /// Places a [`SPAWN_VALUE`] tile on an empty cell chosen uniformly at random.
    ///
    /// Returns `false`, leaving the board untouched, if there is no empty cell.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let empty_positions: Vec<Position> = self
            .positions()
            .filter(|&position| self.get(position) == 0)
            .collect();
        let Some(&position) = empty_positions.choose(rng) else {
            return false;
        };
        let idx = self.index(position);
        self.cells[idx] = SPAWN_VALUE;

        #[cfg(feature = "tracing")]
        tracing::trace!(%position, "spawned tile");
        true
    }

    /// Whether every cell holds a tile.
    pub fn full(&self) -> bool {
        self.positions().all(|position| self.get(position) != 0)
    }

    /// Empties every cell.
    pub fn reset(&mut self) {
        for position in self.positions() {
            let idx = self.index(position);
            self.cells[idx] = 0;
        }
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    /// The largest tile on the board, or `0` if the board is empty.
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Whether shifting towards `direction` would change the board.
    ///
    /// The board itself is not modified.
    pub fn can_shift(&self, direction: Direction) -> bool {
        self.clone().shift(direction)
    }

    fn traversal(&self, direction: Direction, index: i32) -> LineTraversal {
        LineTraversal::new(direction, index, self.rows as i32, self.columns as i32)
    }

    fn index(&self, position: Position) -> usize {
        assert!(
            self.contains(position),
            "position {} is outside of the {}x{} board",
            position,
            self.rows,
            self.columns
        );
        position.row as usize * self.columns + position.column as usize
    }
}

use crate::{Board, Position};

/// Draws the board as a box, one line per row, with empty cells shown as `·`.
///
/// All cells are right-aligned to the width of the largest tile.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        let inner_width = self.columns() * (width + 1) + 1;

        writeln!(f, "╭{}╮", "─".repeat(inner_width))?;
        for row in 0..self.rows() {
            write!(f, "│")?;
            for column in 0..self.columns() {
                match self.get(Position::new(row as i32, column as i32)) {
                    0 => write!(f, " {:>width$}", "·", width = width)?,
                    value => write!(f, " {:>width$}", value, width = width)?,
                }
            }
            writeln!(f, " │")?;
        }
        write!(f, "╰{}╯", "─".repeat(inner_width))
    }
}

#[cfg(test)]
mod tests {
    use crate::Board;

    #[test]
    fn small_tiles() {
        let board = Board::from_rows(&[vec![2, 0], vec![0, 4]]).unwrap();
        assert_eq!(board.to_string(), "╭─────╮\n│ 2 · │\n│ · 4 │\n╰─────╯");
    }

    #[test]
    fn wide_tiles_are_right_aligned() {
        let board = Board::from_rows(&[vec![1024, 2, 0], vec![0, 0, 16]]).unwrap();
        assert_eq!(
            board.to_string(),
            "╭────────────────╮\n│ 1024    2    · │\n│    ·    ·   16 │\n╰────────────────╯"
        );
    }

    #[test]
    fn empty_board() {
        assert_eq!(
            Board::new(2, 2).to_string(),
            "╭─────╮\n│ · · │\n│ · · │\n╰─────╯"
        );
    }
}

use std::iter::FusedIterator;

use crate::Position;

/// Iterator over every position of a board in row-major order.
///
/// Produced by [`Board::positions()`](crate::Board::positions). It only
/// holds the board dimensions, so the board may be modified while iterating.
#[derive(Clone, Debug)]
pub struct Positions {
    next: usize,
    len: usize,
    columns: usize,
}

impl Positions {
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        Self {
            next: 0,
            len: rows * columns,
            columns,
        }
    }
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.len {
            return None;
        }
        let idx = self.next;
        self.next += 1;
        Some(Position::new(
            (idx / self.columns) as i32,
            (idx % self.columns) as i32,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}

impl FusedIterator for Positions {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use quickcheck::quickcheck;

    use crate::{Board, Position};

    quickcheck! {
        fn visits_every_position_once(rows: u8, columns: u8) -> bool {
            let (rows, columns) = (2 + usize::from(rows % 8), 2 + usize::from(columns % 8));
            let board = Board::new(rows, columns);
            let positions: Vec<Position> = board.positions().collect();
            let unique: HashSet<Position> = positions.iter().copied().collect();
            positions.len() == rows * columns
                && unique.len() == positions.len()
                && positions.iter().all(|&p| board.contains(p))
                && positions.windows(2).all(|w| (w[0].row, w[0].column) < (w[1].row, w[1].column))
        }
    }

    #[test]
    fn row_major_order() {
        let board = Board::new(2, 3);
        let positions: Vec<(i32, i32)> = board.positions().map(|p| (p.row, p.column)).collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn restartable_and_exact() {
        let board = Board::default();
        let mut positions = board.positions();
        assert_eq!(positions.len(), 16);
        positions.next();
        let rest = positions.clone();
        assert_eq!(rest.count(), 15);
        assert_eq!(positions.count(), 15);
        assert_eq!(board.positions().next(), Some(Position::new(0, 0)));
    }
}

use std::iter::FusedIterator;

use crate::{Direction, Position, PositionPair};

/// Iterator over the adjacent cell pairs of one line, as examined by a shift.
///
/// For a line of length `L` this yields `L - 1` pairs. Each pair is a
/// position and its neighbour one step closer to the end of the line that
/// tiles slide towards. The first pair touches that end, and every following
/// pair is one step further away from it.
///
/// The iterator walks from a precomputed start towards an exclusive end
/// sentinel and stops exactly when it reaches the sentinel.
#[derive(Clone, Debug)]
pub struct LineTraversal {
    current: Position,
    end: Position,
    delta: Position,
}

impl LineTraversal {
    /// Creates the traversal for line `index` of a `rows` x `columns` board.
    ///
    /// `index` selects a column when shifting up or down, and a row when
    /// shifting left or right.
    pub fn new(direction: Direction, index: i32, rows: i32, columns: i32) -> Self {
        debug_assert!(rows >= 2 && columns >= 2);
        // a  - b  - c  - d   (shifted towards a)
        // ab - bc - cd
        let (current, end, delta) = match direction {
            Direction::Up => (
                Position::new(1, index),
                Position::new(rows, index),
                Position::new(1, 0),
            ),
            Direction::Right => (
                Position::new(index, columns - 2),
                Position::new(index, -1),
                Position::new(0, -1),
            ),
            Direction::Down => (
                Position::new(rows - 2, index),
                Position::new(-1, index),
                Position::new(-1, 0),
            ),
            Direction::Left => (
                Position::new(index, 1),
                Position::new(index, columns),
                Position::new(0, 1),
            ),
        };
        Self {
            current,
            end,
            delta,
        }
    }

    fn remaining(&self) -> usize {
        let diff = self.end - self.current;
        // delta is a unit step along one axis, so this is the distance in steps
        (diff.row * self.delta.row + diff.column * self.delta.column) as usize
    }
}

impl Iterator for LineTraversal {
    type Item = PositionPair;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.end {
            return None;
        }
        let first = self.current;
        self.current += self.delta;
        Some(PositionPair {
            first,
            second: first - self.delta,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineTraversal {}

impl FusedIterator for LineTraversal {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(direction: Direction, index: i32, rows: i32, columns: i32) -> Vec<((i32, i32), (i32, i32))> {
        LineTraversal::new(direction, index, rows, columns)
            .map(|p| {
                (
                    (p.first.row, p.first.column),
                    (p.second.row, p.second.column),
                )
            })
            .collect()
    }

    #[test]
    fn up_walks_down_a_column() {
        assert_eq!(
            pairs(Direction::Up, 2, 4, 4),
            vec![((1, 2), (0, 2)), ((2, 2), (1, 2)), ((3, 2), (2, 2))]
        );
    }

    #[test]
    fn down_walks_up_a_column() {
        assert_eq!(
            pairs(Direction::Down, 0, 4, 4),
            vec![((2, 0), (3, 0)), ((1, 0), (2, 0)), ((0, 0), (1, 0))]
        );
    }

    #[test]
    fn left_and_right_walk_a_row() {
        assert_eq!(
            pairs(Direction::Left, 1, 4, 4),
            vec![((1, 1), (1, 0)), ((1, 2), (1, 1)), ((1, 3), (1, 2))]
        );
        assert_eq!(
            pairs(Direction::Right, 3, 4, 4),
            vec![((3, 2), (3, 3)), ((3, 1), (3, 2)), ((3, 0), (3, 1))]
        );
    }

    #[test]
    fn rectangular_boards_use_the_matching_axis() {
        // 2 rows, 5 columns
        assert_eq!(LineTraversal::new(Direction::Up, 4, 2, 5).count(), 1);
        assert_eq!(LineTraversal::new(Direction::Down, 4, 2, 5).count(), 1);
        assert_eq!(LineTraversal::new(Direction::Left, 1, 2, 5).count(), 4);
        assert_eq!(
            pairs(Direction::Right, 1, 2, 5).last(),
            Some(&((1, 0), (1, 1)))
        );
    }

    #[test]
    fn size_hint_is_exact_and_iterator_is_fused() {
        let mut traversal = LineTraversal::new(Direction::Right, 0, 3, 6);
        assert_eq!(traversal.len(), 5);
        traversal.next();
        assert_eq!(traversal.len(), 4);
        for _ in traversal.by_ref() {}
        assert_eq!(traversal.len(), 0);
        assert_eq!(traversal.next(), None);
        assert_eq!(traversal.next(), None);
    }
}

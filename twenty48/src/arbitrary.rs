use quickcheck::{Arbitrary, Gen};

use crate::{Board, Cell, Direction};

impl Arbitrary for Direction {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Direction::ALL).unwrap()
    }
}

impl Arbitrary for Board {
    fn arbitrary(g: &mut Gen) -> Self {
        let rows = 2 + usize::from(u8::arbitrary(g) % 5);
        let columns = 2 + usize::from(u8::arbitrary(g) % 5);
        // Few distinct small values, so that merges are common
        let values: [Cell; 8] = [0, 0, 0, 2, 2, 4, 8, 16];
        let cells: Vec<Vec<Cell>> = (0..rows)
            .map(|_| (0..columns).map(|_| *g.choose(&values).unwrap()).collect())
            .collect();
        Board::from_rows(&cells).unwrap()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Try emptying one tile at a time
        let board = self.clone();
        Box::new(
            self.iter()
                .filter(|&(_, value)| value != 0)
                .map(|(position, _)| position)
                .collect::<Vec<_>>()
                .into_iter()
                .map(move |position| {
                    let mut rows = board.to_rows();
                    rows[position.row as usize][position.column as usize] = 0;
                    Board::from_rows(&rows).unwrap()
                }),
        )
    }
}

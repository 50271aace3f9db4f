use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use twenty48::{Board, Direction};

/// Decides which way to shift the board, one move at a time.
pub trait Strategy {
    fn name(&self) -> &str;

    /// Returns `None` only if no direction changes the board.
    fn next_move(&mut self, board: &Board) -> Option<Direction>;
}

/// The directions that would change `board`, in [`Direction::ALL`] order.
pub fn changing_moves(board: &Board) -> impl Iterator<Item = Direction> + '_ {
    Direction::ALL
        .into_iter()
        .filter(move |&direction| board.can_shift(direction))
}

/// The order tried by [`PriorityStrategy`] unless configured otherwise.
///
/// Keeps the large tiles in the bottom left corner.
pub const CORNER_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Up,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Random,
    Priority,
    Greedy,
}

impl StrategyKind {
    /// `priority` is only used by [`StrategyKind::Priority`].
    pub fn build(self, rng: &mut StdRng, priority: &[Direction]) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new(rng)),
            StrategyKind::Priority => Box::new(PriorityStrategy::new(priority)),
            StrategyKind::Greedy => Box::new(GreedyStrategy),
        }
    }
}

/// Picks uniformly among the moves that change the board.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(rng: &mut StdRng) -> Self {
        Self {
            rng: StdRng::seed_from_u64(rng.gen()),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn next_move(&mut self, board: &Board) -> Option<Direction> {
        let moves: Vec<Direction> = changing_moves(board).collect();
        moves.choose(&mut self.rng).copied()
    }
}

/// Plays the first move in a fixed order that changes the board.
///
/// Directions missing from the order are tried last, so that the strategy
/// only gives up when the board cannot move at all.
pub struct PriorityStrategy {
    order: Vec<Direction>,
}

impl PriorityStrategy {
    pub fn new(order: &[Direction]) -> Self {
        let mut full_order = Vec::with_capacity(4);
        for &direction in order.iter().chain(Direction::ALL.iter()) {
            if !full_order.contains(&direction) {
                full_order.push(direction);
            }
        }
        Self { order: full_order }
    }

    pub fn order(&self) -> &[Direction] {
        &self.order
    }
}

impl Default for PriorityStrategy {
    fn default() -> Self {
        Self::new(&CORNER_ORDER)
    }
}

impl Strategy for PriorityStrategy {
    fn name(&self) -> &str {
        "priority"
    }

    fn next_move(&mut self, board: &Board) -> Option<Direction> {
        self.order
            .iter()
            .copied()
            .find(|&direction| board.can_shift(direction))
    }
}

/// Plays the move that leaves the most empty cells.
///
/// Ties go to the direction that comes first in [`Direction::ALL`].
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn name(&self) -> &str {
        "greedy"
    }

    fn next_move(&mut self, board: &Board) -> Option<Direction> {
        let mut best: Option<(Direction, usize)> = None;
        for direction in Direction::ALL {
            let mut shifted = board.clone();
            if !shifted.shift(direction) {
                continue;
            }
            let empty = shifted.empty_count();
            if best.map_or(true, |(_, best_empty)| empty > best_empty) {
                best = Some((direction, empty));
            }
        }
        best.map(|(direction, _)| direction)
    }
}

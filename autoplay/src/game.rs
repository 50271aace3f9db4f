use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, trace, warn};
use twenty48::{Board, Cell, Direction};

use crate::{RunConfig, RunReport, Strategy};

/// Number of tiles placed before the first move.
pub const INITIAL_TILES: usize = 2;

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// No direction changes the board any more.
    Stuck,
    /// The configured move limit was reached.
    MoveLimit,
    /// The strategy picked a direction that does not change the board.
    NoOpMove(Direction),
}

impl EndReason {
    pub fn name(&self) -> &'static str {
        match self {
            EndReason::Stuck => "stuck",
            EndReason::MoveLimit => "move limit",
            EndReason::NoOpMove(_) => "no-op move",
        }
    }
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::NoOpMove(direction) => write!(f, "{} ({})", self.name(), direction),
            _ => f.write_str(self.name()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// Number of moves that changed the board.
    pub moves: usize,
    pub max_tile: Cell,
    pub end_reason: EndReason,
    pub final_board: Board,
}

/// Plays one game from an empty board until the strategy runs out of moves
/// or the move limit is hit.
///
/// After every move that changes the board, a new tile is spawned.
pub fn play_game(rng: &mut StdRng, strategy: &mut dyn Strategy, config: &RunConfig) -> GameSummary {
    let mut board = Board::new(config.rows, config.columns);
    for _ in 0..INITIAL_TILES {
        board.spawn(rng);
    }

    let mut moves = 0;
    let end_reason = loop {
        if moves >= config.max_moves {
            break EndReason::MoveLimit;
        }
        let Some(direction) = strategy.next_move(&board) else {
            break EndReason::Stuck;
        };
        if !board.shift(direction) {
            warn!(
                strategy = strategy.name(),
                %direction,
                "Strategy chose a move that does not change the board"
            );
            break EndReason::NoOpMove(direction);
        }
        moves += 1;
        // A shift that changed the board always leaves an empty cell
        let spawned = board.spawn(rng);
        debug_assert!(spawned);
        trace!(moves, %direction, max_tile = board.max_tile());
    };

    GameSummary {
        moves,
        max_tile: board.max_tile(),
        end_reason,
        final_board: board,
    }
}

/// Plays `config.games` games with one strategy and one RNG.
///
/// `on_game` is called with the index and summary of every finished game.
pub fn play_games(
    rng: &mut StdRng,
    config: &RunConfig,
    seed: u64,
    mut on_game: impl FnMut(usize, &GameSummary),
) -> RunReport {
    let mut strategy = config.strategy.build(rng, &config.priority);
    let mut report = RunReport::new(seed, strategy.name());
    for game_idx in 0..config.games {
        let summary = play_game(rng, strategy.as_mut(), config);
        debug!(
            game_idx,
            moves = summary.moves,
            max_tile = summary.max_tile,
            end_reason = %summary.end_reason
        );
        report.add(&summary);
        on_game(game_idx, &summary);
    }
    report
}

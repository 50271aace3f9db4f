use std::collections::BTreeMap;

use serde::Serialize;
use twenty48::Cell;

use crate::GameSummary;

/// Aggregated results of a batch of games.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub strategy: String,
    pub games: usize,
    pub total_moves: usize,
    pub best_tile: Cell,
    /// How many games ended with each largest tile.
    pub max_tiles: BTreeMap<Cell, usize>,
    /// How many games ended for each reason, keyed by [`EndReason::name()`](crate::EndReason::name).
    pub end_reasons: BTreeMap<&'static str, usize>,
}

impl RunReport {
    pub fn new(seed: u64, strategy: &str) -> Self {
        Self {
            seed,
            strategy: String::from(strategy),
            games: 0,
            total_moves: 0,
            best_tile: 0,
            max_tiles: BTreeMap::new(),
            end_reasons: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, summary: &GameSummary) {
        self.games += 1;
        self.total_moves += summary.moves;
        self.best_tile = self.best_tile.max(summary.max_tile);
        *self.max_tiles.entry(summary.max_tile).or_insert(0) += 1;
        *self.end_reasons.entry(summary.end_reason.name()).or_insert(0) += 1;
    }

    pub fn mean_moves(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "End result ({} games, strategy {}, seed {}):",
            self.games, self.strategy, self.seed
        )?;
        writeln!(f, "- {:.1} moves per game on average", self.mean_moves())?;
        writeln!(f, "- best tile {}", self.best_tile)?;
        writeln!(f, "\n {:>8} | {:>6} | {:>6}", "max tile", "games", "%")?;
        writeln!(f, "----------|--------|-------")?;
        for (tile, &count) in self.max_tiles.iter().rev() {
            let percentage = count as f32 / self.games as f32 * 100.0;
            writeln!(f, " {:>8} | {:>6} | {:5.1}%", tile, count, percentage)?;
        }
        write!(f, "\nGames ended by:")?;
        for (reason, count) in &self.end_reasons {
            write!(f, "\n- {}: {}", reason, count)?;
        }
        Ok(())
    }
}

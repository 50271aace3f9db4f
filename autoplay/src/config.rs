use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use twenty48::{Direction, COLUMN_COUNT, ROW_COUNT};

use crate::{ConfigError, StrategyKind, CORNER_ORDER};

/// Everything that describes a batch of games.
///
/// Can be loaded from a JSON file, where every key is optional, e.g.
/// `{ "rows": 5, "columns": 5, "strategy": "priority", "priority": ["left", "down"] }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub rows: usize,
    pub columns: usize,
    /// How many games to play
    pub games: usize,
    /// A game that reaches this many moves is stopped
    pub max_moves: usize,
    pub strategy: StrategyKind,
    /// Direction order for [`StrategyKind::Priority`]
    pub priority: Vec<Direction>,
    /// RNG seed; a random one is picked if missing
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rows: ROW_COUNT,
            columns: COLUMN_COUNT,
            games: 100,
            max_moves: 10_000,
            strategy: StrategyKind::Greedy,
            priority: CORNER_ORDER.to_vec(),
            seed: None,
        }
    }
}

/// Command line values that take precedence over the config file.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct ConfigOverrides {
    /// Number of rows of the board
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of columns of the board
    #[arg(long)]
    pub columns: Option<usize>,

    /// How many games to play
    #[arg(short = 'n', long)]
    pub games: Option<usize>,

    /// Stop a game after this many moves
    #[arg(long)]
    pub max_moves: Option<usize>,

    /// How moves are chosen
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyKind>,

    /// Direction order for the priority strategy, e.g. "down,left,right,up"
    #[arg(long, value_delimiter = ',')]
    pub priority: Option<Vec<Direction>>,

    /// RNG seed
    #[arg(long)]
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file '{}'", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;
        Ok(config)
    }

    #[must_use]
    pub fn merge(self, overrides: ConfigOverrides) -> Self {
        Self {
            rows: overrides.rows.unwrap_or(self.rows),
            columns: overrides.columns.unwrap_or(self.columns),
            games: overrides.games.unwrap_or(self.games),
            max_moves: overrides.max_moves.unwrap_or(self.max_moves),
            strategy: overrides.strategy.unwrap_or(self.strategy),
            priority: overrides.priority.unwrap_or(self.priority),
            seed: overrides.seed.or(self.seed),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 || self.columns < 2 {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.games == 0 {
            return Err(ConfigError::NoGames);
        }
        if self.max_moves == 0 {
            return Err(ConfigError::NoMovesAllowed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{ "rows": 5, "strategy": "random", "priority": ["up", "left"] }"#)
                .unwrap();
        assert_eq!(
            config,
            RunConfig {
                rows: 5,
                strategy: StrategyKind::Random,
                priority: vec![Direction::Up, Direction::Left],
                ..RunConfig::default()
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_json::from_str::<RunConfig>(r#"{ "colums": 5 }"#).is_err());
        assert!(serde_json::from_str::<RunConfig>(r#"{ "strategy": "smart" }"#).is_err());
    }

    #[test]
    fn overrides_take_precedence() {
        let base = RunConfig {
            seed: Some(1),
            games: 3,
            ..RunConfig::default()
        };
        let merged = base.clone().merge(ConfigOverrides {
            columns: Some(6),
            seed: Some(9),
            ..ConfigOverrides::default()
        });
        assert_eq!(merged.columns, 6);
        assert_eq!(merged.seed, Some(9));
        assert_eq!(merged.games, 3);
        assert_eq!(merged.rows, base.rows);

        let unchanged = base.clone().merge(ConfigOverrides::default());
        assert_eq!(unchanged, base);
    }

    #[test]
    fn validation() {
        assert_eq!(RunConfig::default().validate(), Ok(()));
        assert_eq!(
            RunConfig {
                rows: 1,
                ..RunConfig::default()
            }
            .validate(),
            Err(ConfigError::BoardTooSmall { rows: 1, columns: 4 })
        );
        assert_eq!(
            RunConfig {
                games: 0,
                ..RunConfig::default()
            }
            .validate(),
            Err(ConfigError::NoGames)
        );
        assert_eq!(
            RunConfig {
                max_moves: 0,
                ..RunConfig::default()
            }
            .validate(),
            Err(ConfigError::NoMovesAllowed)
        );
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("autoplay-config-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "games": 7, "seed": 123 }}"#).unwrap();
        drop(file);

        let config = RunConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.games, 7);
        assert_eq!(config.seed, Some(123));

        let err = RunConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Could not read config file"));
    }
}

#[derive(Debug, PartialEq, Eq)]
/// Error type for an invalid [`RunConfig`](crate::RunConfig).
pub enum ConfigError {
    BoardTooSmall { rows: usize, columns: usize },
    NoGames,
    NoMovesAllowed,
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::BoardTooSmall { rows, columns } => write!(
                f,
                "The board must have at least 2 rows and 2 columns, but is {}x{}",
                rows, columns
            ),
            ConfigError::NoGames => write!(f, "The number of games must be at least 1"),
            ConfigError::NoMovesAllowed => write!(f, "The move limit must be at least 1"),
        }
    }
}

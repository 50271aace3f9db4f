use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The direction that tiles slide towards during a shift.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Whether tiles move along columns (`Up`/`Down`) rather than rows.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The error type for the [`FromStr`] instance of [`Direction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectionFromStrErr {
    Empty,
    Unknown(String),
}

impl std::error::Error for DirectionFromStrErr {}

impl std::fmt::Display for DirectionFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectionFromStrErr::Empty => write!(f, "Expected a direction, got an empty string"),
            DirectionFromStrErr::Unknown(s) => write!(
                f,
                "Unknown direction '{}', expected one of up, right, down, left",
                s
            ),
        }
    }
}

impl FromStr for Direction {
    type Err = DirectionFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DirectionFromStrErr::Empty);
        }
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "right" | "r" => Ok(Direction::Right),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            _ => Err(DirectionFromStrErr::Unknown(String::from(s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("up".parse(), Ok(Direction::Up));
        assert_eq!("Right".parse(), Ok(Direction::Right));
        assert_eq!(" d ".parse(), Ok(Direction::Down));
        assert_eq!("L".parse(), Ok(Direction::Left));
        assert_eq!("".parse::<Direction>(), Err(DirectionFromStrErr::Empty));
        assert_eq!(
            "north".parse::<Direction>(),
            Err(DirectionFromStrErr::Unknown(String::from("north")))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse(), Ok(direction));
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.is_vertical(), direction.opposite().is_vertical());
        }
    }
}

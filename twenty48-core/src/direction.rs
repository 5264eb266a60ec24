//! Move directions and how they are parsed from callers

use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Move direction
///
/// Discriminants are the counter-clockwise quarter turns that bring the
/// direction into the canonical slide-left orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = 0,
    Up = 1,
    Right = 2,
    Down = 3,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Up,
    Direction::Right,
    Direction::Down,
];

impl Direction {
    pub fn quarter_turns(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }

    /// Parse according to `policy`
    pub fn parse_with(input: &str, policy: DirectionPolicy) -> Result<Self, GameError> {
        match (input.parse::<Direction>(), policy) {
            (Ok(dir), _) => Ok(dir),
            (Err(_), DirectionPolicy::Lenient) => {
                tracing::warn!("Unrecognized direction {:?}, treating as left", input);
                Ok(Direction::Left)
            }
            (Err(e), DirectionPolicy::Strict) => Err(e),
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Left),
            "up" => Ok(Direction::Up),
            "right" => Ok(Direction::Right),
            "down" => Ok(Direction::Down),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How unrecognized direction strings are handled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DirectionPolicy {
    /// Unknown strings move left, for compatibility with existing callers
    #[default]
    Lenient,
    /// Unknown strings are rejected with `GameError::InvalidDirection`
    Strict,
}

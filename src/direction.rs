//! The four move commands and their grid deltas.

use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A directional move command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the driver cycles through them
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    /// Unit displacement of a tile moving this way
    pub fn delta(self) -> Vector {
        match self {
            Direction::Up => Vector::UP,
            Direction::Down => Vector::DOWN,
            Direction::Left => Vector::LEFT,
            Direction::Right => Vector::RIGHT,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = String;

    /// Parses a direction name or the matching WASD key
    ///
    /// # Examples
    /// ```
    /// use std::str::FromStr;
    /// use fivetwelve::Direction;
    /// assert_eq!(Direction::from_str("Left").unwrap(), Direction::Left);
    /// assert_eq!(Direction::from_str("w").unwrap(), Direction::Up);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(Direction::Up),
            "down" | "s" => Ok(Direction::Down),
            "left" | "a" => Ok(Direction::Left),
            "right" | "d" => Ok(Direction::Right),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}

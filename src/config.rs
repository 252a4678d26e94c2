//! Game configuration: board dimensions, tile draw odds and the random seed.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default board height and width
pub const GRID_SIZE: usize = 4;

/// Probability that a randomly drawn tile is a 4 rather than a 2
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Settings for a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rows on the board
    pub rows: usize,
    /// Number of columns on the board
    pub cols: usize,
    /// Chance that `place_tile` draws a 4 when no value is given
    pub four_probability: f64,
    /// Seed for the tile placement generator; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: GRID_SIZE,
            cols: GRID_SIZE,
            four_probability: FOUR_PROBABILITY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Checks dimensions and the draw probability.
    ///
    /// Coordinates are `i32`, so each dimension must fit in one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if i32::try_from(self.rows).is_err() || i32::try_from(self.cols).is_err() {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::Probability(self.four_probability));
        }
        Ok(())
    }
}

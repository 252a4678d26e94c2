//! Plain integer projection of a board, used for test setup and serialization.
//!
//! `0` marks an empty cell, any positive integer a tile of that value. Tile
//! identity is not part of a snapshot.

use crate::error::SnapshotError;
use serde::{Deserialize, Serialize};

/// Row-major grid of tile values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(pub Vec<Vec<u32>>);

impl Snapshot {
    pub fn rows(&self) -> usize {
        self.0.len()
    }

    /// Width of the first row, 0 for an empty grid
    pub fn cols(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// True if every row has the same length
    pub fn is_rectangular(&self) -> bool {
        let cols = self.cols();
        self.0.iter().all(|row| row.len() == cols)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a JSON array of arrays, rejecting ragged rows
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        if !snapshot.is_rectangular() {
            return Err(SnapshotError::Ragged);
        }
        Ok(snapshot)
    }
}

impl From<Vec<Vec<u32>>> for Snapshot {
    fn from(grid: Vec<Vec<u32>>) -> Self {
        Snapshot(grid)
    }
}

impl<const C: usize, const R: usize> From<[[u32; C]; R]> for Snapshot {
    fn from(grid: [[u32; C]; R]) -> Self {
        Snapshot(grid.iter().map(|row| row.to_vec()).collect())
    }
}

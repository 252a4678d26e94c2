//! Error types for contract violations and serialization failures.

use crate::tile::TileId;
use crate::vector::Vector;
use thiserror::Error;

/// Contract violations reported by [`crate::Board`] operations.
///
/// None of these are recoverable inside the model; the board state is left
/// untouched when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("cannot place a tile: the board has no empty cell")]
    Full,

    #[error("position {position} is outside the {rows}x{cols} board")]
    OutOfBounds {
        position: Vector,
        rows: usize,
        cols: usize,
    },

    #[error("slide direction must be non-zero")]
    ZeroDirection,

    #[error("tile values must be positive, got {0}")]
    InvalidValue(u32),

    #[error("snapshot shape does not fit a {rows}x{cols} board: {reason}")]
    SnapshotShape {
        rows: usize,
        cols: usize,
        reason: String,
    },

    #[error("no live tile with id {0}")]
    UnknownTile(TileId),
}

/// Failures while converting snapshots to and from JSON
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to (de)serialize snapshot: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("snapshot rows have different lengths")]
    Ragged,
}

/// Invalid game configuration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("board dimensions {rows}x{cols} exceed the addressable grid")]
    TooLarge { rows: usize, cols: usize },

    #[error("four-tile probability must lie in [0, 1], got {0}")]
    Probability(f64),
}

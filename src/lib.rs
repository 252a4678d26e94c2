//! # 512 Game Model
//!
//! The model half of "512", a 2048-style sliding-tile game. A [`Board`] holds
//! a grid of numbered [`Tile`]s; the four directional moves slide every tile
//! towards one edge, merging tiles of equal value. The model never depends on
//! a view: every state change is published as a [`GameEvent`] through the
//! [`Channel`] owned by the board or by the affected tile.
//!
//! ## Driving a game
//! ```
//! use fivetwelve::{Board, Direction, GameEvent, Observable};
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
//! let mut board = Board::default();
//! board.subscribe(|event: &GameEvent| println!("{event}"));
//!
//! board.place_tile(&mut rng, None).unwrap();
//! if board.shift(Direction::Left).changed() && board.has_empty() {
//!     board.place_tile(&mut rng, None).unwrap();
//! }
//! assert!(board.score() >= 2);
//! ```
//!
//! ## Threading
//! Everything runs synchronously on the caller's thread and the model does no
//! locking. `Board` is `Send`, so a multithreaded host can wrap it in a mutex
//! and serialize mutations itself.

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod events;
pub mod logging;
pub mod notify;
pub mod snapshot;
pub mod tile;
pub mod vector;

pub use board::{Board, MoveSummary, SlideOutcome};
pub use config::GameConfig;
pub use direction::Direction;
pub use error::{BoardError, ConfigError, SnapshotError};
pub use events::{EventKind, GameEvent, TileInfo};
pub use notify::{Channel, Listener, Observable};
pub use snapshot::Snapshot;
pub use tile::{Tile, TileId};
pub use vector::Vector;

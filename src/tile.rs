//! # Tiles
//!
//! A tile is a numbered piece living in exactly one board cell. Tiles are
//! observable: moving or merging a tile notifies the listeners registered on
//! that tile's own channel.

use crate::events::{EventKind, GameEvent, TileInfo};
use crate::notify::{Channel, Observable};
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Identifier of a tile, unique within the board that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A slidy numbered thing
#[derive(Debug)]
pub struct Tile {
    id: TileId,
    position: Vector,
    value: u32,
    channel: Channel<GameEvent>,
}

impl Tile {
    /// Creates a tile at `position`.
    ///
    /// Bounds are not checked here; the board only creates tiles inside
    /// its grid.
    ///
    /// # Panics
    /// If `value` is zero.
    pub fn new(id: TileId, position: Vector, value: u32) -> Self {
        assert!(value > 0, "tile value must be positive");
        Self {
            id,
            position,
            value,
            channel: Channel::new(),
        }
    }

    /// Board-unique identity of this tile
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Current grid coordinates
    pub fn position(&self) -> Vector {
        self.position
    }

    /// Current value, always positive
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Snapshot of identity, position and value for event payloads
    pub fn info(&self) -> TileInfo {
        TileInfo {
            id: self.id,
            position: self.position,
            value: self.value,
        }
    }

    /// Merge eligibility: tiles compare by value only, never by identity
    pub fn same_value(&self, other: &Tile) -> bool {
        self.value == other.value
    }

    /// True if `other` may be merged into this tile: the values are equal
    /// and their sum fits in a `u32`.
    ///
    /// # Arguments
    /// * `other` - The tile that would be absorbed
    ///
    /// # Returns
    /// true if [`Tile::merge`] would keep the value positive and exact
    pub fn can_merge(&self, other: &Tile) -> bool {
        self.same_value(other) && self.value.checked_add(other.value).is_some()
    }

    /// Absorbs `other`, adding its value into this tile.
    ///
    /// Emits `TileUpdated` for this tile, then `TileRemoved` on `other`'s
    /// channel. `other` is consumed and dropped afterwards. The caller checks
    /// [`Tile::can_merge`] before merging; an overflowing sum saturates at
    /// `u32::MAX` rather than wrapping to zero.
    ///
    /// # Arguments
    /// * `other` - The tile to absorb
    pub fn merge(&mut self, mut other: Tile) {
        debug_assert!(self.can_merge(&other), "merging tiles that cannot merge");
        self.value = self.value.saturating_add(other.value);
        trace!(survivor = self.id.0, absorbed = other.id.0, value = self.value, "merge");
        self.notify(EventKind::TileUpdated);
        other.notify(EventKind::TileRemoved);
    }

    /// Moves the tile to `position` and emits `TileUpdated`.
    pub fn move_to(&mut self, position: Vector) {
        self.position = position;
        self.notify(EventKind::TileUpdated);
    }

    fn notify(&mut self, kind: EventKind) {
        let event = GameEvent::new(kind, self.info());
        self.channel.notify_all(&event);
    }
}

/// Value-only equality, as used for merge comparisons
impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.same_value(other)
    }
}

impl Observable for Tile {
    type Event = GameEvent;

    fn channel_mut(&mut self) -> &mut Channel<GameEvent> {
        &mut self.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn recorded(tile: &mut Tile) -> Arc<Mutex<Vec<GameEvent>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        tile.subscribe(move |event: &GameEvent| sink.lock().push(*event));
        log
    }

    #[test]
    fn test_move_to_updates_position_and_notifies() {
        let mut tile = Tile::new(TileId(1), Vector::new(0, 0), 2);
        let log = recorded(&mut tile);

        tile.move_to(Vector::new(0, 3));
        assert_eq!(tile.position(), Vector::new(0, 3));

        let events = log.lock();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::TileUpdated);
        assert_eq!(events[0].tile.position, Vector::new(0, 3));
    }

    #[test]
    fn test_merge_updates_survivor_then_removes_other() {
        let mut survivor = Tile::new(TileId(1), Vector::new(0, 0), 4);
        let mut absorbed = Tile::new(TileId(2), Vector::new(0, 1), 4);
        let order = Arc::new(Mutex::new(Vec::new()));
        let sink = order.clone();
        survivor.subscribe(move |event: &GameEvent| sink.lock().push(*event));
        let sink = order.clone();
        absorbed.subscribe(move |event: &GameEvent| sink.lock().push(*event));

        survivor.merge(absorbed);
        assert_eq!(survivor.value(), 8);

        let events = order.lock();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::TileUpdated);
        assert_eq!(events[0].tile.id, TileId(1));
        assert_eq!(events[0].tile.value, 8);
        assert_eq!(events[1].kind, EventKind::TileRemoved);
        assert_eq!(events[1].tile.id, TileId(2));
    }

    #[test]
    fn test_can_merge_requires_equal_values_without_overflow() {
        let small = Tile::new(TileId(1), Vector::new(0, 0), 2);
        let other_small = Tile::new(TileId(2), Vector::new(0, 1), 2);
        let four = Tile::new(TileId(3), Vector::new(0, 2), 4);
        let huge = Tile::new(TileId(4), Vector::new(1, 0), 1 << 31);
        let other_huge = Tile::new(TileId(5), Vector::new(1, 1), 1 << 31);

        assert!(small.can_merge(&other_small));
        assert!(!small.can_merge(&four));
        assert!(huge.same_value(&other_huge));
        assert!(!huge.can_merge(&other_huge));
    }

    #[test]
    fn test_equality_ignores_position() {
        let a = Tile::new(TileId(1), Vector::new(0, 0), 2);
        let b = Tile::new(TileId(2), Vector::new(3, 3), 2);
        let c = Tile::new(TileId(3), Vector::new(0, 0), 4);
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    #[should_panic(expected = "tile value must be positive")]
    fn test_zero_value_rejected() {
        Tile::new(TileId(1), Vector::new(0, 0), 0);
    }
}

//! Change events emitted by the game model.

use crate::tile::TileId;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened to the affected tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new tile was placed on the board (emitted by the board)
    TileCreated,
    /// A tile moved or changed value (emitted by the tile)
    TileUpdated,
    /// A tile was absorbed by a merge (emitted by the absorbed tile)
    TileRemoved,
}

/// Identity and state of a tile at the moment an event was emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileInfo {
    pub id: TileId,
    pub position: Vector,
    pub value: u32,
}

/// A single entry of the event stream consumed by views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub kind: EventKind,
    pub tile: TileInfo,
}

impl GameEvent {
    pub fn new(kind: EventKind, tile: TileInfo) -> Self {
        Self { kind, tile }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            EventKind::TileCreated => "created",
            EventKind::TileUpdated => "updated",
            EventKind::TileRemoved => "removed",
        };
        write!(
            f,
            "{} tile {} value {} at {}",
            kind, self.tile.id, self.tile.value, self.tile.position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = GameEvent::new(
            EventKind::TileRemoved,
            TileInfo {
                id: TileId(3),
                position: Vector::new(0, 1),
                value: 2,
            },
        );
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"tile_removed","tile":{"id":3,"position":{"x":0,"y":1},"value":2}}"#
        );
    }

    #[test]
    fn test_display() {
        let event = GameEvent::new(
            EventKind::TileCreated,
            TileInfo {
                id: TileId(1),
                position: Vector::new(2, 3),
                value: 4,
            },
        );
        assert_eq!(event.to_string(), "created tile #1 value 4 at (2, 3)");
    }
}

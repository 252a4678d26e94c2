//! Shared helpers for the integration tests.

#![allow(dead_code)]

use fivetwelve::{Board, GameEvent, Observable, Snapshot};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects every event a board and its tiles emit, in delivery order
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<GameEvent>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener appending to this log
    pub fn sink(&self) -> impl FnMut(&GameEvent) + Send + 'static {
        let events = self.0.clone();
        move |event: &GameEvent| events.lock().push(*event)
    }

    /// Subscribes to the board channel and to every tile currently on it
    pub fn watch(&self, board: &mut Board) {
        board.subscribe(self.sink());
        self.watch_tiles(board);
    }

    /// Subscribes to every tile currently on the board
    pub fn watch_tiles(&self, board: &mut Board) {
        for id in board.tile_ids() {
            board
                .subscribe_tile(id, self.sink())
                .expect("tile listed by the board");
        }
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.0.lock().clone()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

pub fn board(grid: &[&[u32]]) -> Board {
    let snapshot = Snapshot(grid.iter().map(|row| row.to_vec()).collect());
    Board::from_snapshot(&snapshot).expect("rectangular test grid")
}

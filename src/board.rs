//! # Board
//!
//! The game grid: a fixed `rows × cols` arena of cells, each empty or owning
//! exactly one [`Tile`]. The board owns the slide/merge algorithm for the four
//! directional moves, random tile placement and score computation.
//!
//! ## Moves
//! A directional move walks every line of the grid along the direction of
//! motion, starting with the cell nearest the destination edge, and slides
//! each tile until it reaches the edge, bumps into a tile of a different
//! value, or merges once with a tile of equal value. When two tiles merge the
//! tile already sitting in the destination cell survives and absorbs the
//! moving tile, which is removed.
//!
//! ## Notifications
//! Tile placement is announced on the board's own channel (`TileCreated`);
//! moves and merges are announced on the affected tiles' channels. All
//! notifications are delivered synchronously, in mutation order, before the
//! operation that caused them returns.

use crate::config::{GameConfig, FOUR_PROBABILITY, GRID_SIZE};
use crate::direction::Direction;
use crate::error::{BoardError, ConfigError};
use crate::events::{EventKind, GameEvent};
use crate::notify::{Channel, Observable};
use crate::snapshot::Snapshot;
use crate::tile::{Tile, TileId};
use crate::vector::Vector;
use rand::Rng;
use std::fmt;
use tracing::{debug, trace};

/// Where a single slide left its tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideOutcome {
    /// The start cell was empty, or the tile was blocked immediately
    Stayed,
    /// The tile moved and now rests at the given position
    Moved(Vector),
    /// The tile was absorbed by the tile at the given position
    Merged(Vector),
}

/// What a directional move did to the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveSummary {
    /// Tiles that changed cell without merging
    pub moved: usize,
    /// Tiles absorbed by a merge
    pub merged: usize,
}

impl MoveSummary {
    /// True if any tile moved or merged; the controller only places a new
    /// tile after a move that changed the board.
    pub fn changed(&self) -> bool {
        self.moved + self.merged > 0
    }

    fn record(&mut self, outcome: SlideOutcome) {
        match outcome {
            SlideOutcome::Stayed => {}
            SlideOutcome::Moved(_) => self.moved += 1,
            SlideOutcome::Merged(_) => self.merged += 1,
        }
    }
}

enum Step {
    Move,
    Merge,
    Blocked,
}

/// The game grid
#[derive(Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells
    cells: Vec<Option<Tile>>,
    next_id: u64,
    four_probability: f64,
    channel: Channel<GameEvent>,
}

impl Board {
    /// Creates an empty `rows × cols` board.
    ///
    /// # Panics
    /// If either dimension is zero or does not fit in an `i32` coordinate.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        assert!(
            i32::try_from(rows).is_ok() && i32::try_from(cols).is_ok(),
            "board dimensions exceed the coordinate range"
        );
        let mut cells = Vec::with_capacity(rows * cols);
        cells.resize_with(rows * cols, || None);
        Self {
            rows,
            cols,
            cells,
            next_id: 1,
            four_probability: FOUR_PROBABILITY,
            channel: Channel::new(),
        }
    }

    /// Creates an empty board sized and tuned by `config`
    pub fn with_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut board = Board::new(config.rows, config.cols);
        board.four_probability = config.four_probability;
        Ok(board)
    }

    /// Builds a board of the snapshot's size holding its tiles.
    ///
    /// No `TileCreated` notifications are emitted.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, BoardError> {
        let (rows, cols) = (snapshot.rows(), snapshot.cols());
        if rows == 0 || cols == 0 || !snapshot.is_rectangular() {
            return Err(BoardError::SnapshotShape {
                rows,
                cols,
                reason: "grid must be a non-empty rectangle".to_string(),
            });
        }
        if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
            return Err(BoardError::SnapshotShape {
                rows,
                cols,
                reason: "grid exceeds the coordinate range".to_string(),
            });
        }
        let mut board = Board::new(rows, cols);
        board.load_snapshot(snapshot)?;
        Ok(board)
    }

    /// Number of rows, fixed at construction
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, fixed at construction
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True iff `0 <= position.x < rows` and `0 <= position.y < cols`
    pub fn in_bounds(&self, position: Vector) -> bool {
        self.index(position).is_some()
    }

    fn index(&self, position: Vector) -> Option<usize> {
        let row = usize::try_from(position.x).ok()?;
        let col = usize::try_from(position.y).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    fn checked_index(&self, position: Vector) -> Result<usize, BoardError> {
        self.index(position).ok_or(BoardError::OutOfBounds {
            position,
            rows: self.rows,
            cols: self.cols,
        })
    }

    fn position_of(&self, index: usize) -> Vector {
        // Dimensions fit in i32, checked at construction.
        Vector::new((index / self.cols) as i32, (index % self.cols) as i32)
    }

    /// The tile at `position`, if any. Out-of-range positions hold nothing.
    pub fn tile_at(&self, position: Vector) -> Option<&Tile> {
        self.index(position)
            .and_then(|index| self.cells[index].as_ref())
    }

    /// The live tile with the given id
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles().find(|tile| tile.id() == id)
    }

    /// Live tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    /// Ids of the live tiles in row-major order
    pub fn tile_ids(&self) -> Vec<TileId> {
        self.tiles().map(Tile::id).collect()
    }

    /// Registers a listener on a live tile's channel
    ///
    /// # Arguments
    /// * `id` - A tile currently on the board
    /// * `listener` - Receives the tile's `TileUpdated` and `TileRemoved` events
    ///
    /// # Errors
    /// `BoardError::UnknownTile` if no live tile has `id`
    pub fn subscribe_tile<F>(&mut self, id: TileId, listener: F) -> Result<(), BoardError>
    where
        F: FnMut(&GameEvent) + Send + 'static,
    {
        let tile = self
            .cells
            .iter_mut()
            .flatten()
            .find(|tile| tile.id() == id)
            .ok_or(BoardError::UnknownTile(id))?;
        tile.subscribe(listener);
        Ok(())
    }

    /// True iff at least one cell is empty
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Coordinates of every empty cell, row-major
    pub fn empty_positions(&self) -> Vec<Vector> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| self.position_of(index))
            .collect()
    }

    /// False once the game is over: true if a cell is empty or two
    /// orthogonally adjacent tiles could merge.
    pub fn has_moves(&self) -> bool {
        if self.has_empty() {
            return true;
        }
        self.tiles().any(|tile| {
            [Vector::RIGHT, Vector::DOWN].into_iter().any(|delta| {
                self.tile_at(tile.position() + delta)
                    .is_some_and(|neighbour| neighbour.can_merge(tile))
            })
        })
    }

    /// Places a tile on a uniformly chosen empty cell and emits `TileCreated`.
    ///
    /// Without an explicit `value` a 4 is drawn with the configured
    /// probability (0.1 by default) and a 2 otherwise.
    ///
    /// # Arguments
    /// * `rng` - Source for the cell choice and the value draw
    /// * `value` - Forces the tile value instead of drawing one
    ///
    /// # Returns
    /// The id of the new tile
    ///
    /// # Errors
    /// `BoardError::Full` if no cell is empty, `BoardError::InvalidValue` for
    /// an explicit zero value. The board is unchanged on error.
    pub fn place_tile<R: Rng>(
        &mut self,
        rng: &mut R,
        value: Option<u32>,
    ) -> Result<TileId, BoardError> {
        if value == Some(0) {
            return Err(BoardError::InvalidValue(0));
        }
        let empties: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.is_none().then_some(index))
            .collect();
        if empties.is_empty() {
            return Err(BoardError::Full);
        }

        let index = empties[rng.random_range(0..empties.len())];
        let value = value.unwrap_or_else(|| {
            if rng.random_bool(self.four_probability) {
                4
            } else {
                2
            }
        });

        let id = TileId(self.next_id);
        self.next_id += 1;
        let tile = Tile::new(id, self.position_of(index), value);
        let event = GameEvent::new(EventKind::TileCreated, tile.info());
        debug!(id = id.0, position = %tile.position(), value, "placed tile");
        self.cells[index] = Some(tile);
        self.channel.notify_all(&event);
        Ok(id)
    }

    /// Slides the tile at `start` (if any) along `direction` until it is
    /// blocked by the edge or a tile of different value, or merges once into
    /// a tile of equal value. A pair whose sum would overflow a `u32` blocks
    /// like tiles of different value.
    ///
    /// # Arguments
    /// * `start` - Cell holding the tile to slide
    /// * `direction` - Step added to the position on each move
    ///
    /// # Returns
    /// Where the tile ended up, see [`SlideOutcome`]
    ///
    /// # Errors
    /// `BoardError::OutOfBounds` if `start` is off the board,
    /// `BoardError::ZeroDirection` for a zero direction.
    pub fn slide(&mut self, start: Vector, direction: Vector) -> Result<SlideOutcome, BoardError> {
        if direction == Vector::default() {
            return Err(BoardError::ZeroDirection);
        }
        let index = self.checked_index(start)?;
        Ok(self.slide_from(index, start, direction))
    }

    fn slide_from(&mut self, mut current: usize, start: Vector, direction: Vector) -> SlideOutcome {
        let mut position = start;
        let mut outcome = SlideOutcome::Stayed;
        if self.cells[current].is_none() {
            return outcome;
        }

        loop {
            let Some(next_position) = position.checked_add(direction) else {
                break;
            };
            let Some(next) = self.index(next_position) else {
                break;
            };
            let step = match (&self.cells[current], &self.cells[next]) {
                (Some(_), None) => Step::Move,
                (Some(mover), Some(target)) if target.can_merge(mover) => Step::Merge,
                _ => Step::Blocked,
            };
            match step {
                Step::Move => {
                    self.move_tile(current, next, next_position);
                    outcome = SlideOutcome::Moved(next_position);
                    position = next_position;
                    current = next;
                }
                Step::Merge => {
                    if let Some(mover) = self.cells[current].take() {
                        if let Some(target) = self.cells[next].as_mut() {
                            target.merge(mover);
                        }
                    }
                    outcome = SlideOutcome::Merged(next_position);
                    break;
                }
                Step::Blocked => break,
            }
        }
        outcome
    }

    fn move_tile(&mut self, from: usize, to: usize, position: Vector) {
        if let Some(mut tile) = self.cells[from].take() {
            trace!(id = tile.id().0, to = %position, "move");
            tile.move_to(position);
            self.cells[to] = Some(tile);
        }
    }

    /// Start cells for a move, nearest the destination edge first
    fn sweep_order(&self, direction: Direction) -> Vec<Vector> {
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        let mut starts = Vec::with_capacity(self.cells.len());
        match direction {
            Direction::Right => {
                for r in 0..rows {
                    starts.extend((0..cols).rev().map(|c| Vector::new(r, c)));
                }
            }
            Direction::Left => {
                for r in 0..rows {
                    starts.extend((1..cols).map(|c| Vector::new(r, c)));
                }
            }
            Direction::Up => {
                for c in 0..cols {
                    starts.extend((1..rows).map(|r| Vector::new(r, c)));
                }
            }
            Direction::Down => {
                for c in 0..cols {
                    starts.extend((0..rows - 1).rev().map(|r| Vector::new(r, c)));
                }
            }
        }
        starts
    }

    /// Slides every tile towards one edge
    ///
    /// # Arguments
    /// * `direction` - The edge tiles move towards
    ///
    /// # Returns
    /// Counts of moved and merged tiles; see [`MoveSummary::changed`]
    pub fn shift(&mut self, direction: Direction) -> MoveSummary {
        let delta = direction.delta();
        let mut summary = MoveSummary::default();
        for start in self.sweep_order(direction) {
            if let Some(index) = self.index(start) {
                summary.record(self.slide_from(index, start, delta));
            }
        }
        debug!(%direction, moved = summary.moved, merged = summary.merged, "shift");
        summary
    }

    /// Slides every tile towards row 0, sweeping each column from row 1 down
    pub fn up(&mut self) -> MoveSummary {
        self.shift(Direction::Up)
    }

    /// Slides every tile towards the last row, sweeping each column from
    /// row `rows - 2` up
    pub fn down(&mut self) -> MoveSummary {
        self.shift(Direction::Down)
    }

    /// Slides every tile towards column 0, sweeping each row from column 1
    pub fn left(&mut self) -> MoveSummary {
        self.shift(Direction::Left)
    }

    /// Slides every tile towards the last column, sweeping each row from
    /// column `cols - 1` down
    pub fn right(&mut self) -> MoveSummary {
        self.shift(Direction::Right)
    }

    /// Sum of all tile values. Merges conserve it; only placement raises it.
    ///
    /// # Returns
    /// The total as a `u64`, which cannot overflow for any grid of `u32`
    /// values addressable in memory
    pub fn score(&self) -> u64 {
        self.tiles().map(|tile| u64::from(tile.value())).sum()
    }

    /// Largest tile value, 0 on an empty board
    pub fn max_value(&self) -> u32 {
        self.tiles().map(Tile::value).max().unwrap_or(0)
    }

    /// Integer projection of the grid: 0 for empty, the tile value otherwise
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot(
            self.cells
                .chunks(self.cols)
                .map(|row| row.iter().map(|cell| cell.as_ref().map_or(0, Tile::value)).collect())
                .collect(),
        )
    }

    /// Replaces every tile with the contents of `snapshot`.
    ///
    /// Intended for test setup: the new tiles get fresh ids, listeners on the
    /// old tiles are dropped, and no notifications are emitted.
    ///
    /// # Errors
    /// `BoardError::SnapshotShape` unless the snapshot has exactly this
    /// board's dimensions. The board is unchanged on error.
    pub fn load_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), BoardError> {
        if snapshot.rows() != self.rows
            || !snapshot.0.iter().all(|row| row.len() == self.cols)
        {
            return Err(BoardError::SnapshotShape {
                rows: self.rows,
                cols: self.cols,
                reason: format!(
                    "got {} rows of widths {:?}",
                    snapshot.rows(),
                    snapshot.0.iter().map(Vec::len).collect::<Vec<_>>()
                ),
            });
        }

        for (index, value) in snapshot.0.iter().flatten().copied().enumerate() {
            self.cells[index] = if value == 0 {
                None
            } else {
                let id = TileId(self.next_id);
                self.next_id += 1;
                Some(Tile::new(id, self.position_of(index), value))
            };
        }
        Ok(())
    }
}

impl Default for Board {
    /// An empty 4×4 board
    fn default() -> Self {
        Board::new(GRID_SIZE, GRID_SIZE)
    }
}

impl Observable for Board {
    type Event = GameEvent;

    fn channel_mut(&mut self) -> &mut Channel<GameEvent> {
        &mut self.channel
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_value().max(1).to_string().len();
        for row in self.cells.chunks(self.cols) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(tile) => format!("{:>width$}", tile.value()),
                    None => format!("{:>width$}", "."),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

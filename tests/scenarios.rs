//! Concrete move scenarios and the event stream they produce.

mod common;

use common::{board, EventLog};
use fivetwelve::{Board, BoardError, EventKind, Observable, Snapshot, Vector};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[test]
fn test_left_merges_pair_with_one_update_and_one_removal() {
    let mut board = board(&[&[2, 2, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]);
    let survivor = board.tile_at(Vector::new(0, 0)).unwrap().id();
    let mover = board.tile_at(Vector::new(0, 1)).unwrap().id();
    let log = EventLog::new();
    log.watch(&mut board);
    assert_eq!(board.score(), 4);

    board.left();

    assert_eq!(board.to_snapshot().0[0], vec![4, 0, 0, 0]);
    assert_eq!(board.score(), 4);

    let events = log.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, EventKind::TileUpdated);
    assert_eq!(events[0].tile.id, survivor);
    assert_eq!(events[0].tile.value, 4);
    assert_eq!(events[0].tile.position, Vector::new(0, 0));
    assert_eq!(events[1].kind, EventKind::TileRemoved);
    assert_eq!(events[1].tile.id, mover);
}

#[test]
fn test_right_merges_once_per_slide() {
    let mut board = board(&[&[2, 0, 2, 2], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]);
    board.right();
    assert_eq!(board.to_snapshot().0[0], vec![0, 0, 2, 4]);
}

#[test]
fn test_place_tile_on_empty_board() {
    let mut board = Board::default();
    let log = EventLog::new();
    log.watch(&mut board);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);

    let id = board.place_tile(&mut rng, None).unwrap();

    let events = log.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, EventKind::TileCreated);
    assert_eq!(events[0].tile.id, id);

    let occupied: Vec<u32> = board
        .to_snapshot()
        .0
        .into_iter()
        .flatten()
        .filter(|&v| v != 0)
        .collect();
    assert_eq!(occupied.len(), 1);
    assert!(occupied[0] == 2 || occupied[0] == 4);
    assert_eq!(board.tile(id).unwrap().position(), events[0].tile.position);
}

#[test]
fn test_slide_events_follow_each_step() {
    let mut board = board(&[&[0, 0, 0, 2]]);
    let log = EventLog::new();
    log.watch(&mut board);

    board.left();

    let positions: Vec<Vector> = log.events().iter().map(|e| e.tile.position).collect();
    assert_eq!(
        positions,
        vec![Vector::new(0, 2), Vector::new(0, 1), Vector::new(0, 0)]
    );
    assert!(log.events().iter().all(|e| e.kind == EventKind::TileUpdated));
}

#[test]
fn test_events_follow_sweep_order() {
    // Two rows move right; row 0 is swept before row 1.
    let mut board = board(&[&[4, 0, 0], &[2, 2, 0]]);
    let top = board.tile_at(Vector::new(0, 0)).unwrap().id();
    let log = EventLog::new();
    log.watch(&mut board);

    board.right();

    assert_eq!(board.to_snapshot(), Snapshot::from([[0, 0, 4], [0, 0, 4]]));
    let events = log.events();
    assert!(events[..2].iter().all(|e| e.tile.id == top));
    let kinds: Vec<EventKind> = events.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            // 4 in row 0: two steps
            EventKind::TileUpdated,
            EventKind::TileUpdated,
            // 2 at (1, 1): one step
            EventKind::TileUpdated,
            // 2 at (1, 0): one step, then merges
            EventKind::TileUpdated,
            EventKind::TileUpdated,
            EventKind::TileRemoved,
        ]
    );
}

#[test]
fn test_cascade_in_one_line() {
    let mut board = board(&[&[2], &[2], &[2], &[2]]);
    board.up();
    assert_eq!(board.to_snapshot(), Snapshot::from([[4], [4], [0], [0]]));

    let mut board = common::board(&[&[4], &[0], &[4], &[8]]);
    board.down();
    assert_eq!(board.to_snapshot(), Snapshot::from([[0], [0], [8], [8]]));
}

#[test]
fn test_full_board_placement_is_rejected() {
    let mut board = board(&[&[2, 4], &[8, 16]]);
    let log = EventLog::new();
    board.subscribe(log.sink());
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);

    assert!(!board.has_empty());
    assert_eq!(board.place_tile(&mut rng, None), Err(BoardError::Full));
    assert!(log.events().is_empty());
    assert_eq!(board.to_snapshot(), Snapshot::from([[2, 4], [8, 16]]));
}

#[test]
fn test_snapshot_load_emits_nothing() {
    let mut board = Board::new(2, 2);
    let log = EventLog::new();
    board.subscribe(log.sink());

    board.load_snapshot(&Snapshot::from([[2, 0], [0, 4]])).unwrap();
    assert!(log.events().is_empty());
    assert_eq!(board.score(), 6);
}

#[test]
fn test_unknown_tile_subscription_fails() {
    let mut board = board(&[&[2, 2]]);
    let absorbed = board.tile_at(Vector::new(0, 1)).unwrap().id();
    board.left();
    assert_eq!(
        board.subscribe_tile(absorbed, |_: &fivetwelve::GameEvent| {}),
        Err(BoardError::UnknownTile(absorbed))
    );
}

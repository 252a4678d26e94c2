//! # 512 Headless Driver
//!
//! Plays a game of 512 without a user interface. The driver follows the
//! controller loop the model is built for: issue a directional move, place a
//! new tile if the board changed, and stop once no move is left. Directions
//! are taken round-robin from `--directions`.
//!
//! ## Usage
//! ```text
//! play --seed 42 --max-moves 500
//! play --rows 3 --cols 5 --directions left,down --events
//! RUST_LOG=fivetwelve=debug play
//! ```

use clap::Parser;
use colored::{ColoredString, Colorize};
use fivetwelve::logging::init_tracing;
use fivetwelve::{Board, Direction, GameConfig, GameEvent, Observable, TileId};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, default_value_t = 4)]
    rows: usize,

    #[clap(short, long, default_value_t = 4)]
    cols: usize,

    /// Seed for tile placement; random when omitted
    #[clap(short, long)]
    seed: Option<u64>,

    #[clap(short, long, default_value_t = 1000)]
    max_moves: usize,

    #[clap(short = 'p', long, default_value_t = 0.1)]
    four_probability: f64,

    /// Move cycle, e.g. `left,down,right,up`
    #[clap(short, long, value_delimiter = ',')]
    directions: Vec<Direction>,

    /// Print the event stream as JSON lines
    #[clap(long, action = clap::ArgAction::SetTrue)]
    events: bool,
}

type Journal = Arc<Mutex<Vec<GameEvent>>>;

fn recorder(journal: &Journal) -> impl FnMut(&GameEvent) + Send + 'static {
    let journal = journal.clone();
    move |event: &GameEvent| journal.lock().push(*event)
}

/// Result of a finished run
struct Outcome {
    moves: usize,
    game_over: bool,
}

/// Places a tile and follows its updates in the journal
/// Seeds the placement RNG from `config.seed`, drawing a fresh seed when unset.
/// The seed is returned so a run can be replayed.
fn seeded_rng(config: &GameConfig) -> (Xoshiro256PlusPlus, u64) {
    let seed = config.seed.unwrap_or_else(rand::random);
    (Xoshiro256PlusPlus::seed_from_u64(seed), seed)
}

fn place_and_watch(
    board: &mut Board,
    rng: &mut Xoshiro256PlusPlus,
    journal: &Journal,
) -> Result<TileId, Box<dyn Error>> {
    let id = board.place_tile(rng, None)?;
    board.subscribe_tile(id, recorder(journal))?;
    Ok(id)
}

fn play(
    board: &mut Board,
    rng: &mut Xoshiro256PlusPlus,
    journal: &Journal,
    directions: &[Direction],
    max_moves: usize,
) -> Result<Outcome, Box<dyn Error>> {
    for _ in 0..2 {
        if board.has_empty() {
            place_and_watch(board, rng, journal)?;
        }
    }

    let mut moves = 0;
    let mut stalled = 0;
    while moves < max_moves && board.has_moves() {
        let direction = directions[moves % directions.len()];
        let summary = board.shift(direction);
        moves += 1;
        if summary.changed() {
            stalled = 0;
            if board.has_empty() {
                place_and_watch(board, rng, journal)?;
            }
        } else {
            stalled += 1;
            if stalled == directions.len() {
                break;
            }
        }
    }

    Ok(Outcome {
        moves,
        game_over: !board.has_moves(),
    })
}

fn paint(value: u32, width: usize) -> ColoredString {
    let text = if value == 0 {
        format!("{:>width$}", ".")
    } else {
        format!("{:>width$}", value)
    };
    match value {
        0 => text.dimmed(),
        2 | 4 => text.white(),
        8 | 16 => text.yellow(),
        32 | 64 => text.bright_red(),
        128 | 256 => text.magenta().bold(),
        _ => text.bright_green().bold(),
    }
}

fn print_board(board: &Board) {
    let width = board.max_value().max(1).to_string().len();
    for row in board.to_snapshot().0 {
        let cells: Vec<String> = row.iter().map(|&v| paint(v, width).to_string()).collect();
        println!("{}", cells.join(" "));
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = GameConfig {
        rows: args.rows,
        cols: args.cols,
        four_probability: args.four_probability,
        seed: args.seed,
    };
    let mut board = Board::with_config(&config)?;
    let (mut rng, seed) = seeded_rng(&config);
    info!(seed, rows = config.rows, cols = config.cols, "starting game");

    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    board.subscribe(recorder(&journal));

    let directions = if args.directions.is_empty() {
        Direction::ALL.to_vec()
    } else {
        args.directions
    };
    let outcome = play(&mut board, &mut rng, &journal, &directions, args.max_moves)?;
    info!(moves = outcome.moves, score = board.score(), "game finished");

    if args.events {
        for event in journal.lock().iter() {
            println!("{}", serde_json::to_string(event)?);
        }
    }

    print_board(&board);
    println!(
        "score {}  best tile {}  moves {}  seed {}{}",
        board.score(),
        board.max_value(),
        outcome.moves,
        seed,
        if outcome.game_over { "  (game over)" } else { "" }
    );
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

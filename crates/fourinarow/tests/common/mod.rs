//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use fourinarow::{Board, Cell, Dimensions, MatchSnapshot, MatchStatus, PlayerId};
use tracing_subscriber::EnvFilter;

pub const PLAYER_ONE: &str = "player_one_id";
pub const PLAYER_TWO: &str = "player_two_id";

/// A full 6x7 board with no four in a row anywhere.
pub const DRAW_ROWS: [&str; 6] = [
    "1122112", "2211221", "1122112", "2211221", "1122112", "2211221",
];

/// Installs a test-writer subscriber; `RUST_LOG` controls the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

pub fn player_one() -> PlayerId {
    PlayerId::new(PLAYER_ONE)
}

pub fn player_two() -> PlayerId {
    PlayerId::new(PLAYER_TWO)
}

/// Builds a board from rows of cell codes (`0`, `1`, `2`).
pub fn board_from_rows(rows: &[&str]) -> Board {
    let cols = rows.first().map_or(0, |row| row.len());
    let dimensions = Dimensions::new(rows.len(), cols).expect("playable dimensions");
    let cells = rows
        .iter()
        .flat_map(|row| row.bytes())
        .map(|b| Cell::try_from(b - b'0').expect("cell code"))
        .collect();
    Board::from_cells(dimensions, cells).expect("board shape")
}

pub fn snapshot(board: Board, status: MatchStatus) -> MatchSnapshot {
    MatchSnapshot::new(board, status, player_one(), player_two())
}

pub fn started() -> MatchSnapshot {
    MatchSnapshot::started(Dimensions::STANDARD, player_one(), player_two())
}

//! Win detection: scanning every run of four on the board.

use crate::{Board, Cell, Dimensions, RUN_LENGTH, Seat};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::{instrument, trace};

/// Line direction, declared in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, strum::Display)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// Row and column step between consecutive cells of a run.
    fn step(self) -> (usize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    /// Every in-bounds run in this direction, in scan order.
    ///
    /// Horizontal runs go by row then starting column, vertical runs by
    /// column then starting row, and both diagonals by row then starting
    /// column (ascending; anti-diagonals start at column 3).
    pub fn runs(self, dimensions: Dimensions) -> impl Iterator<Item = [usize; RUN_LENGTH]> {
        let rows = dimensions.rows();
        let cols = dimensions.cols();
        let last_row = rows - RUN_LENGTH;
        let last_col = cols - RUN_LENGTH;

        let starts: Vec<(usize, usize)> = match self {
            Direction::Horizontal => (0..rows)
                .flat_map(|row| (0..=last_col).map(move |col| (row, col)))
                .collect(),
            Direction::Vertical => (0..cols)
                .flat_map(|col| (0..=last_row).map(move |row| (row, col)))
                .collect(),
            Direction::DiagonalDown => (0..=last_row)
                .flat_map(|row| (0..=last_col).map(move |col| (row, col)))
                .collect(),
            Direction::AntiDiagonal => (0..=last_row)
                .flat_map(|row| (RUN_LENGTH - 1..cols).map(move |col| (row, col)))
                .collect(),
        };

        starts
            .into_iter()
            .map(move |(row, col)| self.run_from(dimensions, row, col))
    }

    fn run_from(self, dimensions: Dimensions, row: usize, col: usize) -> [usize; RUN_LENGTH] {
        let (d_row, d_col) = self.step();
        std::array::from_fn(|i| {
            let r = row + i * d_row;
            let c = col.wrapping_add_signed(i as isize * d_col);
            dimensions.index(r, c)
        })
    }
}

/// A completed run of four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Seat owning the run.
    pub seat: Seat,
    /// Direction of the run.
    pub direction: Direction,
    /// Row-major indices of the four cells, starting cell first.
    pub cells: [usize; RUN_LENGTH],
}

/// Finds the first winning run in scan order.
///
/// A run wins when its first cell is occupied and all four cells hold
/// the same seat. Directions are scanned in [`Direction`] order.
#[instrument(skip(board), fields(dimensions = %board.dimensions()))]
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    let dimensions = board.dimensions();
    let cells = board.cells();

    let line = Direction::iter()
        .flat_map(|direction| direction.runs(dimensions).map(move |run| (direction, run)))
        .find_map(|(direction, run)| match cells[run[0]] {
            Cell::Occupied(seat) if run.iter().all(|&i| cells[i] == cells[run[0]]) => {
                Some(WinningLine {
                    seat,
                    direction,
                    cells: run,
                })
            }
            _ => None,
        });

    if let Some(line) = &line {
        trace!(
            seat = %line.seat,
            direction = %line.direction,
            cells = ?line.cells,
            "Winning line found"
        );
    }
    line
}

//! Core domain types for four-in-a-row.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of same-seat cells in a line needed to win.
pub const RUN_LENGTH: usize = 4;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Seat {
    /// Player one (moves first).
    #[display("Player 1")]
    PlayerOne,
    /// Player two.
    #[display("Player 2")]
    PlayerTwo,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::PlayerOne => Seat::PlayerTwo,
            Seat::PlayerTwo => Seat::PlayerOne,
        }
    }
}

/// A cell on the board.
///
/// Stored documents encode cells as `0` (empty), `1` (player one) and
/// `2` (player two), so that is also the serde representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Cell {
    /// Unclaimed cell.
    Empty,
    /// Cell claimed by a seat.
    Occupied(Seat),
}

impl Cell {
    /// Returns the occupying seat, if any.
    pub fn seat(self) -> Option<Seat> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(seat) => Some(seat),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => 0,
            Cell::Occupied(Seat::PlayerOne) => 1,
            Cell::Occupied(Seat::PlayerTwo) => 2,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = BoardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Occupied(Seat::PlayerOne)),
            2 => Ok(Cell::Occupied(Seat::PlayerTwo)),
            other => Err(BoardError::UnknownCellCode(other)),
        }
    }
}

/// Errors raised while building a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Rows or columns below the run length.
    #[display("Board must be at least {}x{}, got {rows}x{cols}", RUN_LENGTH, RUN_LENGTH)]
    TooSmall {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// `rows * cols` does not fit in a `usize`.
    #[display("Board of {rows}x{cols} cells is too large")]
    TooLarge {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// Cell count does not match the dimensions.
    #[display("Expected {expected} cells, got {actual}")]
    LengthMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Cells supplied.
        actual: usize,
    },

    /// A stored cell code outside `0..=2`.
    #[display("Unknown cell code {}", _0)]
    UnknownCellCode(#[error(not(source))] u8),
}

/// Board dimensions, both at least [`RUN_LENGTH`], with a cell count that
/// fits in a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{rows}x{cols}")]
#[serde(try_from = "RawDimensions")]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

#[derive(Deserialize)]
struct RawDimensions {
    rows: usize,
    cols: usize,
}

impl TryFrom<RawDimensions> for Dimensions {
    type Error = BoardError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Dimensions::new(raw.rows, raw.cols)
    }
}

impl Dimensions {
    /// The 6 rows by 7 columns board of the classic game.
    pub const STANDARD: Dimensions = Dimensions { rows: 6, cols: 7 };

    /// Creates validated dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < RUN_LENGTH || cols < RUN_LENGTH {
            return Err(BoardError::TooSmall { rows, cols });
        }
        if rows.checked_mul(cols).is_none() {
            return Err(BoardError::TooLarge { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// `(row, col)` of a row-major index.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Four-in-a-row board.
///
/// Cells are row-major. A board never changes after construction;
/// [`Board::with_cell`] returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    dimensions: Dimensions,
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct RawBoard {
    dimensions: Dimensions,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.dimensions, raw.cells)
    }
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![Cell::Empty; dimensions.len()],
        }
    }

    /// Creates a board from row-major cells.
    #[instrument(skip(cells), fields(len = cells.len()))]
    pub fn from_cells(dimensions: Dimensions, cells: Vec<Cell>) -> Result<Self, BoardError> {
        if cells.len() != dimensions.len() {
            return Err(BoardError::LengthMismatch {
                expected: dimensions.len(),
                actual: cells.len(),
            });
        }
        Ok(Self { dimensions, cells })
    }

    /// Returns a copy of this board with one cell replaced.
    ///
    /// Returns `None` when `index` is off the board.
    pub fn with_cell(&self, index: usize, cell: Cell) -> Option<Self> {
        if index >= self.cells.len() {
            return None;
        }
        let mut cells = self.cells.clone();
        cells[index] = cell;
        Some(Self {
            dimensions: self.dimensions,
            cells,
        })
    }

    /// The board's dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Gets the cell at a row-major index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at `(row, col)`.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.dimensions.rows() || col >= self.dimensions.cols() {
            return None;
        }
        self.get(self.dimensions.index(row, col))
    }

    /// Checks if the cell at `index` is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Indices of the cells still open for play.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of cells claimed by `seat`.
    pub fn count(&self, seat: Seat) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(seat))
            .count()
    }

    /// Formats the board as a text grid, one line per row.
    ///
    /// `.` is empty, `X` is player one, `O` is player two.
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.dimensions.cols())
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => '.',
                        Cell::Occupied(Seat::PlayerOne) => 'X',
                        Cell::Occupied(Seat::PlayerTwo) => 'O',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(Dimensions::STANDARD)
    }
}

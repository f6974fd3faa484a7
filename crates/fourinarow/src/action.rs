//! First-class move and move-error types.
//!
//! A move is the caller's intent: who wants which cell. It is validated
//! against a snapshot before anything is computed.

use crate::{MatchStatus, PlayerId};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A participant claiming a cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema, new)]
pub struct Move {
    /// Who is moving.
    pub player_id: PlayerId,
    /// Row-major cell index. Signed so that negative input can be rejected.
    pub cell_index: i64,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> cell {}", self.player_id, self.cell_index)
    }
}

/// Why a move was rejected.
///
/// Every variant leaves the match unchanged; the caller decides whether
/// to show it or drop it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The match is not accepting moves (invite pending or finished).
    #[display("Match is not accepting moves (status: {})", _0)]
    NotActionable(MatchStatus),

    /// The requester is not the participant to move.
    #[display("It's not {}'s turn", requester)]
    NotYourTurn {
        /// Identifier that tried to move.
        requester: PlayerId,
    },

    /// The cell index is off the board.
    #[display("Cell {} is out of bounds (board has {} cells)", index, len)]
    OutOfBounds {
        /// Requested index.
        index: i64,
        /// Number of cells on the board.
        len: usize,
    },

    /// The cell is already claimed.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
}

impl std::error::Error for MoveError {}

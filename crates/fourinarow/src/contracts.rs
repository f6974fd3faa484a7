//! Contract-based validation for four-in-a-row moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions are checked in a fixed order and the first
//! failure is reported.

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, InvariantViolation, Transition, TransitionInvariants};
use crate::{MatchSnapshot, Seat};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// What a passing precondition check establishes about the action.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, checked: &Self::Checked, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the match is in a turn state.
pub struct MatchActionable;

impl MatchActionable {
    /// Returns the seat to move.
    #[instrument(skip(snapshot), fields(status = %snapshot.status()))]
    pub fn check(snapshot: &MatchSnapshot) -> Result<Seat, MoveError> {
        snapshot
            .status()
            .to_move()
            .ok_or(MoveError::NotActionable(snapshot.status()))
    }
}

/// Precondition: the requester is the participant to move.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects anyone but the participant to move.
    #[instrument(skip(snapshot))]
    pub fn check(mov: &Move, snapshot: &MatchSnapshot) -> Result<(), MoveError> {
        if snapshot.is_turn_of(&mov.player_id) {
            Ok(())
        } else {
            Err(MoveError::NotYourTurn {
                requester: mov.player_id.clone(),
            })
        }
    }
}

/// Precondition: the cell index is on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Returns the index as a board position.
    #[instrument(skip(snapshot))]
    pub fn check(mov: &Move, snapshot: &MatchSnapshot) -> Result<usize, MoveError> {
        let len = snapshot.dimensions().len();
        usize::try_from(mov.cell_index)
            .ok()
            .filter(|index| *index < len)
            .ok_or(MoveError::OutOfBounds {
                index: mov.cell_index,
                len,
            })
    }
}

/// Precondition: the cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a cell that is already claimed.
    #[instrument(skip(snapshot))]
    pub fn check(cell: usize, snapshot: &MatchSnapshot) -> Result<(), MoveError> {
        if snapshot.board().is_empty_at(cell) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(cell))
        }
    }
}

/// A move that passed every precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    /// Seat that is moving.
    pub seat: Seat,
    /// Board position being claimed.
    pub cell: usize,
}

impl LegalMove {
    /// Validates all preconditions, in order, stopping at the first failure.
    #[instrument(skip(snapshot))]
    pub fn check(mov: &Move, snapshot: &MatchSnapshot) -> Result<Self, MoveError> {
        let seat = MatchActionable::check(snapshot)?;
        PlayersTurn::check(mov, snapshot)?;
        let cell = CellInBounds::check(mov, snapshot)?;
        CellIsEmpty::check(cell, snapshot)?;
        Ok(Self { seat, cell })
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Match accepts moves
/// - Requester is the player to move
/// - Cell index on the board
/// - Cell empty
///
/// Postconditions:
/// - Board remains monotonic
/// - Status follows the new board (win, draw, or the other player's turn)
/// - Participants unchanged
pub struct MoveContract;

impl Contract<MatchSnapshot, Move> for MoveContract {
    type Checked = LegalMove;

    fn pre(snapshot: &MatchSnapshot, action: &Move) -> Result<LegalMove, MoveError> {
        LegalMove::check(action, snapshot)
    }

    fn post(
        before: &MatchSnapshot,
        checked: &LegalMove,
        after: &MatchSnapshot,
    ) -> Result<(), Vec<InvariantViolation>> {
        let transition = Transition {
            before,
            after,
            cell: checked.cell,
        };
        TransitionInvariants::check_all(&transition).inspect_err(|violations| {
            for violation in violations {
                warn!(%violation, cell = checked.cell, "Move postcondition violated");
            }
        })
    }
}

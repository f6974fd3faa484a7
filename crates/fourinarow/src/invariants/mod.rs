//! First-class invariants for four-in-a-row.
//!
//! Invariants are logical properties that must hold for every snapshot the
//! engine hands back, and for every transition it computes. They are
//! testable on their own and double as documentation of the guarantees.

use crate::MatchSnapshot;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

/// A computed step: the snapshot before, the one after, and the cell played.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// Snapshot the move was applied to.
    pub before: &'a MatchSnapshot,
    /// Snapshot the engine produced.
    pub after: &'a MatchSnapshot,
    /// Cell that was claimed.
    pub cell: usize,
}

pub mod active_player;
pub mod alternating_turn;
pub mod board_shape;
pub mod monotonic_board;
pub mod participants;

pub use active_player::ActivePlayerIdentifiedInvariant;
pub use alternating_turn::AlternatingTurnInvariant;
pub use board_shape::BoardShapeInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use participants::ParticipantsUnchangedInvariant;

/// Invariants every stored snapshot should satisfy.
pub type SnapshotInvariants = (BoardShapeInvariant, ActivePlayerIdentifiedInvariant);

/// Invariants every engine transition satisfies.
pub type TransitionInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    ParticipantsUnchangedInvariant,
);

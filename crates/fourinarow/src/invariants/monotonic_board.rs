//! Monotonic board invariant: a move claims exactly one empty cell.

use super::{Invariant, Transition};
use crate::Cell;

/// Invariant: only the played cell changes, from Empty to the mover's seat.
///
/// Every other cell is identical before and after, and the dimensions are
/// preserved.
pub struct MonotonicBoardInvariant;

impl<'a> Invariant<Transition<'a>> for MonotonicBoardInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let before = transition.before.board();
        let after = transition.after.board();

        if before.dimensions() != after.dimensions() {
            return false;
        }

        let Some(mover) = transition.before.status().to_move() else {
            return false;
        };

        before
            .cells()
            .iter()
            .zip(after.cells())
            .enumerate()
            .all(|(index, (old, new))| {
                if index == transition.cell {
                    *old == Cell::Empty && *new == Cell::Occupied(mover)
                } else {
                    old == new
                }
            })
    }

    fn description() -> &'static str {
        "Board cells are monotonic (one empty cell claimed per move)"
    }
}

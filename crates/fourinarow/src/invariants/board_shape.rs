//! Board shape invariant: the cell count matches the dimensions.

use super::Invariant;
use crate::MatchSnapshot;

/// Invariant: `board.len() == rows * cols`.
///
/// [`crate::Board`] construction already enforces this; the check exists so
/// snapshots assembled from storage can be audited the same way.
pub struct BoardShapeInvariant;

impl Invariant<MatchSnapshot> for BoardShapeInvariant {
    fn holds(snapshot: &MatchSnapshot) -> bool {
        snapshot.board().cells().len() == snapshot.dimensions().len()
    }

    fn description() -> &'static str {
        "Board has rows * cols cells"
    }
}

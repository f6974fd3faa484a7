//! Active player invariant: whoever is to move has an identifier.

use super::Invariant;
use crate::MatchSnapshot;

/// Invariant: in a turn state, the active participant's id is non-empty.
pub struct ActivePlayerIdentifiedInvariant;

impl Invariant<MatchSnapshot> for ActivePlayerIdentifiedInvariant {
    fn holds(snapshot: &MatchSnapshot) -> bool {
        snapshot
            .active_player_id()
            .is_none_or(|id| !id.is_empty())
    }

    fn description() -> &'static str {
        "Player to move has a non-empty identifier"
    }
}

//! Participants invariant: a move never reassigns seats.

use super::{Invariant, Transition};

/// Invariant: both identifiers are unchanged by a move.
pub struct ParticipantsUnchangedInvariant;

impl<'a> Invariant<Transition<'a>> for ParticipantsUnchangedInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        transition.before.player_one_id() == transition.after.player_one_id()
            && transition.before.player_two_id() == transition.after.player_two_id()
    }

    fn description() -> &'static str {
        "Player identifiers are unchanged"
    }
}

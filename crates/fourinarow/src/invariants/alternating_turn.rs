//! Alternating turn invariant: the next status follows the board.

use super::{Invariant, Transition};
use crate::{MatchStatus, Outcome, evaluate_outcome};

/// Invariant: the status after a move matches the new board's outcome.
///
/// A win yields the winner's won status and a full board yields a draw;
/// otherwise the turn passes to the opponent of the mover.
pub struct AlternatingTurnInvariant;

impl<'a> Invariant<Transition<'a>> for AlternatingTurnInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let Some(mover) = transition.before.status().to_move() else {
            return false;
        };

        let expected = match evaluate_outcome(transition.after.board()) {
            Outcome::PlayerOneWins => MatchStatus::PlayerOneWon,
            Outcome::PlayerTwoWins => MatchStatus::PlayerTwoWon,
            Outcome::Draw => MatchStatus::Draw,
            Outcome::Ongoing => MatchStatus::turn_of(mover.opponent()),
        };

        transition.after.status() == expected
    }

    fn description() -> &'static str {
        "Turns alternate until the board is won or drawn"
    }
}

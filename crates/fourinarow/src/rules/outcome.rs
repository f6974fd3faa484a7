//! Board outcome: win, draw, or still open.

use super::{draw::is_full, win::find_winning_line};
use crate::{Board, Seat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// No winner and at least one empty cell.
    #[display("Ongoing")]
    Ongoing,
    /// Player one has four in a row.
    #[display("Player 1 wins")]
    PlayerOneWins,
    /// Player two has four in a row.
    #[display("Player 2 wins")]
    PlayerTwoWins,
    /// Board full with no winner.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// The win for `seat`.
    pub fn win_for(seat: Seat) -> Self {
        match seat {
            Seat::PlayerOne => Outcome::PlayerOneWins,
            Seat::PlayerTwo => Outcome::PlayerTwoWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Seat> {
        match self {
            Outcome::PlayerOneWins => Some(Seat::PlayerOne),
            Outcome::PlayerTwoWins => Some(Seat::PlayerTwo),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// True for a win or a draw.
    pub fn is_decided(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// Evaluates the board.
///
/// The first winning run in scan order decides the winner. Without one, a
/// full board is a draw and anything else is still ongoing.
#[instrument(skip(board), fields(dimensions = %board.dimensions()))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    let outcome = match find_winning_line(board) {
        Some(line) => Outcome::win_for(line.seat),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::Ongoing,
    };
    debug!(%outcome, "Board evaluated");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Dimensions};

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate_outcome(&Board::default()), Outcome::Ongoing);
    }

    #[test]
    fn test_full_board_with_a_line_is_a_win() {
        let cells = vec![Cell::Occupied(Seat::PlayerTwo); 16];
        let board = Board::from_cells(Dimensions::new(4, 4).unwrap(), cells).unwrap();
        assert_eq!(evaluate_outcome(&board), Outcome::PlayerTwoWins);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::PlayerOneWins.winner(), Some(Seat::PlayerOne));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(!Outcome::Ongoing.is_decided());
        assert!(Outcome::Draw.is_decided());
    }
}

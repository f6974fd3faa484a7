//! Match status as a closed set of states.

use crate::Seat;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Where a match is in its lifecycle.
///
/// The string forms (`invite`, `player1_turn`, ...) are the values stored
/// in match documents; [`std::str::FromStr`] and [`std::fmt::Display`]
/// use them too.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    EnumIter,
    EnumString,
    IntoStaticStr,
    strum::Display,
)]
pub enum MatchStatus {
    /// Created, waiting for the invitee to accept.
    #[serde(rename = "invite")]
    #[strum(serialize = "invite")]
    Invite,
    /// Player one to move.
    #[serde(rename = "player1_turn")]
    #[strum(serialize = "player1_turn")]
    PlayerOneTurn,
    /// Player two to move.
    #[serde(rename = "player2_turn")]
    #[strum(serialize = "player2_turn")]
    PlayerTwoTurn,
    /// Player one connected four.
    #[serde(rename = "player1_won")]
    #[strum(serialize = "player1_won")]
    PlayerOneWon,
    /// Player two connected four.
    #[serde(rename = "player2_won")]
    #[strum(serialize = "player2_won")]
    PlayerTwoWon,
    /// Board filled with no winner.
    #[serde(rename = "draw")]
    #[strum(serialize = "draw")]
    Draw,
}

impl MatchStatus {
    /// The turn state for `seat`.
    pub fn turn_of(seat: Seat) -> Self {
        match seat {
            Seat::PlayerOne => MatchStatus::PlayerOneTurn,
            Seat::PlayerTwo => MatchStatus::PlayerTwoTurn,
        }
    }

    /// The won state for `seat`.
    pub fn won_by(seat: Seat) -> Self {
        match seat {
            Seat::PlayerOne => MatchStatus::PlayerOneWon,
            Seat::PlayerTwo => MatchStatus::PlayerTwoWon,
        }
    }

    /// The seat to move, if the match is accepting moves.
    pub fn to_move(self) -> Option<Seat> {
        match self {
            MatchStatus::PlayerOneTurn => Some(Seat::PlayerOne),
            MatchStatus::PlayerTwoTurn => Some(Seat::PlayerTwo),
            _ => None,
        }
    }

    /// The winning seat, if the match was won.
    pub fn winner(self) -> Option<Seat> {
        match self {
            MatchStatus::PlayerOneWon => Some(Seat::PlayerOne),
            MatchStatus::PlayerTwoWon => Some(Seat::PlayerTwo),
            _ => None,
        }
    }

    /// True only for the two turn states.
    pub fn accepts_moves(self) -> bool {
        self.to_move().is_some()
    }

    /// True once the match is won or drawn.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            MatchStatus::PlayerOneWon | MatchStatus::PlayerTwoWon | MatchStatus::Draw
        )
    }
}

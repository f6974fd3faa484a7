//! Match snapshots: the value the engine consumes and produces.

use crate::{Board, Dimensions, MatchStatus, MoveError, Seat};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Opaque participant identifier supplied by the caller's identity provider.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    Display,
    From,
)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wraps an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty identifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Board, status and both participants of one match.
///
/// Snapshots are values: the engine never mutates one, it returns the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    board: Board,
    status: MatchStatus,
    player_one_id: PlayerId,
    player_two_id: PlayerId,
}

impl MatchSnapshot {
    /// Assembles a snapshot from parts, e.g. ones loaded from storage.
    pub fn new(
        board: Board,
        status: MatchStatus,
        player_one_id: PlayerId,
        player_two_id: PlayerId,
    ) -> Self {
        Self {
            board,
            status,
            player_one_id,
            player_two_id,
        }
    }

    /// An accepted match: empty board, player one to move.
    #[instrument(
        skip(player_one_id, player_two_id),
        fields(player_one = %player_one_id, player_two = %player_two_id)
    )]
    pub fn started(
        dimensions: Dimensions,
        player_one_id: PlayerId,
        player_two_id: PlayerId,
    ) -> Self {
        Self::new(
            Board::empty(dimensions),
            MatchStatus::PlayerOneTurn,
            player_one_id,
            player_two_id,
        )
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Player one's identifier.
    pub fn player_one_id(&self) -> &PlayerId {
        &self.player_one_id
    }

    /// Player two's identifier.
    pub fn player_two_id(&self) -> &PlayerId {
        &self.player_two_id
    }

    /// The board's dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    /// Identifier of the participant to move, if the match accepts moves.
    pub fn active_player_id(&self) -> Option<&PlayerId> {
        self.status.to_move().map(|seat| match seat {
            Seat::PlayerOne => &self.player_one_id,
            Seat::PlayerTwo => &self.player_two_id,
        })
    }

    /// Whether `player_id` may move right now.
    pub fn is_turn_of(&self, player_id: &PlayerId) -> bool {
        self.active_player_id()
            .is_some_and(|active| !active.is_empty() && active == player_id)
    }

    /// Applies a move; see [`crate::apply_move`].
    pub fn apply_move(&self, cell_index: i64, player_id: &PlayerId) -> Result<Self, MoveError> {
        crate::apply_move(self, cell_index, player_id)
    }

    pub(crate) fn with_board_and_status(&self, board: Board, status: MatchStatus) -> Self {
        Self {
            board,
            status,
            player_one_id: self.player_one_id.clone(),
            player_two_id: self.player_two_id.clone(),
        }
    }
}

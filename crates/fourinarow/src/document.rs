//! Stored match document format.
//!
//! Matches live in a document store as flat records:
//! `gameBoard` (cell codes 0/1/2, row-major), `gameState` (status string),
//! `player1Id` and `player2Id`. This module converts between that record
//! and [`MatchSnapshot`].

use crate::{Board, BoardError, Cell, Dimensions, MatchSnapshot, MatchStatus, PlayerId};
use derive_more::{Display, Error, From};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Match record as persisted by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchDocument {
    /// Cell codes, row-major: 0 empty, 1 player one, 2 player two.
    pub game_board: Vec<u8>,
    /// Status string, e.g. `player1_turn`.
    pub game_state: String,
    /// Player one's identifier.
    #[serde(rename = "player1Id")]
    pub player1_id: String,
    /// Player two's identifier.
    #[serde(rename = "player2Id")]
    pub player2_id: String,
}

impl Default for MatchDocument {
    fn default() -> Self {
        Self {
            game_board: vec![0; Dimensions::STANDARD.len()],
            game_state: MatchStatus::Invite.to_string(),
            player1_id: String::new(),
            player2_id: String::new(),
        }
    }
}

/// Why a stored document could not be read as a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum DocumentError {
    /// Board codes or length are invalid.
    #[display("Invalid board: {}", _0)]
    #[from]
    Board(BoardError),
    /// `gameState` is not a known status.
    #[display("Unknown match status '{}'", _0)]
    UnknownStatus(#[error(not(source))] String),
}

impl MatchDocument {
    /// Reads the document as a snapshot on a board of `dimensions`.
    #[instrument(skip(self), fields(status = %self.game_state))]
    pub fn into_snapshot(self, dimensions: Dimensions) -> Result<MatchSnapshot, DocumentError> {
        let status = MatchStatus::from_str(&self.game_state).map_err(|_| {
            warn!(status = %self.game_state, "Unknown status in match document");
            DocumentError::UnknownStatus(self.game_state.clone())
        })?;

        let cells = self
            .game_board
            .iter()
            .map(|&code| Cell::try_from(code))
            .collect::<Result<Vec<_>, _>>()?;
        let board = Board::from_cells(dimensions, cells)?;

        Ok(MatchSnapshot::new(
            board,
            status,
            PlayerId::new(self.player1_id),
            PlayerId::new(self.player2_id),
        ))
    }
}

impl From<&MatchSnapshot> for MatchDocument {
    fn from(snapshot: &MatchSnapshot) -> Self {
        Self {
            game_board: snapshot.board().cells().iter().map(|&c| u8::from(c)).collect(),
            game_state: snapshot.status().to_string(),
            player1_id: snapshot.player_one_id().as_str().to_owned(),
            player2_id: snapshot.player_two_id().as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_an_open_invite() {
        let snapshot = MatchDocument::default()
            .into_snapshot(Dimensions::STANDARD)
            .unwrap();
        assert_eq!(snapshot.status(), MatchStatus::Invite);
        assert_eq!(snapshot.board(), &Board::default());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let doc = MatchDocument {
            game_state: "paused".into(),
            ..Default::default()
        };
        assert_eq!(
            doc.into_snapshot(Dimensions::STANDARD),
            Err(DocumentError::UnknownStatus("paused".into()))
        );
    }

    #[test]
    fn test_bad_cell_code_rejected() {
        let mut doc = MatchDocument::default();
        doc.game_board[5] = 7;
        assert_eq!(
            doc.into_snapshot(Dimensions::STANDARD),
            Err(DocumentError::Board(BoardError::UnknownCellCode(7)))
        );
    }

    #[test]
    fn test_error_sources() {
        let board = DocumentError::from(BoardError::UnknownCellCode(7));
        assert!(std::error::Error::source(&board).is_some());
        let status = DocumentError::UnknownStatus("paused".into());
        assert!(std::error::Error::source(&status).is_none());
    }

    #[test]
    fn test_wrong_length_rejected() {
        let doc = MatchDocument::default();
        let dims = Dimensions::new(5, 5).unwrap();
        assert_eq!(
            doc.into_snapshot(dims),
            Err(DocumentError::Board(BoardError::LengthMismatch {
                expected: 25,
                actual: 42
            }))
        );
    }
}

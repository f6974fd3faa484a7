//! Match engine: turns a snapshot and a move into the next snapshot.
//!
//! Everything here is a pure function of its arguments. Reading the current
//! snapshot, writing the result back, and telling viewers about it are the
//! caller's job.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::{Cell, MatchSnapshot, MatchStatus, Outcome, PlayerId, evaluate_outcome};
use tracing::{debug, info, instrument};

/// Applies `player_id`'s claim on `cell_index` to `snapshot`.
///
/// Preconditions are checked in order and the first failure is returned:
/// match accepting moves, requester to move, index on the board, cell
/// empty. On success the mover's seat takes the cell and the status
/// becomes the win, the draw, or the other player's turn. Identifiers
/// are carried over unchanged; `snapshot` itself is never modified.
#[instrument(skip(snapshot), fields(status = %snapshot.status()))]
pub fn apply_move(
    snapshot: &MatchSnapshot,
    cell_index: i64,
    player_id: &PlayerId,
) -> Result<MatchSnapshot, MoveError> {
    let action = Move::new(player_id.clone(), cell_index);

    let legal = MoveContract::pre(snapshot, &action).inspect_err(|error| {
        debug!(%error, "Move rejected");
    })?;

    let board = snapshot
        .board()
        .with_cell(legal.cell, Cell::Occupied(legal.seat))
        .ok_or(MoveError::OutOfBounds {
            index: cell_index,
            len: snapshot.dimensions().len(),
        })?;

    let outcome = evaluate_outcome(&board);
    let status = match outcome {
        Outcome::PlayerOneWins => MatchStatus::PlayerOneWon,
        Outcome::PlayerTwoWins => MatchStatus::PlayerTwoWon,
        Outcome::Draw => MatchStatus::Draw,
        Outcome::Ongoing => MatchStatus::turn_of(legal.seat.opponent()),
    };

    let next = snapshot.with_board_and_status(board, status);

    debug_assert!(
        MoveContract::post(snapshot, &legal, &next).is_ok(),
        "Move postcondition violated"
    );

    if status.is_terminal() {
        info!(%status, cell = legal.cell, "Match finished");
    } else {
        debug!(%status, cell = legal.cell, "Move applied");
    }

    Ok(next)
}

/// Applies `moves` in order starting from `start`.
///
/// Stops at the first rejected move and returns its error.
#[instrument(skip(start, moves), fields(moves = moves.len()))]
pub fn replay(start: &MatchSnapshot, moves: &[Move]) -> Result<MatchSnapshot, MoveError> {
    moves.iter().try_fold(start.clone(), |snapshot, mov| {
        apply_move(&snapshot, mov.cell_index, &mov.player_id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Dimensions, Seat};

    fn started() -> MatchSnapshot {
        MatchSnapshot::started(Dimensions::STANDARD, "alice".into(), "bob".into())
    }

    #[test]
    fn test_first_move_passes_turn() {
        let next = apply_move(&started(), 0, &"alice".into()).unwrap();
        assert_eq!(next.board().get(0), Some(Cell::Occupied(Seat::PlayerOne)));
        assert_eq!(next.status(), MatchStatus::PlayerTwoTurn);
    }

    #[test]
    fn test_input_snapshot_untouched() {
        let before = started();
        let _ = apply_move(&before, 0, &"alice".into()).unwrap();
        assert_eq!(before, started());
    }

    #[test]
    fn test_rejects_finished_match() {
        let snapshot = MatchSnapshot::new(
            Board::default(),
            MatchStatus::PlayerOneWon,
            "alice".into(),
            "bob".into(),
        );
        assert_eq!(
            apply_move(&snapshot, 0, &"alice".into()),
            Err(MoveError::NotActionable(MatchStatus::PlayerOneWon))
        );
    }

    #[test]
    fn test_replay_stops_at_first_error() {
        let moves = [
            Move::new("alice".into(), 0),
            Move::new("bob".into(), 0),
            Move::new("alice".into(), 1),
        ];
        assert_eq!(replay(&started(), &moves), Err(MoveError::CellOccupied(0)));
    }

    #[test]
    fn test_replay_vertical_win() {
        let moves: Vec<_> = [
            (0, "alice"),
            (1, "bob"),
            (7, "alice"),
            (8, "bob"),
            (14, "alice"),
            (15, "bob"),
            (21, "alice"),
        ]
        .into_iter()
        .map(|(cell, who)| Move::new(who.into(), cell))
        .collect();
        let finished = replay(&started(), &moves).unwrap();
        assert_eq!(finished.status(), MatchStatus::PlayerOneWon);
    }
}

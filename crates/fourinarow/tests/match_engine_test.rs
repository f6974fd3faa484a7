//! Move application scenarios on the standard board.

mod common;

use common::{
    DRAW_ROWS, board_from_rows, init_tracing, player_one, player_two, snapshot, started,
};
use fourinarow::{
    Board, Cell, Dimensions, MatchSnapshot, MatchStatus, Move, MoveError, Seat, apply_move,
    replay,
};

fn with_cells(board: Board, cells: &[usize], seat: Seat) -> Board {
    cells.iter().fold(board, |b, &i| {
        b.with_cell(i, Cell::Occupied(seat)).expect("cell on board")
    })
}

#[test]
fn test_first_move_on_empty_board() {
    init_tracing();
    let next = apply_move(&started(), 0, &player_one()).expect("legal move");

    assert_eq!(next.board().get(0), Some(Cell::Occupied(Seat::PlayerOne)));
    assert_eq!(next.board().empty_cells().len(), 41);
    assert_eq!(next.status(), MatchStatus::PlayerTwoTurn);
    assert_eq!(next.player_one_id(), &player_one());
    assert_eq!(next.player_two_id(), &player_two());
}

#[test]
fn test_completing_a_row_wins() {
    init_tracing();
    let board = with_cells(Board::default(), &[0, 1, 2], Seat::PlayerOne);
    let before = snapshot(board, MatchStatus::PlayerOneTurn);

    let next = apply_move(&before, 3, &player_one()).expect("legal move");
    assert_eq!(next.status(), MatchStatus::PlayerOneWon);
}

#[test]
fn test_wrong_requester_is_rejected() {
    init_tracing();
    let board = with_cells(Board::default(), &[0, 1, 2], Seat::PlayerOne);
    let before = snapshot(board, MatchStatus::PlayerOneTurn);

    let result = apply_move(&before, 3, &player_two());
    assert_eq!(
        result,
        Err(MoveError::NotYourTurn {
            requester: player_two()
        })
    );
    assert_eq!(before.board().get(3), Some(Cell::Empty));
}

#[test]
fn test_last_cell_without_a_line_is_a_draw() {
    init_tracing();
    let full = board_from_rows(&DRAW_ROWS);
    let board = full.with_cell(41, Cell::Empty).expect("cell on board");
    let before = snapshot(board, MatchStatus::PlayerOneTurn);

    let next = apply_move(&before, 41, &player_one()).expect("legal move");
    assert_eq!(next.board(), &full);
    assert_eq!(next.status(), MatchStatus::Draw);
}

#[test]
fn test_out_of_bounds_indices() {
    init_tracing();
    for index in [-1, 42, i64::MIN, i64::MAX] {
        assert_eq!(
            apply_move(&started(), index, &player_one()),
            Err(MoveError::OutOfBounds { index, len: 42 })
        );
    }
}

#[test]
fn test_second_claim_on_same_cell_is_rejected() {
    init_tracing();
    let next = apply_move(&started(), 10, &player_one()).expect("legal move");
    assert_eq!(
        apply_move(&next, 10, &player_two()),
        Err(MoveError::CellOccupied(10))
    );
}

#[test]
fn test_same_cell_after_win_is_not_actionable() {
    init_tracing();
    let board = with_cells(Board::default(), &[0, 1, 2], Seat::PlayerOne);
    let won = apply_move(&snapshot(board, MatchStatus::PlayerOneTurn), 3, &player_one())
        .expect("legal move");

    assert_eq!(
        apply_move(&won, 3, &player_two()),
        Err(MoveError::NotActionable(MatchStatus::PlayerOneWon))
    );
}

#[test]
fn test_invite_is_not_actionable() {
    init_tracing();
    let invite = snapshot(Board::default(), MatchStatus::Invite);
    assert_eq!(
        apply_move(&invite, 0, &player_one()),
        Err(MoveError::NotActionable(MatchStatus::Invite))
    );
}

#[test]
fn test_turns_alternate_until_decided() {
    init_tracing();
    let ids = [player_one(), player_two()];
    // No line completes in these ten moves.
    let cells = [0, 1, 2, 3, 7, 8, 9, 10, 4, 5];

    let mut current = started();
    for (turn, &cell) in cells.iter().enumerate() {
        let mover = &ids[turn % 2];
        current = apply_move(&current, cell, mover).expect("legal move");
        let expected = if turn % 2 == 0 {
            MatchStatus::PlayerTwoTurn
        } else {
            MatchStatus::PlayerOneTurn
        };
        assert_eq!(current.status(), expected, "after move {turn}");
    }
}

#[test]
fn test_player_two_win() {
    init_tracing();
    let moves: Vec<Move> = [
        (0, player_one()),
        (6, player_two()),
        (1, player_one()),
        (12, player_two()),
        (35, player_one()),
        (18, player_two()),
        (40, player_one()),
        (24, player_two()),
    ]
    .into_iter()
    .map(|(cell, id)| Move::new(id, cell))
    .collect();

    let finished = replay(&started(), &moves).expect("legal replay");
    assert_eq!(finished.status(), MatchStatus::PlayerTwoWon);
    assert_eq!(finished.status().winner(), Some(Seat::PlayerTwo));
}

#[test]
fn test_parametric_board() {
    init_tracing();
    let dims = Dimensions::new(4, 5).expect("playable dimensions");
    let start = MatchSnapshot::started(dims, player_one(), player_two());

    assert_eq!(
        apply_move(&start, 20, &player_one()),
        Err(MoveError::OutOfBounds { index: 20, len: 20 })
    );
    let next = apply_move(&start, 19, &player_one()).expect("legal move");
    assert_eq!(next.board().get_at(3, 4), Some(Cell::Occupied(Seat::PlayerOne)));
}

#[test]
fn test_method_form_matches_free_function() {
    let snapshot = started();
    assert_eq!(
        snapshot.apply_move(5, &player_one()),
        apply_move(&snapshot, 5, &player_one())
    );
}

#[test]
fn test_snapshots_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MatchSnapshot>();
    assert_send_sync::<MoveError>();

    let shared = std::sync::Arc::new(started());
    let handles: Vec<_> = (0..4)
        .map(|cell| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || apply_move(&shared, cell, &player_one()))
        })
        .collect();
    for handle in handles {
        let next = handle.join().expect("thread finished").expect("legal move");
        assert_eq!(next.status(), MatchStatus::PlayerTwoTurn);
    }
    assert_eq!(*shared, started());
}

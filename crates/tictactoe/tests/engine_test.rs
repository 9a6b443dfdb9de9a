//! Tests for the tic-tac-toe engine's public contract.

use tictactoe::{Game, GameEvent, InvalidMove, Outcome, Player, Position, Square};

const TOP_ROW_WIN: [(i32, i32); 5] = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)];

// X: (0,0) (0,1) (1,2) (2,0) (2,2) / O: (0,2) (1,0) (1,1) (2,1)
const DRAWN_GAME: [(i32, i32); 9] = [
    (0, 0),
    (0, 2),
    (0, 1),
    (1, 0),
    (1, 2),
    (1, 1),
    (2, 0),
    (2, 1),
    (2, 2),
];

fn play(moves: &[(i32, i32)]) -> Game {
    let mut game = Game::new();
    for &(row, col) in moves {
        game.place(row, col).unwrap();
    }
    game
}

#[test]
fn test_top_row_win() {
    let game = play(&TOP_ROW_WIN);
    assert_eq!(game.outcome(), Outcome::Winner(Player::X));
}

#[test]
fn test_drawn_game_is_tie() {
    let mut game = play(&DRAWN_GAME);
    assert_eq!(game.outcome(), Outcome::Tie);

    for pos in Position::ALL {
        assert!(!game.can_place(pos.row(), pos.col()));
    }
    assert_eq!(
        game.place(1, 1),
        Err(InvalidMove::GameAlreadyDecided {
            outcome: Outcome::Tie
        })
    );
}

#[test]
fn test_column_and_diagonal_wins() {
    // O takes the middle column
    let game = play(&[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)]);
    assert_eq!(game.outcome(), Outcome::Winner(Player::O));

    // X takes the anti-diagonal
    let game = play(&[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
    assert_eq!(game.outcome(), Outcome::Winner(Player::X));
}

#[test]
fn test_win_on_last_square_is_not_tie() {
    // X completes the main diagonal with the ninth mark
    let game = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    assert_eq!(game.outcome(), Outcome::Winner(Player::X));
}

#[test]
fn test_occupied_square_rejected() {
    let mut game = play(&[(1, 1)]);
    assert!(!game.can_place(1, 1));
    assert_eq!(
        game.place(1, 1),
        Err(InvalidMove::CellOccupied {
            position: Position::Center
        })
    );
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_errors_are_distinguishable() {
    let mut game = play(&[(0, 0)]);
    let out_of_bounds = game.place(0, 3).unwrap_err();
    let occupied = game.place(0, 0).unwrap_err();

    let mut finished = play(&TOP_ROW_WIN);
    let decided = finished.place(2, 2).unwrap_err();

    assert!(matches!(out_of_bounds, InvalidMove::OutOfBounds { .. }));
    assert!(matches!(occupied, InvalidMove::CellOccupied { .. }));
    assert!(matches!(decided, InvalidMove::GameAlreadyDecided { .. }));
    assert!(out_of_bounds.to_string().contains("off the board"));
    assert!(occupied.to_string().contains("occupied"));
    assert!(decided.to_string().contains("reset()"));
}

#[test]
fn test_occupied_square_on_decided_board_reports_decided() {
    let mut game = play(&TOP_ROW_WIN);
    assert!(!game.board().is_empty(Position::TopLeft));
    assert_eq!(
        game.place(0, 0),
        Err(InvalidMove::GameAlreadyDecided {
            outcome: Outcome::Winner(Player::X)
        })
    );
}

#[test]
fn test_symbol_stable_after_game_over() {
    let mut game = play(&TOP_ROW_WIN);
    let symbol = game.current_player_symbol();
    assert_eq!(symbol, 'X');

    for pos in Position::ALL {
        let _ = game.place(pos.row(), pos.col());
        let _ = game.place(pos.row() + 3, pos.col());
        assert_eq!(game.current_player_symbol(), symbol);
    }
}

#[test]
fn test_reset_from_any_state() {
    for moves in [&TOP_ROW_WIN[..], &DRAWN_GAME[..], &[(2, 1)][..], &[][..]] {
        let mut game = play(moves);
        game.reset();

        assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.outcome(), Outcome::Undecided);
    }
}

#[test]
fn test_reset_is_idempotent() {
    let mut once = play(&DRAWN_GAME[..4]);
    once.reset();

    let mut twice = play(&DRAWN_GAME[..4]);
    twice.reset();
    twice.reset();

    assert_eq!(once.state(), twice.state());
}

#[test]
fn test_events_order_through_whole_game() {
    let mut game = Game::new();
    let mut kinds = Vec::new();
    for &(row, col) in &TOP_ROW_WIN {
        for event in game.place(row, col).unwrap().events() {
            kinds.push(match event {
                GameEvent::MarkPlaced { .. } => "placed",
                GameEvent::TurnChanged { .. } => "turn",
                GameEvent::GameOver { .. } => "over",
            });
        }
    }
    assert_eq!(kinds.len(), 2 * TOP_ROW_WIN.len());
    for (i, pair) in kinds.chunks(2).enumerate() {
        let follow_up = if i + 1 == TOP_ROW_WIN.len() { "over" } else { "turn" };
        assert_eq!(pair, ["placed", follow_up]);
    }
}

#[test]
fn test_independent_games() {
    let mut first = Game::new();
    let second = Game::new();
    first.place(0, 0).unwrap();

    assert_eq!(first.to_move(), Player::O);
    assert_eq!(second.to_move(), Player::X);
    assert!(second.can_place(0, 0));
}

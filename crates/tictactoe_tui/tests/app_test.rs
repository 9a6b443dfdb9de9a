//! Tests for terminal app key handling (no terminal required).

use crossterm::event::KeyCode;
use tictactoe::{Outcome, Player, Position, Square};
use tictactoe_tui::{App, AppAction};

fn press_digits(app: &mut App, digits: &str) {
    for c in digits.chars() {
        assert_eq!(app.handle_key(KeyCode::Char(c)), AppAction::Continue);
    }
}

#[test]
fn test_initial_status() {
    let app = App::new();
    assert_eq!(app.status_message(), "Player 1: X's");
    assert_eq!(app.cursor(), Position::Center);
    assert_eq!(app.last_move(), None);
}

#[test]
fn test_enter_places_at_cursor() {
    let mut app = App::new();
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Left);
    app.handle_key(KeyCode::Enter);

    assert_eq!(
        app.game().board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
    assert_eq!(app.status_message(), "Player 2: O's");
    assert_eq!(app.last_move(), Some("X placed at Top-left (0, 0)"));
}

#[test]
fn test_digit_keys_play_to_win() {
    let mut app = App::new();
    // X: 1 2 3, O: 5 4
    press_digits(&mut app, "15243");

    assert_eq!(app.game().outcome(), Outcome::Winner(Player::X));
    assert!(app.status_message().starts_with("Player 1 wins!"));
}

#[test]
fn test_tie_message() {
    let mut app = App::new();
    press_digits(&mut app, "132564789");

    assert_eq!(app.game().outcome(), Outcome::Tie);
    assert!(app.status_message().starts_with("It was a tie."));
}

#[test]
fn test_refused_move_reported() {
    let mut app = App::new();
    press_digits(&mut app, "55");

    assert!(app.status_message().starts_with("Invalid move:"));
    assert!(app.status_message().contains("occupied"));
    assert_eq!(app.game().to_move(), Player::O);
}

#[test]
fn test_moves_after_game_over_refused() {
    let mut app = App::new();
    press_digits(&mut app, "15243");
    press_digits(&mut app, "9");

    assert!(app.status_message().contains("already decided"));
    assert!(app.game().board().is_empty(Position::BottomRight));
}

#[test]
fn test_restart() {
    let mut app = App::new();
    press_digits(&mut app, "15243");
    app.handle_key(KeyCode::Char('r'));

    assert_eq!(app.game().outcome(), Outcome::Undecided);
    assert_eq!(app.game().to_move(), Player::X);
    assert_eq!(app.status_message(), "Player 1: X's");
    assert_eq!(app.last_move(), None);
}

#[test]
fn test_quit_keys() {
    let mut app = App::new();
    assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
    assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
}

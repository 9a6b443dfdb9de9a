//! Keyboard navigation over the board.

use crossterm::event::KeyCode;
use tictactoe::Position;

/// Moves the cursor one square for an arrow key; edges clamp.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row - 1, col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col - 1),
        KeyCode::Right => (row, col + 1),
        _ => return cursor,
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps keys `1`-`9` to squares in row-major order.
pub fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10)? {
        0 => None,
        d => Position::from_index(d as usize - 1),
    }
}

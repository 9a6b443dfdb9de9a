//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{Board, Player, Position, Square};

use crate::app::App;
use crate::config::Palette;

const HELP: &str = "Arrows move · Enter/Space or 1-9 place · r restart · q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.game().board(), app.cursor(), palette);

    let mut lines = vec![Line::from(app.status_message().to_string())];
    if let Some(last) = app.last_move() {
        lines.push(Line::from(Span::styled(
            last.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let status = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, palette: &Palette) {
    let board_area = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let positions = &Position::ALL[row * 3..row * 3 + 3];
        draw_row(frame, chunk, board, cursor, positions, palette);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    positions: &[Position],
    palette: &Palette,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], board.get(*pos), *pos == cursor, palette);
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, highlighted: bool, palette: &Palette) {
    let (symbol, base_style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(palette.cursor).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically centre the mark in the 3-line cell
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

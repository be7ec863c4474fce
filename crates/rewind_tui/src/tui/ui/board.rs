//! The 3x3 grid.

use super::square::{SquareProps, render_square};
use super::theme::Theme;
use crate::tui::hit::HitMap;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};
use rewind_tictactoe::{Command, GameView, Position};

/// Width of the drawn grid.
pub const BOARD_WIDTH: u16 = 38;
/// Height of the drawn grid.
pub const BOARD_HEIGHT: u16 = 11;

/// Renders the game board.
///
/// `cursor` is the keyboard cursor, if the board has focus. Each square is
/// wired to place at its own cell.
pub fn render_board(
    frame: &mut Frame,
    hits: &mut HitMap,
    area: Rect,
    view: &GameView,
    cursor: Option<Position>,
    theme: &Theme,
) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
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
        render_row(frame, hits, chunk, view, cursor, theme, row * 3);
    }
    render_separator(frame, rows[1]);
    render_separator(frame, rows[3]);
}

fn render_row(
    frame: &mut Frame,
    hits: &mut HitMap,
    area: Rect,
    view: &GameView,
    cursor: Option<Position>,
    theme: &Theme,
    start: usize,
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

    for (offset, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        let Some(pos) = Position::from_index(start + offset) else {
            continue;
        };
        let props = SquareProps {
            square: view.square(pos),
            winning: view.is_winning(pos),
            highlighted: cursor == Some(pos),
            on_click: Command::Place(pos),
        };
        render_square(frame, hits, chunk, props, theme);
    }
    render_separator_vertical(frame, cols[1]);
    render_separator_vertical(frame, cols[3]);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

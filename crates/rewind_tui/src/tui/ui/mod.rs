//! Stateless UI rendering.
//!
//! Drawing is a pure function of the [`GameView`] plus the cursor state; it
//! returns the click regions for the frame it drew.

mod board;
mod history;
mod square;
mod theme;

use super::hit::HitMap;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameView, Position};

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, center_rect, render_board};
pub use history::{render_game_info, visible_window};
pub use square::{SquareProps, render_square};
pub use theme::Theme;

/// Width of the game-info pane, borders included.
pub const INFO_WIDTH: u16 = 36;

const HELP: &str = "Click or 1-9 / arrows+Enter: move | Tab: history | [ ]: step | s: sort | q: quit";

/// Draws the whole game and returns this frame's click regions.
///
/// `cursor` is set while the board has focus, `selected` while the move
/// list has focus.
pub fn draw(
    frame: &mut Frame,
    view: &GameView,
    cursor: Option<Position>,
    selected: Option<usize>,
    theme: &Theme,
) -> HitMap {
    let mut hits = HitMap::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Board + game info
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(BOARD_WIDTH + 2), Constraint::Length(INFO_WIDTH)])
        .split(chunks[1]);

    let board_block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(focus_style(cursor.is_some()));
    let board_inner = board_block.inner(body[0]);
    frame.render_widget(board_block, body[0]);
    render_board(frame, &mut hits, board_inner, view, cursor, theme);

    let info_block = Block::default()
        .borders(Borders::ALL)
        .title("Game")
        .border_style(focus_style(selected.is_some()));
    let info_inner = info_block.inner(body[1]);
    frame.render_widget(info_block, body[1]);
    render_game_info(frame, &mut hits, info_inner, view, selected, theme);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    hits
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

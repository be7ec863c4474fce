//! Status line, sort control and move list.

use super::theme::Theme;
use crate::tui::hit::HitMap;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use rewind_tictactoe::{Command, GameView, Status};
use std::ops::Range;

/// Rows above the move list: status, gap, sort control, gap.
const HEADER_ROWS: u16 = 4;

/// Renders the game-info pane.
///
/// `selected` is the highlighted list row when the list has focus.
pub fn render_game_info(
    frame: &mut Frame,
    hits: &mut HitMap,
    area: Rect,
    view: &GameView,
    selected: Option<usize>,
    theme: &Theme,
) {
    if area.height == 0 {
        return;
    }

    let status_style = match view.status() {
        Status::Winner(player) => Style::default()
            .fg(theme.color(*player))
            .add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status_area = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(view.status().to_string()).style(status_style),
        status_area,
    );

    if area.height > 2 {
        let label = format!("[ {} ]", view.sort_label());
        let width = (label.chars().count() as u16).min(area.width);
        let sort_area = Rect::new(area.x, area.y + 2, width, 1);
        frame.render_widget(
            Paragraph::new(label).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            sort_area,
        );
        hits.register(sort_area, Command::ToggleSort);
    }

    let rows = area.height.saturating_sub(HEADER_ROWS) as usize;
    let moves = view.moves();
    let current = moves.iter().position(|entry| entry.is_current).unwrap_or(0);
    let window = visible_window(moves.len(), rows, selected.unwrap_or(current));

    for (line_no, idx) in window.enumerate() {
        let entry = &moves[idx];
        let row_area = Rect::new(area.x, area.y + HEADER_ROWS + line_no as u16, area.width, 1);

        let marker = if entry.is_current { "▶ " } else { "  " };
        let label_style = if entry.is_current {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let mut spans = vec![
            Span::styled(marker, label_style),
            Span::styled(entry.label(), label_style),
        ];
        if let Some(location) = entry.location() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(location, Style::default().fg(Color::Cyan)));
        }

        let mut line = Line::from(spans);
        if selected == Some(idx) {
            line = line.style(Style::default().add_modifier(Modifier::REVERSED));
        }
        frame.render_widget(Paragraph::new(line), row_area);
        hits.register(row_area, Command::JumpTo(entry.step));
    }
}

/// Rows of a `len`-entry list to show in `rows` lines, keeping `anchor` visible.
pub fn visible_window(len: usize, rows: usize, anchor: usize) -> Range<usize> {
    if rows == 0 {
        return 0..0;
    }
    if len <= rows {
        return 0..len;
    }
    let start = anchor.saturating_sub(rows - 1).min(len - rows);
    start..start + rows
}

//! One board cell.

use super::theme::Theme;
use crate::tui::hit::HitMap;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier},
    text::{Line, Span},
    widgets::Paragraph,
};
use rewind_tictactoe::{Command, Square};

/// Inputs for drawing a square.
#[derive(Debug, Clone, Copy)]
pub struct SquareProps {
    /// Cell content.
    pub square: Square,
    /// Part of the winning line.
    pub winning: bool,
    /// Under the keyboard cursor.
    pub highlighted: bool,
    /// Emitted when the square is clicked.
    pub on_click: Command,
}

/// Draws a square and registers its click region.
pub fn render_square(
    frame: &mut Frame,
    hits: &mut HitMap,
    area: Rect,
    props: SquareProps,
    theme: &Theme,
) {
    let mut style = theme.square_style(props.square);
    if props.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if props.highlighted {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let mark = props.square.mark().unwrap_or(" ");
    let pad = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(format!(" {mark} "), style)));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
    hits.register(area, props.on_click);
}

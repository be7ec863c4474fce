//! Render-ready view of a game.
//!
//! Front ends draw from a [`GameView`] and never recompute game rules
//! themselves.

use super::rules::WinningLine;
use super::types::{Board, Player};
use super::{Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Caption of the sort control: names the order a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort by: Descending",
            Self::Descending => "Sort by: Ascending",
        }
    }
}

/// Status line of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Status {
    /// Someone completed a line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Full board, no line.
    #[display("No One Wins")]
    Draw,
    /// Game continues.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl Status {
    /// True once the shown board is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveEntry {
    /// History index this row jumps to.
    pub step: usize,
    /// `(row, col)` of the move that produced this step, both 1-indexed.
    pub coordinate: Option<(usize, usize)>,
    /// Whether this is the step being shown.
    pub is_current: bool,
}

impl MoveEntry {
    pub(crate) fn new(step: usize, played: Option<Position>, current_step: usize) -> Self {
        Self {
            step,
            coordinate: played.map(|pos| (pos.row(), pos.col())),
            is_current: step == current_step,
        }
    }

    /// Button caption for this row.
    pub fn label(&self) -> String {
        match self.step {
            0 => "Go to game start".to_string(),
            n => format!("Go to move #{n}"),
        }
    }

    /// `[row, col]` annotation, if this row follows a move.
    pub fn location(&self) -> Option<String> {
        self.coordinate.map(|(row, col)| format!("[{row}, {col}]"))
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// Completed line on that board, if any.
    winning_line: Option<WinningLine>,
    /// Status line.
    status: Status,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Current display order.
    sort_order: SortOrder,
}

impl GameView {
    pub(crate) fn new(
        board: Board,
        winning_line: Option<WinningLine>,
        status: Status,
        moves: Vec<MoveEntry>,
        sort_order: SortOrder,
    ) -> Self {
        Self {
            board,
            winning_line,
            status,
            moves,
            sort_order,
        }
    }

    /// Square shown at `pos`.
    pub fn square(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// Whether `pos` is part of the winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }

    /// Caption of the sort control.
    pub fn sort_label(&self) -> &'static str {
        self.sort_order.toggle_label()
    }

    /// Plain-text rendering: board, status, sort control and move list.
    pub fn to_text(&self) -> String {
        let mut out = self.board.display();
        out.push_str("\n\n");
        out.push_str(&self.status.to_string());
        out.push('\n');
        out.push_str(self.sort_label());
        out.push('\n');
        for entry in &self.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("{marker} {}. {}", entry.step, entry.label()));
            if let Some(location) = entry.location() {
                out.push(' ');
                out.push_str(&location);
            }
            out.push('\n');
        }
        out
    }
}

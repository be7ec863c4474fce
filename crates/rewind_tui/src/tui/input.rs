//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// A key press, interpreted for the focused pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the program.
    Quit,
    /// Move focus between board and move list.
    SwitchFocus,
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Place at the board cursor.
    PlaceAtCursor,
    /// Place at a specific cell.
    Place(Position),
    /// Move the list selection up.
    SelectPrevious,
    /// Move the list selection down.
    SelectNext,
    /// Jump to the selected list entry.
    JumpToSelected,
    /// Jump one step back.
    StepBack,
    /// Jump one step forward.
    StepForward,
    /// Flip the move-list order.
    ToggleSort,
    /// Nothing bound.
    Ignore,
}

/// Interprets `code` for the pane that has focus.
pub fn key_action(code: KeyCode, focus: Focus) -> KeyAction {
    match (code, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => KeyAction::Quit,
        (KeyCode::Tab | KeyCode::BackTab, _) => KeyAction::SwitchFocus,
        (KeyCode::Char('s'), _) => KeyAction::ToggleSort,
        (KeyCode::Char('['), _) => KeyAction::StepBack,
        (KeyCode::Char(']'), _) => KeyAction::StepForward,
        (KeyCode::Char(c), _) if ('1'..='9').contains(&c) => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(KeyAction::Ignore, KeyAction::Place),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => KeyAction::PlaceAtCursor,
        (KeyCode::Enter | KeyCode::Char(' '), Focus::History) => KeyAction::JumpToSelected,
        (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right, Focus::Board) => {
            KeyAction::MoveCursor(code)
        }
        (KeyCode::Up, Focus::History) => KeyAction::SelectPrevious,
        (KeyCode::Down, Focus::History) => KeyAction::SelectNext,
        _ => KeyAction::Ignore,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row() - 1, cursor.col() - 1);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

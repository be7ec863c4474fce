//! Application state and event handling.

use super::hit::HitMap;
use super::input::{Focus, KeyAction, key_action, move_cursor};
use super::ui::{self, Theme};
use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use rewind_tictactoe::{Command, Game, Position};
use tracing::{debug, instrument, warn};

/// Main application state.
///
/// Owns the [`Game`] plus the purely visual state around it: keyboard
/// cursor, focused pane, list selection and the click regions of the last
/// frame.
#[derive(Debug)]
pub struct App {
    game: Game,
    theme: Theme,
    cursor: Position,
    focus: Focus,
    selected: usize,
    hits: HitMap,
    quit: bool,
}

impl App {
    /// Creates a new application around `game`.
    pub fn new(game: Game, theme: Theme) -> Self {
        Self {
            game,
            theme,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            hits: HitMap::new(),
            quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Click regions of the last drawn frame.
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// Draws the current frame and remembers its click regions.
    pub fn draw(&mut self, frame: &mut Frame) {
        let view = self.game.view();
        let (cursor, selected) = match self.focus {
            Focus::Board => (Some(self.cursor), None),
            Focus::History => (None, Some(self.selected)),
        };
        self.hits = ui::draw(frame, &view, cursor, selected, &self.theme);
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return;
        }

        let action = key_action(key.code, self.focus);
        debug!(?action, "Key mapped");
        let last_row = self.game.timeline().last_step();
        let command = match action {
            KeyAction::Quit => {
                self.quit = true;
                None
            }
            KeyAction::SwitchFocus => {
                self.focus = self.focus.toggle();
                if self.focus == Focus::History {
                    self.selected = self.current_row();
                }
                None
            }
            KeyAction::MoveCursor(code) => {
                self.cursor = move_cursor(self.cursor, code);
                None
            }
            KeyAction::PlaceAtCursor => Some(Command::Place(self.cursor)),
            KeyAction::Place(pos) => {
                self.cursor = pos;
                Some(Command::Place(pos))
            }
            KeyAction::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyAction::SelectNext => {
                self.selected = (self.selected + 1).min(last_row);
                None
            }
            KeyAction::JumpToSelected => self
                .game
                .moves()
                .get(self.selected)
                .map(|entry| Command::JumpTo(entry.step)),
            KeyAction::StepBack => self.game.step().checked_sub(1).map(Command::JumpTo),
            KeyAction::StepForward => {
                let next = self.game.step() + 1;
                (next <= last_row).then_some(Command::JumpTo(next))
            }
            KeyAction::ToggleSort => Some(Command::ToggleSort),
            KeyAction::Ignore => None,
        };

        if let Some(command) = command {
            self.dispatch(command);
        }
    }

    /// Handles a mouse event; only left clicks do anything.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(command) = self.hits.command_at(mouse.column, mouse.row) else {
            return;
        };
        if let Command::Place(pos) = command {
            self.cursor = pos;
        }
        self.dispatch(command);
    }

    /// Executes a command against the game.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) {
        let selected_step = self.game.moves().get(self.selected).map(|entry| entry.step);

        if let Err(e) = self.game.execute(command) {
            warn!(error = %e, "Command rejected");
            return;
        }

        // Keep the list selection on the same step, wherever it now sits.
        let moves = self.game.moves();
        self.selected = match command {
            Command::ToggleSort => selected_step
                .and_then(|step| moves.iter().position(|entry| entry.step == step))
                .unwrap_or(0),
            _ => self.current_row(),
        };
    }

    /// Row of the current step in the displayed move list.
    fn current_row(&self) -> usize {
        self.game
            .moves()
            .iter()
            .position(|entry| entry.is_current)
            .unwrap_or(0)
    }
}

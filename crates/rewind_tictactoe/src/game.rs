//! The game: move history, current step, turn and list order.
//!
//! All mutable state lives here. Winner and status are recomputed from the
//! board at the current step on every query, so jumping back through
//! history never leaves stale results behind.

use super::action::{Command, IgnoreReason, MoveOutcome};
use super::error::TimelineError;
use super::position::Position;
use super::rules::{self, WinningLine};
use super::timeline::Timeline;
use super::types::{Board, Player};
use super::view::{GameView, MoveEntry, SortOrder, Status};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe with time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    timeline: Timeline,
    step: usize,
    to_move: Player,
    sort_order: SortOrder,
}

impl Game {
    /// Creates a new game at the empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game whose move list starts in `sort_order`.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            timeline: Timeline::new(),
            step: 0,
            to_move: Player::X,
            sort_order,
        }
    }

    /// Builds a game by applying `moves` in order.
    ///
    /// Moves that would be ignored interactively are ignored here too.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Position]) -> Self {
        let mut game = Self::new();
        for pos in moves {
            game.apply_move(*pos);
        }
        game
    }

    /// The full move history.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Index of the snapshot being shown.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Player whose turn it is at the current step.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Display order of the move list.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        // `step` never exceeds `last_step`.
        self.timeline.board(self.step).unwrap_or(&Board::EMPTY)
    }

    /// Completed line on the current board.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::check_winner(self.current_board())
    }

    /// Status of the current board.
    #[instrument(skip(self))]
    pub fn status(&self) -> Status {
        let board = self.current_board();
        if let Some(line) = rules::check_winner(board) {
            Status::Winner(line.player)
        } else if rules::is_draw(board) {
            Status::Draw
        } else {
            Status::NextPlayer(self.to_move)
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Ignored when the current board is already won or `pos` is taken.
    /// Otherwise any snapshots after the current step are discarded before
    /// the new one is recorded.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let board = *self.current_board();

        if rules::check_winner(&board).is_some() {
            debug!("Ignoring move: game already won");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !board.is_empty(pos) {
            debug!("Ignoring move: square occupied");
            return MoveOutcome::Ignored(IgnoreReason::Occupied(pos));
        }

        let player = self.to_move;
        self.timeline
            .branch(self.step, board.with_mark(pos, player), pos);
        self.step = self.timeline.last_step();
        self.to_move = player.opponent();

        info!(new_step = self.step, "Move applied");
        MoveOutcome::Placed {
            player,
            position: pos,
            step: self.step,
        }
    }

    /// Shows the board after `step` moves.
    ///
    /// History is left untouched; it is only rewritten by the next move.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), TimelineError> {
        let last = self.timeline.last_step();
        if step > last {
            warn!(last, "Jump target out of range");
            return Err(TimelineError::StepOutOfRange { step, last });
        }

        self.step = step;
        self.to_move = Player::for_step(step);
        debug!(to_move = %self.to_move, "Jumped");
        Ok(())
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self), fields(from = ?self.sort_order))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
    }

    /// Executes one UI command.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> Result<(), TimelineError> {
        match command {
            Command::Place(pos) => {
                self.apply_move(pos);
                Ok(())
            }
            Command::JumpTo(step) => self.jump_to(step),
            Command::ToggleSort => {
                self.toggle_sort_order();
                Ok(())
            }
        }
    }

    /// Move list in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let entries = (0..self.timeline.len())
            .map(|step| MoveEntry::new(step, self.timeline.coordinate(step), self.step));
        match self.sort_order {
            SortOrder::Ascending => entries.collect(),
            SortOrder::Descending => entries.rev().collect(),
        }
    }

    /// Derives everything needed to draw the current frame.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        GameView::new(
            *self.current_board(),
            self.winning_line(),
            self.status(),
            self.moves(),
            self.sort_order,
        )
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

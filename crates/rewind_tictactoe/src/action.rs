//! Commands and their outcomes.
//!
//! Every input the UI can produce becomes a [`Command`]; the game executes
//! it synchronously and the UI redraws from the result.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A user intent aimed at the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Place the current player's mark on a cell.
    Place(Position),
    /// Revisit the board after the given number of moves.
    JumpTo(usize),
    /// Flip the display order of the move list.
    ToggleSort,
}

/// What [`Game::apply_move`](crate::Game::apply_move) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The mark was placed and a new snapshot recorded.
    Placed {
        /// Player who moved.
        player: Player,
        /// Cell that was played.
        position: Position,
        /// Step number of the new snapshot.
        step: usize,
    },
    /// The click was absorbed without touching any state.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// True when a mark was placed.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IgnoreReason {
    /// The board being shown already has a winner.
    #[display("game already won")]
    GameOver,
    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),
}

//! Headless replay: apply moves, print the view as text.

use derive_more::{Display, Error};
use rewind_tictactoe::{Game, Position, SortOrder, TimelineError};
use tracing::{debug, info, instrument};

/// Malformed `replay` input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayInputError {
    /// A token that is not a number.
    #[display("'{token}' is not a cell index")]
    NotANumber {
        /// Offending token.
        token: String,
    },
    /// A number past the last cell.
    #[display("cell {cell} is outside the board (expected 0-8)")]
    OffBoard {
        /// Offending index.
        cell: usize,
    },
}

/// Parses comma-separated cell indices such as `"0, 4,8"`.
#[instrument]
pub fn parse_cells(input: &str) -> Result<Vec<Position>, ReplayInputError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let cell: usize = token.parse().map_err(|_| ReplayInputError::NotANumber {
                token: token.to_string(),
            })?;
            Position::from_index(cell).ok_or(ReplayInputError::OffBoard { cell })
        })
        .collect()
}

/// Plays `cells` in order, optionally jumps, and renders the result.
///
/// Moves the game would ignore are ignored here as well.
#[instrument(skip(cells), fields(count = cells.len()))]
pub fn replay(
    cells: &[Position],
    jump: Option<usize>,
    sort_order: SortOrder,
) -> Result<String, TimelineError> {
    let mut game = Game::with_sort_order(sort_order);
    for pos in cells {
        let outcome = game.apply_move(*pos);
        debug!(?outcome, "Replayed move");
    }
    if let Some(step) = jump {
        game.jump_to(step)?;
    }
    info!(step = game.step(), status = %game.status(), "Replay finished");
    Ok(game.view().to_text())
}

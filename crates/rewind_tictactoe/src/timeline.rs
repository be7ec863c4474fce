//! Single-branch move history.
//!
//! Snapshot `k` is the board after `k` moves; snapshot 0 is always the empty
//! board. The coordinate log runs parallel to the snapshots (minus the first)
//! and records the cell played to reach each one.

use super::position::Position;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board snapshots plus the cells played between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    snapshots: Vec<Board>,
    coordinates: Vec<Position>,
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            coordinates: Vec::new(),
        }
    }

    /// Number of snapshots, including the empty starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Index of the newest snapshot.
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Returns the board after `step` moves.
    pub fn board(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// Returns the cell played to reach `step`. Step 0 has none.
    pub fn coordinate(&self, step: usize) -> Option<Position> {
        step.checked_sub(1)
            .and_then(|idx| self.coordinates.get(idx))
            .copied()
    }

    /// All played cells, oldest first.
    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }

    /// Records `board` as the successor of `from_step`, reached by playing
    /// `pos`. Everything after `from_step` is discarded first.
    #[instrument(skip(self, board))]
    pub(crate) fn branch(&mut self, from_step: usize, board: Board, pos: Position) {
        let discarded = self.last_step().saturating_sub(from_step);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(from_step + 1);
        self.coordinates.truncate(from_step);
        self.snapshots.push(board);
        self.coordinates.push(pos);
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

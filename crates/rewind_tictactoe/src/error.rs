//! Error types for the game timeline.

use derive_more::{Display, Error};

/// Errors raised by navigating the move history.
///
/// Placing a mark never fails: an illegal placement is ignored and
/// reported through [`MoveOutcome`](crate::MoveOutcome) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TimelineError {
    /// The requested step lies past the end of the history.
    #[display("Step {step} is out of range (last step is {last})")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Index of the newest snapshot.
        last: usize,
    },
}

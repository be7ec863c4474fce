//! Rewind tic-tac-toe - game logic with time travel
//!
//! A two-player tic-tac-toe whose every position stays reachable. The
//! [`Game`] keeps one linear history of board snapshots; jumping to an
//! earlier step and then moving rewrites the future from that point.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Position, Status, Player};
//!
//! let mut game = Game::new();
//! game.apply_move(Position::Center);
//! game.apply_move(Position::TopLeft);
//! game.jump_to(1).unwrap();
//! assert_eq!(game.status(), Status::NextPlayer(Player::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod position;
pub mod rules;
mod timeline;
mod types;
mod view;

pub use action::{Command, IgnoreReason, MoveOutcome};
pub use error::TimelineError;
pub use game::Game;
pub use position::Position;
pub use rules::{WinningLine, check_winner};
pub use timeline::Timeline;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry, SortOrder, Status};

//! Rewind TUI library - terminal front end for rewind tic-tac-toe
//!
//! # Architecture
//!
//! - **Config**: TOML startup settings ([`RewindConfig`])
//! - **CLI**: `play` (interactive) and `replay` (headless) commands
//! - **TUI**: event loop, input mapping, and the square/board/game renderers
//! - **Replay**: applies a move list and prints the view as text

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod logging;
mod replay;
pub mod tui;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, RewindConfig};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{ReplayInputError, parse_cells, replay};

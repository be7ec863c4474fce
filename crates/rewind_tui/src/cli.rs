//! Command-line interface for rewind.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a move list you can travel back through
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Two-player tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Open with the move list newest-first
        #[arg(long)]
        descending: bool,
    },

    /// Apply a sequence of moves and print the resulting view
    Replay {
        /// Comma-separated cell indices, 0-8 in row-major order
        cells: String,

        /// Jump to this step before printing
        #[arg(long)]
        jump: Option<usize>,

        /// Print the move list newest-first
        #[arg(long)]
        descending: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { descending: false }
    }
}

//! Rewind - unified CLI
//!
//! Play tic-tac-toe in the terminal, or replay a move list headlessly.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tictactoe::SortOrder;
use rewind_tui::cli::{Cli, Command};
use rewind_tui::{RewindConfig, init_stderr_logging, parse_cells, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play { descending } => run_play(config, descending),
        Command::Replay {
            cells,
            jump,
            descending,
        } => run_replay(&config, &cells, jump, descending),
    }
}

/// Run the interactive terminal game
fn run_play(config: RewindConfig, descending: bool) -> Result<()> {
    let config = if descending {
        config.with_initial_sort(SortOrder::Descending)
    } else {
        config
    };
    tui::run_tui(&config)
}

/// Replay a move list and print the resulting view
fn run_replay(
    config: &RewindConfig,
    cells: &str,
    jump: Option<usize>,
    descending: bool,
) -> Result<()> {
    init_stderr_logging(config);
    info!(cells, "Replaying moves");

    let cells = parse_cells(cells).context("Invalid move list")?;
    let order = if descending {
        SortOrder::Descending
    } else {
        *config.initial_sort()
    };
    let text = replay(&cells, jump, order).context("Replay failed")?;
    print!("{text}");
    Ok(())
}

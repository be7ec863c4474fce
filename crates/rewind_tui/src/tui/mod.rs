//! Terminal UI for rewind tic-tac-toe.

pub mod app;
pub mod hit;
pub mod input;
pub mod ui;

use crate::config::RewindConfig;
use crate::logging::init_file_logging;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::{Backend, CrosstermBackend}};
use rewind_tictactoe::Game;
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

pub use app::App;
pub use hit::HitMap;
pub use ui::Theme;

/// Runs the interactive game until the user quits.
pub fn run_tui(config: &RewindConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    init_file_logging(config)?;
    let theme = Theme::from_config(config)?;

    info!(initial_sort = ?config.initial_sort(), mouse = *config.mouse(), "Starting rewind TUI");

    let mut terminal = setup_terminal(*config.mouse())?;

    let mut app = App::new(Game::with_sort_order(*config.initial_sort()), theme);
    let res = run_app(&mut terminal, &mut app);

    let restored = restore_terminal(&mut terminal);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(step = app.game().step(), status = %app.game().status(), "Leaving rewind TUI");
    res.and(restored)
}

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen.
///
/// If any later step fails, raw mode and the alternate screen are undone
/// before the error is returned.
fn setup_terminal(mouse: bool) -> Result<CrosstermTerminal> {
    enable_raw_mode()?;
    enter_or_rollback(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            if mouse {
                execute!(stdout, EnableMouseCapture)?;
            }
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        },
    )
}

/// Runs `enter`; on failure runs `rollback` and returns the original error.
pub(crate) fn enter_or_rollback<T>(
    enter: impl FnOnce() -> Result<T>,
    rollback: impl FnOnce(),
) -> Result<T> {
    let entered = enter();
    if let Err(err) = &entered {
        error!(error = ?err, "Terminal setup failed, restoring");
        rollback();
    }
    entered
}

/// Runs every restore step, then reports the first failure.
fn restore_terminal(terminal: &mut CrosstermTerminal) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let cursor = terminal.show_cursor();
    first_failure([raw, screen, cursor])?;
    Ok(())
}

/// First error among already-attempted steps.
pub(crate) fn first_failure(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().collect()
}

/// Draw, wait for one input event, handle it, repeat.
#[instrument(skip_all)]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| app.draw(f))?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}

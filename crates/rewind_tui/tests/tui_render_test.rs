//! Rendering and click-through tests on an in-memory terminal.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use rewind_tictactoe::{Command, Game, Player, Position, SortOrder, Square, Status};
use rewind_tui::tui::{App, Theme};

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).expect("test backend")
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
    terminal.draw(|f| app.draw(f)).expect("draw");
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn region_of(app: &App, command: Command) -> Rect {
    app.hits()
        .regions()
        .iter()
        .find(|(_, c)| *c == command)
        .map(|(area, _)| *area)
        .unwrap_or_else(|| panic!("no region for {command:?}"))
}

fn click(app: &mut App, area: Rect) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: area.x + area.width / 2,
        row: area.y + area.height / 2,
        modifiers: KeyModifiers::NONE,
    });
}

#[test]
fn test_initial_screen_shows_status_list_and_sort_control() {
    let mut terminal = terminal();
    let mut app = App::new(Game::new(), Theme::default());
    let screen = draw(&mut terminal, &mut app);

    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to game start"));
    assert!(screen.contains("Sort by: Descending"));
    assert!(!screen.contains("Go to move #1"));
}

#[test]
fn test_every_cell_has_a_click_region() {
    let mut terminal = terminal();
    let mut app = App::new(Game::new(), Theme::default());
    draw(&mut terminal, &mut app);

    for pos in Position::ALL {
        let area = region_of(&app, Command::Place(pos));
        assert_eq!(
            app.hits().command_at(area.x, area.y),
            Some(Command::Place(pos))
        );
    }
}

#[test]
fn test_clicking_cells_plays_and_lists_moves() {
    let mut terminal = terminal();
    let mut app = App::new(Game::new(), Theme::default());
    draw(&mut terminal, &mut app);

    let area = region_of(&app, Command::Place(Position::Center));
    click(&mut app, area);
    let screen = draw(&mut terminal, &mut app);
    assert_eq!(
        app.game().current_board().get(Position::Center),
        Square::Occupied(Player::X)
    );
    assert!(screen.contains("Next player: O"));
    assert!(screen.contains("Go to move #1 [2, 2]"));

    // Same cell again: absorbed.
    let before = app.game().clone();
    let area = region_of(&app, Command::Place(Position::Center));
    click(&mut app, area);
    assert_eq!(app.game(), &before);
}

#[test]
fn test_clicking_history_and_sort_controls() {
    let mut terminal = terminal();
    let game = Game::replay(&[Position::TopLeft, Position::Center, Position::BottomRight]);
    let mut app = App::new(game, Theme::default());
    draw(&mut terminal, &mut app);

    let area = region_of(&app, Command::JumpTo(1));
    click(&mut app, area);
    assert_eq!(app.game().step(), 1);
    assert_eq!(app.game().timeline().len(), 4);
    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains("Next player: O"));

    let area = region_of(&app, Command::ToggleSort);
    click(&mut app, area);
    assert_eq!(app.game().sort_order(), SortOrder::Descending);
    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains("Sort by: Ascending"));
    let newest = screen.find("Go to move #3").expect("listed");
    let oldest = screen.find("Go to game start").expect("listed");
    assert!(newest < oldest);
    assert!(screen.contains("Go to move #3 [3, 3]"));
}

#[test]
fn test_winning_board_reports_winner() {
    let mut terminal = terminal();
    let game = Game::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
        Position::BottomRight,
    ]);
    assert_eq!(game.status(), Status::Winner(Player::X));
    let mut app = App::new(game, Theme::default());
    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains("Winner: X"));

    let before = app.game().clone();
    let area = region_of(&app, Command::Place(Position::BottomLeft));
    click(&mut app, area);
    assert_eq!(app.game(), &before);
}

#[test]
fn test_right_click_does_nothing() {
    let mut terminal = terminal();
    let mut app = App::new(Game::new(), Theme::default());
    draw(&mut terminal, &mut app);
    let area = region_of(&app, Command::Place(Position::TopLeft));
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: area.x,
        row: area.y,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.game().timeline().len(), 1);
}

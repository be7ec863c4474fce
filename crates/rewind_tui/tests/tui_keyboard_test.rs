//! Keyboard-driven play through the application state.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rewind_tictactoe::{Game, Player, Position, SortOrder, Square, Status};
use rewind_tui::tui::input::Focus;
use rewind_tui::tui::{App, Theme};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn app() -> App {
    App::new(Game::new(), Theme::default())
}

#[test]
fn test_digits_play_and_win() {
    let mut app = app();
    for key in ['1', '2', '4', '5', '7'] {
        press(&mut app, KeyCode::Char(key));
    }
    assert_eq!(app.game().status(), Status::Winner(Player::X));

    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.game().timeline().len(), 6);
    assert_eq!(app.cursor(), Position::BottomRight);
}

#[test]
fn test_arrow_cursor_and_enter_place() {
    let mut app = app();
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.cursor(), Position::TopLeft);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.game().current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_bracket_keys_step_through_history() {
    let mut app = app();
    for key in ['5', '1', '9'] {
        press(&mut app, KeyCode::Char(key));
    }
    press(&mut app, KeyCode::Char('['));
    press(&mut app, KeyCode::Char('['));
    assert_eq!(app.game().step(), 1);
    assert_eq!(app.game().to_move(), Player::O);

    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.game().step(), 2);

    press(&mut app, KeyCode::Char(']'));
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.game().step(), 3);

    for _ in 0..5 {
        press(&mut app, KeyCode::Char('['));
    }
    assert_eq!(app.game().step(), 0);
}

#[test]
fn test_history_focus_selects_and_jumps() {
    let mut app = app();
    for key in ['5', '1', '9'] {
        press(&mut app, KeyCode::Char(key));
    }
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::History);
    assert_eq!(app.selected(), 3);

    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.game().step(), 1);

    // Moving from the past discards moves 2 and 3.
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.game().timeline().len(), 3);
    assert_eq!(
        app.game().current_board().get(Position::TopRight),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_sort_toggle_keeps_selection_on_same_step() {
    let mut app = app();
    for key in ['5', '1'] {
        press(&mut app, KeyCode::Char(key));
    }
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected(), 1);

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.game().sort_order(), SortOrder::Descending);
    let steps: Vec<usize> = app.game().moves().iter().map(|m| m.step).collect();
    assert_eq!(steps, vec![2, 1, 0]);
    assert_eq!(app.game().moves()[app.selected()].step, 1);
}

#[test]
fn test_release_events_are_ignored() {
    let mut app = app();
    let mut key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    app.handle_key(key);
    assert_eq!(app.game().timeline().len(), 1);
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

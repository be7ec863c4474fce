//! End-to-end scenarios for the time-travel game.

use rewind_tictactoe::{
    Command, Game, IgnoreReason, MoveOutcome, Player, Position, SortOrder, Square, Status,
};

fn cells(indices: &[usize]) -> Vec<Position> {
    indices
        .iter()
        .map(|&i| Position::from_index(i).expect("valid index"))
        .collect()
}

#[test]
fn test_diagonal_win_reports_winner_and_line() {
    // X: 0, 4, 8 - O: 1, 2
    let game = Game::replay(&cells(&[0, 1, 4, 2, 8]));
    let line = game.winning_line().expect("X completes the diagonal");
    assert_eq!(line.player, Player::X);
    assert_eq!(
        line.cells,
        [Position::TopLeft, Position::Center, Position::BottomRight]
    );
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    // X: 0, 1, 5, 6, 8 - O: 2, 3, 4, 7
    let game = Game::replay(&cells(&[0, 2, 1, 3, 5, 4, 6, 7, 8]));
    assert_eq!(game.timeline().len(), 10);
    assert!(game.winning_line().is_none());
    assert_eq!(game.status(), Status::Draw);
    assert_eq!(game.status().to_string(), "No One Wins");
}

#[test]
fn test_click_on_filled_cell_after_three_moves_changes_nothing() {
    let mut game = Game::replay(&cells(&[4, 0, 8]));
    let before = game.clone();
    let outcome = game.apply_move(Position::TopLeft);
    assert_eq!(
        outcome,
        MoveOutcome::Ignored(IgnoreReason::Occupied(Position::TopLeft))
    );
    assert_eq!(game, before);
}

#[test]
fn test_jump_then_move_rewrites_the_future() {
    let mut game = Game::replay(&cells(&[0, 4, 8, 1, 2]));
    let old_third = *game.timeline().board(3).expect("step 3 exists");

    game.jump_to(2).expect("in range");
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.timeline().len(), 6);

    game.apply_move(Position::BottomLeft);
    assert_eq!(game.timeline().len(), 4);
    assert_eq!(game.step(), 3);
    assert_ne!(game.timeline().board(3), Some(&old_third));
    assert_eq!(
        game.current_board().get(Position::BottomLeft),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_locations_survive_sort_toggle() {
    let mut game = Game::replay(&cells(&[0, 4, 7]));
    let ascending = game.moves();
    let locations: Vec<_> = ascending.iter().map(|m| m.location()).collect();
    assert_eq!(
        locations,
        vec![
            None,
            Some("[1, 1]".to_string()),
            Some("[2, 2]".to_string()),
            Some("[3, 2]".to_string()),
        ]
    );

    game.execute(Command::ToggleSort).expect("toggle");
    let descending = game.moves();
    assert_eq!(descending.first().map(|m| m.step), Some(3));
    assert_eq!(descending[0].location().as_deref(), Some("[3, 2]"));
    assert_eq!(game.view().sort_label(), "Sort by: Ascending");

    game.execute(Command::ToggleSort).expect("toggle");
    assert_eq!(game.moves(), ascending);
    assert_eq!(game.sort_order(), SortOrder::Ascending);
}

#[test]
fn test_view_marks_current_step_and_winning_cells() {
    let mut game = Game::replay(&cells(&[0, 3, 1, 4, 2]));
    let view = game.view();
    assert!(view.is_winning(Position::TopCenter));
    assert!(!view.is_winning(Position::MiddleLeft));
    let current: Vec<_> = view.moves().iter().filter(|m| m.is_current).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].step, 5);

    game.jump_to(1).expect("in range");
    let view = game.view();
    assert!(view.winning_line().is_none());
    assert_eq!(view.square(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(view.square(Position::MiddleLeft), Square::Empty);
    assert!(view.moves()[1].is_current);
    // Later steps are still listed until the next move rewrites them.
    assert_eq!(view.moves().len(), 6);
}

#[test]
fn test_text_view_lists_moves_with_locations() {
    let game = Game::replay(&cells(&[4]));
    let text = game.view().to_text();
    assert!(text.contains("Next player: O"));
    assert!(text.contains("Sort by: Descending"));
    assert!(text.contains("  0. Go to game start"));
    assert!(text.contains("> 1. Go to move #1 [2, 2]"));
}

//! Click regions registered while drawing.
//!
//! Every clickable widget records the area it was drawn into together with
//! the command a left click there produces. The map is rebuilt each frame.

use ratatui::layout::{self, Rect};
use rewind_tictactoe::Command;

/// Screen areas paired with the command they emit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<(Rect, Command)>,
}

impl HitMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that clicking inside `area` emits `command`.
    pub fn register(&mut self, area: Rect, command: Command) {
        if !area.is_empty() {
            self.regions.push((area, command));
        }
    }

    /// Command for a click at terminal cell (`column`, `row`).
    ///
    /// Later registrations win where regions overlap.
    pub fn command_at(&self, column: u16, row: u16) -> Option<Command> {
        let point = layout::Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(point))
            .map(|(_, command)| *command)
    }

    /// All registered regions in drawing order.
    pub fn regions(&self) -> &[(Rect, Command)] {
        &self.regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::Position;

    #[test]
    fn test_command_at_finds_enclosing_region() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(0, 0, 4, 2), Command::Place(Position::TopLeft));
        hits.register(Rect::new(0, 5, 10, 1), Command::ToggleSort);

        assert_eq!(hits.command_at(3, 1), Some(Command::Place(Position::TopLeft)));
        assert_eq!(hits.command_at(4, 1), None);
        assert_eq!(hits.command_at(9, 5), Some(Command::ToggleSort));
    }

    #[test]
    fn test_empty_areas_are_not_registered() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(2, 2, 0, 3), Command::JumpTo(0));
        assert!(hits.regions().is_empty());
    }
}

//! Mark colours.

use crate::config::{ConfigError, RewindConfig};
use ratatui::style::{Color, Modifier, Style};
use rewind_tictactoe::{Player, Square};

/// Colours used for the two marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    x: Color,
    o: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
        }
    }
}

impl Theme {
    /// Parses the colour names from `config`.
    pub fn from_config(config: &RewindConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            x: parse_color(config.x_color())?,
            o: parse_color(config.o_color())?,
        })
    }

    /// Style for a square's mark.
    pub fn square_style(&self, square: Square) -> Style {
        match square {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(player) => Style::default()
                .fg(self.color(player))
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Colour of `player`'s mark.
    pub fn color(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

fn parse_color(name: &str) -> Result<Color, ConfigError> {
    name.parse::<Color>()
        .map_err(|_| ConfigError::new(format!("Unknown colour '{}'", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_gives_default_theme() {
        let theme = Theme::from_config(&RewindConfig::default()).expect("valid colours");
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_unknown_colour_is_rejected() {
        let config = RewindConfig::default().with_o_color("not-a-colour".to_string());
        let err = Theme::from_config(&config).expect_err("bad colour");
        assert!(err.message.contains("not-a-colour"));
    }
}

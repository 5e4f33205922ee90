//! Theme and color definitions for the TUI dashboard

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the dashboard
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color
    pub border: Color,
    /// Title color
    pub title: Color,
    /// Improvement color (green)
    pub up: Color,
    /// Decline color (red)
    pub down: Color,
    /// Composite score accent
    pub accent: Color,
    /// Highlight color (yellow)
    pub highlight: Color,
    /// Inactive/dim color
    pub inactive: Color,
    /// Normal text color
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Cyan,
            title: Color::Cyan,
            up: Color::Green,
            down: Color::Red,
            accent: Color::Blue,
            highlight: Color::Yellow,
            inactive: Color::DarkGray,
            text: Color::White,
        }
    }
}

impl Theme {
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn up_style(&self) -> Style {
        Style::default().fg(self.up)
    }

    pub fn down_style(&self) -> Style {
        Style::default().fg(self.down)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    pub fn inactive_style(&self) -> Style {
        Style::default().fg(self.inactive)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Green for improvement, red for decline.
    pub fn delta_style(&self, improved: bool) -> Style {
        if improved {
            self.up_style()
        } else {
            self.down_style()
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

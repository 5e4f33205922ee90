//! Terminal User Interface module
//!
//! Provides an interactive dashboard for browsing composite rankings.

pub mod app;
pub mod event;
pub mod runner;
pub mod theme;
pub mod ui;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use app::DashboardApp;
pub use event::{AppEvent, KeyAction};
pub use runner::{run_dashboard, DashboardConfig, DashboardRunner};
pub use theme::Theme;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal mode
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

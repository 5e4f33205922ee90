//! Main UI rendering logic
//!
//! Orchestrates the layout and renders all widgets.

use ratatui::{
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::DashboardApp;
use crate::tui::theme::THEME;
use crate::tui::widgets;

/// Render the entire UI
pub fn render(f: &mut Frame, app: &DashboardApp) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Hero / title bar
        Constraint::Length(4), // Controls panel
        Constraint::Min(8),    // Rankings table (fills remaining)
        Constraint::Length(1), // Footer status bar
    ])
    .split(f.area());

    render_hero(f, chunks[0]);
    widgets::render_controls(f, chunks[1], app);
    widgets::render_table(f, chunks[2], app);
    widgets::render_footer(f, chunks[3], app);

    // Overlays
    if app.show_help {
        widgets::render_help(f, f.area());
    }
    if app.column_picker.is_some() {
        widgets::render_column_picker(f, f.area(), app);
    }
}

fn render_hero(f: &mut Frame, area: ratatui::layout::Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(THEME.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(" COURTSIDE ", THEME.title_style()),
        Span::styled(
            "· Score = average rank across PER, WS, WS/48, BPM, VORP · lower is better",
            THEME.inactive_style(),
        ),
    ]);
    f.render_widget(Paragraph::new(line), inner);
}

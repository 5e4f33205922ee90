//! Column picker overlay.
//!
//! Space/Enter toggles the selected column; locked columns (rank,
//! player) are shown dimmed and cannot be turned off.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::prefs::ColumnKey;
use crate::tui::app::DashboardApp;
use crate::tui::theme::THEME;
use crate::tui::widgets::centered_rect;

/// Render the column picker overlay
pub fn render_column_picker(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let Some(selected) = app.column_picker else {
        return;
    };

    let rect = centered_rect(36, ColumnKey::ALL.len() as u16 + 3, area);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .title(" COLUMNS ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());

    let mut lines = Vec::with_capacity(ColumnKey::ALL.len() + 1);
    for (idx, key) in ColumnKey::ALL.iter().enumerate() {
        let mark = if app.columns.is_visible(*key) { "[x]" } else { "[ ]" };
        let cursor = if idx == selected { "▸ " } else { "  " };

        let style = if key.is_locked() {
            THEME.inactive_style()
        } else if idx == selected {
            THEME.highlight_style()
        } else {
            THEME.text_style()
        };

        let suffix = if key.is_locked() { "  (always on)" } else { "" };
        lines.push(Line::from(Span::styled(
            format!("{}{} {}{}", cursor, mark, key.label(), suffix),
            style,
        )));
    }
    lines.push(Line::from(Span::styled(
        "  space toggle · esc close",
        THEME.inactive_style(),
    )));

    f.render_widget(Paragraph::new(lines).block(block), rect);
}

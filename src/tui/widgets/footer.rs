//! Footer status bar widget

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::DashboardApp;
use crate::tui::theme::THEME;

/// Render the footer status bar
pub fn render_footer(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let mut spans = vec![
        Span::styled(" /", THEME.highlight_style()),
        Span::raw(" search  "),
        Span::styled("f", THEME.highlight_style()),
        Span::raw(" filter  "),
        Span::styled("c", THEME.highlight_style()),
        Span::raw(" columns  "),
        Span::styled("u", THEME.highlight_style()),
        Span::raw(" qualified  "),
        Span::styled("d", THEME.highlight_style()),
        Span::raw(" density  "),
        Span::styled("[/]", THEME.highlight_style()),
        Span::raw(" season  "),
        Span::styled("r", THEME.highlight_style()),
        Span::raw(" reload  "),
        Span::styled("x", THEME.highlight_style()),
        Span::raw(" reset  "),
        Span::styled("?", THEME.highlight_style()),
        Span::raw(" help  "),
        Span::styled("q", THEME.highlight_style()),
        Span::raw(" quit  "),
    ];

    if app.loading {
        spans.push(Span::styled("[LOADING]", THEME.highlight_style()));
    }

    if let Some(updated) = app.last_updated {
        spans.push(Span::styled(
            format!("  updated {}", updated.format("%Y-%m-%d %H:%M UTC")),
            THEME.inactive_style(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

//! Controls panel: season, search/filter entry, active filter summary.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::season_label;
use crate::tui::app::DashboardApp;
use crate::tui::theme::THEME;

/// Render the controls panel above the table
pub fn render_controls(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(THEME.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut first = vec![
        Span::raw(" Season: "),
        Span::styled(season_label(app.season()), THEME.highlight_style()),
        Span::raw("   Qualified only: "),
        if app.filters.qualified_only {
            Span::styled("ON", THEME.up_style())
        } else {
            Span::styled("OFF", THEME.inactive_style())
        },
        Span::raw("   Density: "),
        Span::styled(app.density.as_str(), THEME.text_style()),
        Span::raw("   "),
    ];

    if app.search_mode {
        first.push(Span::styled("Search: ", THEME.header_style()));
        first.push(Span::styled(
            format!("{}▏", app.search),
            THEME.highlight_style(),
        ));
    } else if app.filter_mode {
        first.push(Span::styled("Filter: ", THEME.header_style()));
        first.push(Span::styled(
            format!("{}▏", app.filter_input),
            THEME.highlight_style(),
        ));
        first.push(Span::styled(
            "  (e.g. min >= 1000, gp between 10 20, clear)",
            THEME.inactive_style(),
        ));
    } else if !app.search.is_empty() {
        first.push(Span::raw("Search: "));
        first.push(Span::styled(app.search.clone(), THEME.highlight_style()));
    }

    let mut second = vec![Span::raw(" ")];
    second.push(Span::styled(
        format!("{} of {} players", app.filtered.len(), app.players.len()),
        THEME.text_style(),
    ));

    let summaries: Vec<String> = app
        .filters
        .conditions()
        .map(|(field, cond)| format!("{} {}", field.label(), cond.describe()))
        .collect();
    if !summaries.is_empty() {
        second.push(Span::raw("   Filters: "));
        second.push(Span::styled(summaries.join(", "), THEME.highlight_style()));
    }

    // Shareable filter state, same parameters a bookmarked URL carries.
    let query = app.query_string();
    if !query.is_empty() {
        second.push(Span::raw("   ?"));
        second.push(Span::styled(query, THEME.inactive_style()));
    }

    let lines = vec![Line::from(first), Line::from(second)];
    f.render_widget(Paragraph::new(lines), inner);
}

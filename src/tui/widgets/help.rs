//! Help overlay.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::theme::THEME;
use crate::tui::widgets::centered_rect;

const BINDINGS: &[(&str, &str)] = &[
    ("/", "search players, teams, positions"),
    ("f", "edit a numeric filter (e.g. min >= 1000)"),
    ("c", "column picker"),
    ("u", "toggle qualified-only"),
    ("d", "toggle density (comfortable/compact)"),
    ("[ / ]", "previous / next season"),
    ("r", "reload current season"),
    ("x", "reset search and filters"),
    ("j / k", "scroll"),
    ("g", "scroll to top"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Render the help overlay
pub fn render_help(f: &mut Frame, area: Rect) {
    let rect = centered_rect(52, BINDINGS.len() as u16 + 4, area);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .title(" HELP ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());

    let mut lines = vec![Line::default()];
    for (key, desc) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<8}", key), THEME.highlight_style()),
            Span::raw(*desc),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block), rect);
}

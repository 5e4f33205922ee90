//! Rankings table widget.
//!
//! Renders the filtered player list with whatever columns are visible,
//! scrolled to the app's offset. A fetch error or loading state replaces
//! the table wholesale.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::domain::{Player, TrendDirection};
use crate::prefs::{ColumnKey, Density};
use crate::tui::app::DashboardApp;
use crate::tui::theme::THEME;

/// Render the rankings table panel
pub fn render_table(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default()
        .title(" RANKINGS ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());

    let inner = block.inner(area);
    f.render_widget(block, area);

    if let Some(error) = &app.error {
        let msg = Paragraph::new(vec![
            Line::from(Span::styled(format!("Error: {}", error), THEME.down_style())),
            Line::from(Span::styled(
                "Press r to retry once the backend is reachable",
                THEME.inactive_style(),
            )),
        ]);
        f.render_widget(msg, inner);
        return;
    }

    if app.loading {
        let msg = Paragraph::new("Loading rankings...").style(THEME.inactive_style());
        f.render_widget(msg, inner);
        return;
    }

    if app.filtered.is_empty() {
        let msg = Paragraph::new("No players match the current filters")
            .style(THEME.inactive_style());
        f.render_widget(msg, inner);
        return;
    }

    let columns = app.columns.visible_columns();

    // Header line
    let header = Line::from(
        columns
            .iter()
            .map(|key| {
                Span::styled(
                    pad(key.label(), column_width(*key)),
                    THEME.header_style(),
                )
            })
            .collect::<Vec<_>>(),
    );

    let header_height = 1;
    let row_height = match app.density {
        Density::Comfortable => 2,
        Density::Compact => 1,
    };
    let visible_rows = (inner.height as usize).saturating_sub(header_height) / row_height;

    let start = app.scroll_offset;
    let end = (start + visible_rows).min(app.filtered.len());

    let mut lines: Vec<Line> = vec![header];
    for player in &app.filtered[start..end] {
        lines.push(render_row(player, &columns));
        if app.density == Density::Comfortable {
            lines.push(Line::default());
        }
    }

    f.render_widget(Paragraph::new(lines), inner);

    if app.filtered.len() > visible_rows {
        let scrollbar = Scrollbar::default().orientation(ScrollbarOrientation::VerticalRight);
        let mut state = ScrollbarState::default()
            .content_length(app.filtered.len())
            .position(app.scroll_offset);
        f.render_stateful_widget(scrollbar, area, &mut state);
    }
}

fn render_row(player: &Player, columns: &[ColumnKey]) -> Line<'static> {
    Line::from(
        columns
            .iter()
            .map(|key| {
                let (text, style) = cell(player, *key);
                Span::styled(pad(&text, column_width(*key)), style)
            })
            .collect::<Vec<_>>(),
    )
}

fn column_width(key: ColumnKey) -> usize {
    match key {
        ColumnKey::Rank => 6,
        ColumnKey::Player => 26,
        ColumnKey::Team => 6,
        ColumnKey::Pos => 5,
        ColumnKey::Score => 8,
        ColumnKey::Per | ColumnKey::Ws | ColumnKey::Ws48 | ColumnKey::Bpm | ColumnKey::Vorp => 8,
        ColumnKey::Gp => 5,
        ColumnKey::Min => 7,
        ColumnKey::DeltaLy => 8,
        ColumnKey::Trend => 9,
        ColumnKey::Qualified => 6,
        ColumnKey::PerRank
        | ColumnKey::WsRank
        | ColumnKey::Ws48Rank
        | ColumnKey::BpmRank
        | ColumnKey::VorpRank => 9,
    }
}

fn cell(player: &Player, key: ColumnKey) -> (String, Style) {
    match key {
        ColumnKey::Rank => (format!("#{}", player.rank), THEME.header_style()),
        ColumnKey::Player => (truncate(&player.player_name, 24), THEME.text_style()),
        ColumnKey::Team => (player.team.clone(), THEME.text_style()),
        ColumnKey::Pos => (player.position.clone(), THEME.text_style()),
        ColumnKey::Score => (fmt1(player.composite_score), THEME.accent_style()),
        ColumnKey::Per => (fmt1(player.per), THEME.text_style()),
        ColumnKey::Ws => (fmt1(player.ws), THEME.text_style()),
        ColumnKey::Ws48 => (fmt3(player.ws48), THEME.text_style()),
        ColumnKey::Bpm => (fmt1(player.bpm), THEME.text_style()),
        ColumnKey::Vorp => (fmt1(player.vorp), THEME.text_style()),
        ColumnKey::Gp => (fmt_count(player.games), THEME.text_style()),
        ColumnKey::Min => (fmt_count(player.minutes), THEME.text_style()),
        ColumnKey::DeltaLy => delta_cell(player),
        ColumnKey::Trend => trend_cell(player),
        ColumnKey::Qualified => {
            if player.qualified {
                ("Yes".to_string(), THEME.up_style())
            } else {
                ("No".to_string(), THEME.inactive_style())
            }
        }
        ColumnKey::PerRank => (fmt_count(player.per_rank), THEME.text_style()),
        ColumnKey::WsRank => (fmt_count(player.ws_rank), THEME.text_style()),
        ColumnKey::Ws48Rank => (fmt_count(player.ws48_rank), THEME.text_style()),
        ColumnKey::BpmRank => (fmt_count(player.bpm_rank), THEME.text_style()),
        ColumnKey::VorpRank => (fmt_count(player.vorp_rank), THEME.text_style()),
    }
}

// Year-over-year movement: positive rank_change = moved up the board.
fn delta_cell(player: &Player) -> (String, Style) {
    if player.trend_direction == TrendDirection::New {
        return ("NEW".to_string(), THEME.highlight_style());
    }
    match player.rank_change {
        n if n > 0 => (format!("▲ +{}", n), THEME.up_style()),
        n if n < 0 => (format!("▼ {}", n), THEME.down_style()),
        _ => ("—".to_string(), THEME.inactive_style()),
    }
}

// Short-term movement on the 7d composite-score delta; a falling score
// is an improvement (lower is better).
fn trend_cell(player: &Player) -> (String, Style) {
    match player.trend_7d {
        None => ("—".to_string(), THEME.inactive_style()),
        Some(d) if d < 0.0 => (format!("▲ {:.1}", d.abs()), THEME.up_style()),
        Some(d) if d > 0.0 => (format!("▼ {:.1}", d.abs()), THEME.down_style()),
        Some(_) => ("—".to_string(), THEME.inactive_style()),
    }
}

fn fmt1(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".to_string(), |v| format!("{:.1}", v))
}

fn fmt3(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".to_string(), |v| format!("{:.3}", v))
}

fn fmt_count(v: Option<u32>) -> String {
    v.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

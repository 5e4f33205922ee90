//! Domain types for the rankings dashboard.

pub mod player;
pub mod stats;

pub use player::{Player, RankingsResponse, TrendDirection};
pub use stats::StatField;

/// Display form of a season's ending year: 2025 -> "2024-25".
pub fn season_label(season: u16) -> String {
    format!("{}-{:02}", season.saturating_sub(1), season % 100)
}

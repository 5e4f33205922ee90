pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod filters;
pub mod prefs;
pub mod tui;

pub use adapters::RankingsClient;
pub use config::AppConfig;
pub use domain::{Player, RankingsResponse, StatField, TrendDirection};
pub use error::{CourtsideError, Result};
pub use filters::{
    evaluate, filter_players, from_query_string, to_query_string, Comparator, NumericCondition,
    RankingsFilters,
};
pub use prefs::{ColumnKey, ColumnSet, Density, PrefsStore};

//! Player record and rankings payload as served by the backend.
//!
//! The backend owns the composite-score computation; this module only
//! mirrors its response contract. Every numeric the backend may omit is
//! an explicit `Option` so that missing data can never satisfy a filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Year-over-year movement classification for a player's rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrendDirection {
    Up,
    Down,
    #[default]
    Same,
    /// Newly appeared this season (no previous rank to compare).
    New,
}

/// One ranked player row from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Overall order by composite score (lower score = better rank)
    pub rank: u32,
    pub player_id: u64,
    pub player_name: String,
    pub team: String,
    pub position: String,
    /// Average rank across PER, WS, WS/48, BPM, VORP (lower is better)
    #[serde(default)]
    pub composite_score: Option<f64>,
    #[serde(default)]
    pub per: Option<f64>,
    #[serde(default)]
    pub per_rank: Option<u32>,
    #[serde(default)]
    pub ws: Option<f64>,
    #[serde(default)]
    pub ws_rank: Option<u32>,
    #[serde(default)]
    pub ws48: Option<f64>,
    #[serde(default)]
    pub ws48_rank: Option<u32>,
    #[serde(default)]
    pub bpm: Option<f64>,
    #[serde(default)]
    pub bpm_rank: Option<u32>,
    #[serde(default)]
    pub vorp: Option<f64>,
    #[serde(default)]
    pub vorp_rank: Option<u32>,
    #[serde(default)]
    pub games: Option<u32>,
    #[serde(default)]
    pub minutes: Option<u32>,
    /// Meets the minutes/games threshold used by the model
    #[serde(default)]
    pub qualified: bool,
    // Short-term composite-score deltas
    #[serde(default)]
    pub trend_1d: Option<f64>,
    #[serde(default)]
    pub trend_7d: Option<f64>,
    #[serde(default)]
    pub trend_14d: Option<f64>,
    // Year-over-year comparison fields
    /// Positive = improved vs last season, negative = declined
    #[serde(default)]
    pub rank_change: i32,
    #[serde(default)]
    pub previous_rank: Option<u32>,
    #[serde(default)]
    pub trend_direction: TrendDirection,
}

/// Response envelope for `GET /rankings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingsResponse {
    pub players: Vec<Player>,
    #[serde(default)]
    pub total_count: u32,
    pub season: u16,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

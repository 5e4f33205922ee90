//! Courtside CLI - composite rankings from the terminal
//!
//! Commands:
//! - `courtside dashboard` - Interactive rankings dashboard (default)
//! - `courtside top` - Print the current rankings table and exit

use clap::{Parser, Subcommand};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::adapters::RankingsClient;
use crate::config::AppConfig;
use crate::domain::{season_label, Player, TrendDirection};
use crate::error::Result;
use crate::filters::{filter_players, from_query_string};

/// Courtside - NBA composite ranking dashboard
#[derive(Parser, Debug)]
#[command(name = "courtside")]
#[command(author, version, about = "NBA player rankings with composite advanced metrics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config directory (expects <dir>/default.toml)
    #[arg(long, default_value = "config", global = true)]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive rankings dashboard
    Dashboard {
        /// Season to load on startup (ending year, e.g. 2025 for 2024-25)
        #[arg(short, long)]
        season: Option<u16>,

        /// Run on bundled sample data, no backend required
        #[arg(long)]
        demo: bool,
    },

    /// Print the rankings table and exit
    Top {
        /// Season (ending year)
        #[arg(short, long)]
        season: Option<u16>,

        /// Number of rows to print
        #[arg(short, long, default_value = "25")]
        limit: usize,

        /// Include players below the qualification threshold
        #[arg(long)]
        all: bool,

        /// Substring match on name, team, or position
        #[arg(long)]
        search: Option<String>,

        /// Filter query string, e.g. "min_op=gte&min_val=1000&per_op=gt&per_val=20"
        #[arg(long)]
        filter: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize, Tabled)]
pub struct PlayerRow {
    #[tabled(rename = "#")]
    pub rank: u32,
    #[tabled(rename = "Player")]
    pub player: String,
    #[tabled(rename = "Team")]
    pub team: String,
    #[tabled(rename = "Pos")]
    pub position: String,
    #[tabled(rename = "Score")]
    pub score: String,
    #[tabled(rename = "PER")]
    pub per: String,
    #[tabled(rename = "WS/48")]
    pub ws48: String,
    #[tabled(rename = "BPM")]
    pub bpm: String,
    #[tabled(rename = "VORP")]
    pub vorp: String,
    #[tabled(rename = "GP")]
    pub games: String,
    #[tabled(rename = "Δ LY")]
    pub delta: String,
}

impl From<&Player> for PlayerRow {
    fn from(p: &Player) -> Self {
        Self {
            rank: p.rank,
            player: p.player_name.clone(),
            team: p.team.clone(),
            position: p.position.clone(),
            score: fmt1(p.composite_score),
            per: fmt1(p.per),
            ws48: fmt3(p.ws48),
            bpm: fmt1(p.bpm),
            vorp: fmt1(p.vorp),
            games: p.games.map(|g| g.to_string()).unwrap_or_else(|| "N/A".into()),
            delta: match p.trend_direction {
                TrendDirection::New => "NEW".into(),
                _ if p.rank_change > 0 => format!("+{}", p.rank_change),
                _ if p.rank_change < 0 => p.rank_change.to_string(),
                _ => "—".into(),
            },
        }
    }
}

fn fmt1(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".into(), |v| format!("{:.1}", v))
}

fn fmt3(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".into(), |v| format!("{:.3}", v))
}

/// Fetch and print the rankings table.
#[allow(clippy::too_many_arguments)]
pub async fn show_top(
    config: &AppConfig,
    season: Option<u16>,
    limit: usize,
    all: bool,
    search: Option<&str>,
    filter: Option<&str>,
    json: bool,
) -> Result<()> {
    let season = season.unwrap_or(config.ui.season);
    let client = RankingsClient::new(&config.api.base_url)?;
    let response = client
        .get_rankings(season, false, config.api.limit, 0)
        .await?;

    let mut filters = filter.map(from_query_string).unwrap_or_default();
    if all {
        filters.qualified_only = false;
    }
    let search = search.unwrap_or("");

    let players: Vec<&Player> = filter_players(&response.players, search, &filters)
        .into_iter()
        .take(limit)
        .collect();
    let rows: Vec<PlayerRow> = players.iter().map(|p| PlayerRow::from(*p)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("(no players match)");
    } else {
        println!("{}", Table::new(&rows));
        println!(
            "{} of {} players, season {}",
            rows.len(),
            response.players.len(),
            season_label(season)
        );
    }

    Ok(())
}

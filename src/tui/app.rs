//! Dashboard application state.
//!
//! Holds the fetched player list and every piece of display state; the
//! filtered list is always recomputed from (players, search, filters).

use chrono::{DateTime, Utc};

use crate::domain::{Player, RankingsResponse, StatField, TrendDirection};
use crate::filters::{
    filter_players, to_query_string, Comparator, NumericCondition, RankingsFilters,
};
use crate::prefs::{ColumnKey, ColumnSet, Density};
use tracing::debug;

/// Dashboard application state
pub struct DashboardApp {
    /// Players as fetched (backend rank order)
    pub players: Vec<Player>,
    /// Derived visible subset; recomputed on every input change
    pub filtered: Vec<Player>,
    pub total_count: u32,
    pub last_updated: Option<DateTime<Utc>>,
    /// Free-text search term (live while typing)
    pub search: String,
    pub search_mode: bool,
    /// Filter entry line, e.g. `min >= 1000`
    pub filter_input: String,
    pub filter_mode: bool,
    pub filters: RankingsFilters,
    pub columns: ColumnSet,
    pub density: Density,
    /// Selectable seasons, newest first
    pub seasons: Vec<u16>,
    pub selected_season_idx: usize,
    pub loading: bool,
    /// Terminal fetch error for the current load attempt
    pub error: Option<String>,
    /// Generation counter for in-flight fetches; responses carrying an
    /// older generation are discarded so a stale season can never
    /// overwrite a newer one.
    pub fetch_generation: u64,
    /// Scroll offset into the filtered list
    pub scroll_offset: usize,
    pub running: bool,
    pub show_help: bool,
    /// Column picker overlay: selected row index when open
    pub column_picker: Option<usize>,
    pub last_update: DateTime<Utc>,
}

impl DashboardApp {
    pub fn new(seasons: Vec<u16>, initial_season: u16) -> Self {
        let selected_season_idx = seasons
            .iter()
            .position(|s| *s == initial_season)
            .unwrap_or(0);

        Self {
            players: Vec::new(),
            filtered: Vec::new(),
            total_count: 0,
            last_updated: None,
            search: String::new(),
            search_mode: false,
            filter_input: String::new(),
            filter_mode: false,
            filters: RankingsFilters::default(),
            columns: ColumnSet::default(),
            density: Density::default(),
            seasons,
            selected_season_idx,
            loading: false,
            error: None,
            fetch_generation: 0,
            scroll_offset: 0,
            running: true,
            show_help: false,
            column_picker: None,
            last_update: Utc::now(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn season(&self) -> u16 {
        self.seasons
            .get(self.selected_season_idx)
            .copied()
            .unwrap_or(2025)
    }

    /// Start a new fetch; returns the generation the response must echo.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.loading = true;
        self.error = None;
        self.fetch_generation
    }

    pub fn set_rankings(&mut self, generation: u64, response: RankingsResponse) {
        if generation != self.fetch_generation {
            debug!(
                generation,
                latest = self.fetch_generation,
                "discarding stale rankings response"
            );
            return;
        }
        self.players = response.players;
        self.total_count = response.total_count;
        self.last_updated = response.last_updated;
        self.loading = false;
        self.error = None;
        self.scroll_offset = 0;
        self.last_update = Utc::now();
        self.apply_filters();
    }

    pub fn fail_fetch(&mut self, generation: u64, message: String) {
        if generation != self.fetch_generation {
            debug!(generation, "discarding stale fetch error");
            return;
        }
        self.loading = false;
        self.error = Some(message);
    }

    /// Recompute the visible subset. Pure function of current inputs.
    pub fn apply_filters(&mut self) {
        self.filtered = filter_players(&self.players, &self.search, &self.filters)
            .into_iter()
            .cloned()
            .collect();
        let max = self.filtered.len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(max);
    }

    /// Shareable query string for the current filter set.
    pub fn query_string(&self) -> String {
        to_query_string(&self.filters)
    }

    /// Commit the filter entry line. Incomplete or unparseable input
    /// normalizes to "no condition" rather than an error.
    pub fn commit_filter_input(&mut self) {
        match parse_filter_command(&self.filter_input) {
            FilterEdit::Set(field, cond) => {
                self.filters.set_condition(field, Some(cond));
                self.apply_filters();
            }
            FilterEdit::Clear(field) => {
                self.filters.set_condition(field, None);
                self.apply_filters();
            }
            FilterEdit::ClearAll => {
                self.filters.reset();
                self.apply_filters();
            }
            FilterEdit::Qualified(on) => {
                self.filters.qualified_only = on;
                self.apply_filters();
            }
            FilterEdit::None => {}
        }
        self.filter_input.clear();
        self.filter_mode = false;
    }

    pub fn toggle_qualified(&mut self) {
        self.filters.qualified_only = !self.filters.qualified_only;
        self.apply_filters();
    }

    pub fn clear_filters(&mut self) {
        self.filters.reset();
        self.search.clear();
        self.apply_filters();
    }

    pub fn toggle_density(&mut self) {
        self.density = self.density.toggled();
    }

    pub fn next_season(&mut self) {
        if !self.seasons.is_empty() {
            self.selected_season_idx = (self.selected_season_idx + 1) % self.seasons.len();
        }
    }

    pub fn prev_season(&mut self) {
        if !self.seasons.is_empty() {
            if self.selected_season_idx == 0 {
                self.selected_season_idx = self.seasons.len() - 1;
            } else {
                self.selected_season_idx -= 1;
            }
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.filtered.len().saturating_sub(1) {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ==================== Column picker ====================

    pub fn open_column_picker(&mut self) {
        self.column_picker = Some(0);
    }

    pub fn close_column_picker(&mut self) {
        self.column_picker = None;
    }

    pub fn picker_up(&mut self) {
        if let Some(idx) = self.column_picker {
            self.column_picker = Some(idx.saturating_sub(1));
        }
    }

    pub fn picker_down(&mut self) {
        if let Some(idx) = self.column_picker {
            self.column_picker = Some((idx + 1).min(ColumnKey::ALL.len() - 1));
        }
    }

    /// Toggle the selected column. Returns true if the mapping changed
    /// (locked columns are a no-op) so the caller can re-persist it.
    pub fn picker_toggle(&mut self) -> bool {
        let Some(idx) = self.column_picker else {
            return false;
        };
        let key = ColumnKey::ALL[idx];
        let next = self.columns.toggled(key);
        if next == self.columns {
            return false;
        }
        self.columns = next;
        true
    }

    /// Populate with a handful of fixed rows for `--demo`.
    pub fn with_demo_data(mut self) -> Self {
        let base = Player {
            rank: 0,
            player_id: 0,
            player_name: String::new(),
            team: String::new(),
            position: String::new(),
            composite_score: None,
            per: None,
            per_rank: None,
            ws: None,
            ws_rank: None,
            ws48: None,
            ws48_rank: None,
            bpm: None,
            bpm_rank: None,
            vorp: None,
            vorp_rank: None,
            games: None,
            minutes: None,
            qualified: true,
            trend_1d: None,
            trend_7d: None,
            trend_14d: None,
            rank_change: 0,
            previous_rank: None,
            trend_direction: TrendDirection::Same,
        };

        let rows = [
            ("Nikola Jokic", "DEN", "C", 1.4, 31.1, 0.306, 12.9, 9.1, 70, 2430, 1, TrendDirection::Up),
            ("Shai Gilgeous-Alexander", "OKC", "G", 2.8, 30.2, 0.281, 10.4, 7.8, 75, 2580, 0, TrendDirection::Same),
            ("Giannis Antetokounmpo", "MIL", "F", 3.6, 30.8, 0.248, 9.2, 6.5, 67, 2300, -1, TrendDirection::Down),
            ("Luka Doncic", "DAL", "G", 4.8, 28.9, 0.224, 8.7, 6.1, 61, 2210, 2, TrendDirection::Up),
            ("Victor Wembanyama", "SAS", "C", 6.2, 26.1, 0.201, 7.9, 5.2, 59, 1950, 0, TrendDirection::New),
        ];

        for (i, (name, team, pos, score, per, ws48, bpm, vorp, gp, min, delta, dir)) in
            rows.into_iter().enumerate()
        {
            let mut p = base.clone();
            p.rank = i as u32 + 1;
            p.player_id = i as u64 + 1;
            p.player_name = name.to_string();
            p.team = team.to_string();
            p.position = pos.to_string();
            p.composite_score = Some(score);
            p.per = Some(per);
            p.per_rank = Some(i as u32 + 1);
            p.ws = Some(12.0 - i as f64 * 1.5);
            p.ws_rank = Some(i as u32 + 1);
            p.ws48 = Some(ws48);
            p.ws48_rank = Some(i as u32 + 1);
            p.bpm = Some(bpm);
            p.bpm_rank = Some(i as u32 + 1);
            p.vorp = Some(vorp);
            p.vorp_rank = Some(i as u32 + 1);
            p.games = Some(gp);
            p.minutes = Some(min);
            p.trend_1d = Some(0.0);
            p.trend_7d = Some(-0.2 * (i as f64 + 1.0));
            p.trend_14d = Some(-0.5);
            p.rank_change = delta;
            p.previous_rank = (dir != TrendDirection::New).then(|| (i as i32 + 1 - delta) as u32);
            p.trend_direction = dir;
            self.players.push(p);
        }

        self.total_count = self.players.len() as u32;
        self.last_updated = Some(Utc::now());
        self.apply_filters();
        self
    }
}

/// Result of parsing one filter entry line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterEdit {
    Set(StatField, NumericCondition),
    Clear(StatField),
    ClearAll,
    Qualified(bool),
    /// Unrecognized input; leave the filter set untouched
    None,
}

/// Parse a filter entry line:
/// `<field> <op> <value> [value2]`, `<field> clear`, `<field> -`,
/// `clear`, `qualified on|off`.
///
/// Ops are `> >= = <= < between` or the wire names (`gt`, `gte`, ...).
/// Missing or non-numeric operands make the condition empty, which
/// clears the field instead of erroring.
pub fn parse_filter_command(input: &str) -> FilterEdit {
    let mut parts = input.split_whitespace();
    let Some(head) = parts.next() else {
        return FilterEdit::None;
    };

    if head.eq_ignore_ascii_case("clear") {
        return FilterEdit::ClearAll;
    }
    if head.eq_ignore_ascii_case("qualified") {
        return match parts.next() {
            Some(v) if v.eq_ignore_ascii_case("off") || v.eq_ignore_ascii_case("false") => {
                FilterEdit::Qualified(false)
            }
            _ => FilterEdit::Qualified(true),
        };
    }

    let Some(field) = StatField::from_key(&head.to_lowercase()) else {
        return FilterEdit::None;
    };
    let Some(op_token) = parts.next() else {
        return FilterEdit::Clear(field);
    };
    if op_token == "-" || op_token.eq_ignore_ascii_case("clear") {
        return FilterEdit::Clear(field);
    }
    let Some(op) = comparator_from_token(op_token) else {
        return FilterEdit::None;
    };

    let value = parts.next().and_then(|s| s.parse::<f64>().ok());
    let value2 = parts.next().and_then(|s| s.parse::<f64>().ok());

    match (NumericCondition { op, value, value2 }).normalized() {
        Some(cond) => FilterEdit::Set(field, cond),
        None => FilterEdit::Clear(field),
    }
}

fn comparator_from_token(token: &str) -> Option<Comparator> {
    match token {
        ">" => Some(Comparator::Gt),
        ">=" => Some(Comparator::Gte),
        "=" | "==" => Some(Comparator::Eq),
        "<=" => Some(Comparator::Lte),
        "<" => Some(Comparator::Lt),
        _ => Comparator::from_key(&token.to_lowercase()),
    }
}

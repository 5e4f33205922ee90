//! Event types for the dashboard loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::RankingsResponse;

/// Events delivered to the dashboard loop over the fetch channel.
/// Keyboard input is read directly from crossterm, not routed here.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A rankings fetch resolved. `generation` identifies which request
    /// this answers; stale generations are discarded.
    RankingsLoaded {
        generation: u64,
        response: RankingsResponse,
    },
    /// A rankings fetch failed terminally (no retry).
    FetchFailed { generation: u64, message: String },
}

/// Key action derived from a key event (outside text-entry modes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    ScrollUp,
    ScrollDown,
    ScrollTop,
    Help,
    /// Enter search mode (`/`)
    Search,
    /// Enter filter entry mode (`f`)
    Filter,
    /// Open the column picker (`c`)
    Columns,
    ToggleQualified,
    ToggleDensity,
    NextSeason,
    PrevSeason,
    /// Refetch the current season
    Reload,
    ClearFilters,
    None,
}

impl From<KeyEvent> for KeyAction {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::ScrollDown,
            KeyCode::Char('g') | KeyCode::Home => KeyAction::ScrollTop,
            KeyCode::Char('?') => KeyAction::Help,
            KeyCode::Char('/') => KeyAction::Search,
            KeyCode::Char('f') => KeyAction::Filter,
            KeyCode::Char('c') => KeyAction::Columns,
            KeyCode::Char('u') => KeyAction::ToggleQualified,
            KeyCode::Char('d') => KeyAction::ToggleDensity,
            KeyCode::Char(']') | KeyCode::Char('n') => KeyAction::NextSeason,
            KeyCode::Char('[') | KeyCode::Char('p') => KeyAction::PrevSeason,
            KeyCode::Char('r') => KeyAction::Reload,
            KeyCode::Char('x') => KeyAction::ClearFilters,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

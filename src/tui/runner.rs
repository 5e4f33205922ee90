//! Dashboard runner with live data integration
//!
//! Connects the rankings backend to the TUI dashboard and owns the
//! event loop, including fetch-generation bookkeeping so out-of-order
//! responses for superseded season selections are discarded.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::adapters::RankingsClient;
use crate::config::AppConfig;
use crate::error::{CourtsideError, Result};
use crate::prefs::PrefsStore;
use crate::tui::app::DashboardApp;
use crate::tui::event::{AppEvent, KeyAction};
use crate::tui::{init_terminal, restore_terminal, ui};

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Rankings backend base URL
    pub base_url: String,
    /// Selectable seasons, newest first
    pub seasons: Vec<u16>,
    /// Season loaded on startup
    pub season: u16,
    /// Row limit per fetch
    pub limit: u32,
    /// Run on bundled demo data instead of fetching
    pub demo: bool,
}

impl DashboardConfig {
    pub fn from_app_config(config: &AppConfig, season: Option<u16>, demo: bool) -> Self {
        Self {
            base_url: config.api.base_url.clone(),
            seasons: config.ui.seasons.clone(),
            season: season.unwrap_or(config.ui.season),
            limit: config.api.limit,
            demo,
        }
    }
}

/// Dashboard runner that manages the data source and TUI
pub struct DashboardRunner {
    config: DashboardConfig,
    app: DashboardApp,
    prefs: PrefsStore,
    client: Option<RankingsClient>,
}

impl DashboardRunner {
    pub fn new(config: DashboardConfig, prefs: PrefsStore) -> Result<Self> {
        let mut app = DashboardApp::new(config.seasons.clone(), config.season);
        app.columns = prefs.load_columns();
        app.density = prefs.load_density();

        let client = if config.demo {
            app = app.with_demo_data();
            None
        } else {
            Some(RankingsClient::new(&config.base_url)?)
        };

        Ok(Self {
            config,
            app,
            prefs,
            client,
        })
    }

    /// Run the dashboard event loop until quit
    pub async fn run(mut self) -> Result<()> {
        info!("Starting dashboard...");

        let mut terminal = init_terminal()
            .map_err(|e| CourtsideError::Internal(format!("failed to init terminal: {}", e)))?;

        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

        self.trigger_fetch(&event_tx);

        loop {
            terminal
                .draw(|f| ui::render(f, &self.app))
                .map_err(|e| CourtsideError::Internal(format!("failed to render: {}", e)))?;

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(50)) => {
                    if crossterm::event::poll(Duration::from_millis(0)).unwrap_or(false) {
                        if let Ok(crossterm::event::Event::Key(key)) = crossterm::event::read() {
                            self.handle_key(key, &event_tx);
                        }
                    }
                }
                Some(event) = event_rx.recv() => {
                    self.handle_event(event);
                }
            }

            if !self.app.is_running() {
                break;
            }
        }

        restore_terminal()
            .map_err(|e| CourtsideError::Internal(format!("failed to restore terminal: {}", e)))?;

        info!("Dashboard stopped");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, event_tx: &mpsc::UnboundedSender<AppEvent>) {
        // Overlays and text-entry modes take priority over key actions.
        if self.app.column_picker.is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => {
                    self.app.close_column_picker()
                }
                KeyCode::Up | KeyCode::Char('k') => self.app.picker_up(),
                KeyCode::Down | KeyCode::Char('j') => self.app.picker_down(),
                KeyCode::Char(' ') | KeyCode::Enter => {
                    if self.app.picker_toggle() {
                        if let Err(e) = self.prefs.save_columns(&self.app.columns) {
                            warn!("failed to persist column preferences: {}", e);
                        }
                    }
                }
                _ => {}
            }
            return;
        }

        if self.app.show_help {
            self.app.show_help = false;
            return;
        }

        if self.app.search_mode {
            match key.code {
                KeyCode::Esc => {
                    self.app.search_mode = false;
                    self.app.search.clear();
                    self.app.apply_filters();
                }
                KeyCode::Enter => self.app.search_mode = false,
                KeyCode::Backspace => {
                    self.app.search.pop();
                    self.app.apply_filters();
                }
                KeyCode::Char(c) => {
                    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                        self.app.search.push(c);
                        self.app.apply_filters();
                    }
                }
                _ => {}
            }
            return;
        }

        if self.app.filter_mode {
            match key.code {
                KeyCode::Esc => {
                    self.app.filter_mode = false;
                    self.app.filter_input.clear();
                }
                KeyCode::Enter => self.app.commit_filter_input(),
                KeyCode::Backspace => {
                    self.app.filter_input.pop();
                }
                KeyCode::Char(c) => {
                    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                        self.app.filter_input.push(c);
                    }
                }
                _ => {}
            }
            return;
        }

        match KeyAction::from(key) {
            KeyAction::Quit => self.app.quit(),
            KeyAction::ScrollUp => self.app.scroll_up(),
            KeyAction::ScrollDown => self.app.scroll_down(),
            KeyAction::ScrollTop => self.app.scroll_to_top(),
            KeyAction::Help => self.app.toggle_help(),
            KeyAction::Search => self.app.search_mode = true,
            KeyAction::Filter => {
                self.app.filter_mode = true;
                self.app.filter_input.clear();
            }
            KeyAction::Columns => self.app.open_column_picker(),
            KeyAction::ToggleQualified => self.app.toggle_qualified(),
            KeyAction::ToggleDensity => {
                self.app.toggle_density();
                if let Err(e) = self.prefs.save_density(self.app.density) {
                    warn!("failed to persist density preference: {}", e);
                }
            }
            KeyAction::NextSeason => {
                self.app.next_season();
                self.trigger_fetch(event_tx);
            }
            KeyAction::PrevSeason => {
                self.app.prev_season();
                self.trigger_fetch(event_tx);
            }
            KeyAction::Reload => self.trigger_fetch(event_tx),
            KeyAction::ClearFilters => self.app.clear_filters(),
            KeyAction::None => {}
        }
    }

    /// Kick off a fetch for the currently selected season. A previous
    /// in-flight request is not cancelled; its response will carry an
    /// older generation and be dropped on arrival.
    fn trigger_fetch(&mut self, event_tx: &mpsc::UnboundedSender<AppEvent>) {
        let Some(client) = self.client.clone() else {
            return;
        };
        let generation = self.app.begin_fetch();
        let season = self.app.season();
        let limit = self.config.limit;
        let tx = event_tx.clone();

        tokio::spawn(async move {
            // qualified=false: the qualified-only gate stays client-side.
            match client.get_rankings(season, false, limit, 0).await {
                Ok(response) => {
                    let _ = tx.send(AppEvent::RankingsLoaded {
                        generation,
                        response,
                    });
                }
                Err(e) => {
                    let _ = tx.send(AppEvent::FetchFailed {
                        generation,
                        message: e.to_string(),
                    });
                }
            }
        });
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::RankingsLoaded {
                generation,
                response,
            } => self.app.set_rankings(generation, response),
            AppEvent::FetchFailed {
                generation,
                message,
            } => self.app.fail_fetch(generation, message),
        }
    }
}

/// Run the dashboard from app config
pub async fn run_dashboard(config: DashboardConfig) -> Result<()> {
    let prefs = match PrefsStore::default_location() {
        Ok(store) => store,
        Err(e) => {
            warn!("no config directory, preferences will not persist: {}", e);
            PrefsStore::new(std::env::temp_dir().join("courtside"))
        }
    };

    DashboardRunner::new(config, prefs)?.run().await
}

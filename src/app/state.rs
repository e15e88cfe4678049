use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, error, info, warn};
use tokio::sync::mpsc;

use crate::{
    app::{
        events::{AppEvent, start_clock_task, start_refresh_task},
        settings::{RuntimeSettings, ViewMode, save_runtime_settings},
    },
    cli::Cli,
    data::{LocationQuery, WeatherClients},
    domain::{
        conditions::IconMode,
        i18n::Locale,
        series::{ChartLayer, DisplayLayers},
        snapshot::{SeriesKind, Units, WeatherSnapshot},
    },
    resilience::health::{HealthPolicy, RefreshMetadata},
};

mod input;
mod methods_fetch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Error,
    Quit,
}

/// What a spawned load was asked for; a response is only shown while this
/// still matches the current query, units and language.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub query: LocationQuery,
    pub units: Units,
    pub locale: Locale,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub loading_message: String,
    pub last_error: Option<String>,
    pub status_message: Option<String>,
    pub snapshot: Option<WeatherSnapshot>,
    pub refresh_meta: RefreshMetadata,
    pub settings: RuntimeSettings,
    pub settings_path: Option<PathBuf>,
    pub focus: SeriesKind,
    pub layers: DisplayLayers,
    pub query: LocationQuery,
    pub clients: WeatherClients,
    pub icon_mode: IconMode,
    /// Epoch seconds the derived series are evaluated at.
    pub now: i64,
    pub fetch_in_flight: bool,
    pub in_flight_request: Option<FetchRequest>,
}

impl AppState {
    #[must_use]
    pub fn new(cli: &Cli) -> Self {
        Self::with_settings(cli, RuntimeSettings::from_cli_defaults(cli), None)
    }

    #[must_use]
    pub fn with_settings(
        cli: &Cli,
        settings: RuntimeSettings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        let policy = HealthPolicy::for_refresh_interval(settings.refresh_interval_secs);
        Self {
            mode: AppMode::Loading,
            running: true,
            loading_message: "Initializing...".to_string(),
            last_error: None,
            status_message: None,
            snapshot: None,
            refresh_meta: RefreshMetadata::new(policy),
            settings,
            settings_path,
            focus: SeriesKind::Hourly,
            layers: DisplayLayers::default(),
            query: LocationQuery::from_cli(cli),
            clients: WeatherClients::from_cli(cli),
            icon_mode: cli.icon_mode(),
            now: Utc::now().timestamp(),
            fetch_in_flight: false,
            in_flight_request: None,
        }
    }

    #[must_use]
    pub fn units(&self) -> Units {
        self.settings.units
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.settings.locale
    }

    #[must_use]
    pub fn view_for(&self, kind: SeriesKind) -> ViewMode {
        self.settings.view_for(kind)
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                start_clock_task(tx.clone());
                start_refresh_task(tx.clone(), self.settings.refresh_interval_secs);
                self.start_fetch(tx).await?;
            }
            AppEvent::TickClock => {
                let now = Utc::now();
                self.now = now.timestamp();
                self.refresh_meta.refresh(now);
            }
            AppEvent::TickRefresh => {
                if self.mode != AppMode::Quit {
                    self.start_fetch(tx).await?;
                }
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::FetchStarted => {
                self.fetch_in_flight = true;
                self.loading_message = "Fetching weather...".to_string();
                if self.snapshot.is_none() {
                    self.mode = AppMode::Loading;
                }
                self.refresh_meta.last_attempt = Some(Utc::now());
            }
            AppEvent::FetchSucceeded(snapshot) => {
                if self.finish_fetch(tx).await? {
                    return Ok(());
                }
                let now = Utc::now();
                info!(
                    "forecast ready for {} ({} hourly, {} daily)",
                    snapshot.location.display_name(),
                    snapshot.hourly.len(),
                    snapshot.daily.len()
                );
                self.snapshot = Some(*snapshot);
                self.mode = AppMode::Ready;
                self.last_error = None;
                self.now = now.timestamp();
                self.refresh_meta.mark_success(now);
            }
            AppEvent::FetchFailed(err) => {
                if self.finish_fetch(tx).await? {
                    return Ok(());
                }
                error!("forecast refresh failed: {err}");
                self.last_error = Some(err);
                if self.snapshot.is_none() {
                    self.mode = AppMode::Error;
                }
                self.refresh_meta.mark_failure(Utc::now());
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        self.handle_key(key, tx).await
    }

    async fn handle_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            tx.send(AppEvent::Quit).await?;
            return Ok(());
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => tx.send(AppEvent::Quit).await?,
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggled(),
            KeyCode::Char('v') => {
                let view = self.settings.toggle_view(self.focus);
                debug!("{:?} panel switched to {view:?}", self.focus);
                self.persist_settings();
            }
            KeyCode::Char('r') => self.layers.toggle(ChartLayer::Rain),
            KeyCode::Char('w') => self.layers.toggle(ChartLayer::Wind),
            KeyCode::Char('u') => {
                self.settings.units = self.settings.units.toggled();
                self.persist_settings();
                self.start_fetch(tx).await?;
            }
            KeyCode::Char('l') => {
                self.settings.locale = self.settings.locale.toggled();
                info!("display language set to {}", self.settings.locale.code());
                self.persist_settings();
                self.start_fetch(tx).await?;
            }
            KeyCode::Char('f') => self.toggle_current_favorite(),
            KeyCode::Char('R') => self.start_fetch(tx).await?,
            KeyCode::Char(digit) => {
                if let Some(idx) = input::favorite_slot(digit) {
                    self.load_favorite(idx, tx).await?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn toggle_current_favorite(&mut self) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };
        let location = snapshot.location.clone();
        let name = location.display_name();
        let was_saved = self.settings.is_favorite(&location);
        let now_saved = self.settings.toggle_favorite(&location);
        self.status_message = Some(match (was_saved, now_saved) {
            (_, true) => format!("Saved {name} to favorites"),
            (true, false) => format!("Removed {name} from favorites"),
            (false, false) => "Favorites are full".to_string(),
        });
        self.persist_settings();
    }

    async fn load_favorite(&mut self, idx: usize, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Some(location) = self.settings.favorites.get(idx).cloned() else {
            return Ok(());
        };
        info!("switching to favorite {}", location.display_name());
        self.query = LocationQuery::Saved(location);
        self.start_fetch(tx).await
    }

    fn persist_settings(&mut self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(err) = save_runtime_settings(path, &self.settings) {
            warn!("saving settings failed: {err:#}");
            self.last_error = Some(format!("Could not save settings: {err}"));
        }
    }
}

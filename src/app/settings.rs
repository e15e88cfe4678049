use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    cli::{Cli, UnitsArg},
    domain::{
        i18n::Locale,
        snapshot::{Location, SeriesKind, Units},
    },
};

pub const MAX_FAVORITES: usize = 9;
/// Two saved places closer than this in both axes are the same place.
const SAME_PLACE_DEGREES: f64 = 1e-3;
const DEFAULT_REFRESH_SECS: u64 = 600;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Chart,
    List,
}

impl ViewMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Chart => Self::List,
            Self::List => Self::Chart,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub units: Units,
    pub hourly_view: ViewMode,
    pub daily_view: ViewMode,
    pub locale: Locale,
    /// Resolved places, so reloading never depends on geocoding a display name.
    pub favorites: Vec<Location>,
    pub refresh_interval_secs: u64,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            units: Units::Metric,
            hourly_view: ViewMode::Chart,
            daily_view: ViewMode::Chart,
            locale: Locale::En,
            favorites: Vec::new(),
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
        }
    }
}

impl RuntimeSettings {
    #[must_use]
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        let view = cli.view.map(ViewMode::from).unwrap_or_default();
        Self {
            units: cli.units.into(),
            hourly_view: view,
            daily_view: view,
            locale: cli.lang.map(Locale::from).unwrap_or_default(),
            favorites: Vec::new(),
            refresh_interval_secs: cli.refresh_interval,
        }
    }

    #[must_use]
    pub fn view_for(&self, kind: SeriesKind) -> ViewMode {
        match kind {
            SeriesKind::Hourly => self.hourly_view,
            SeriesKind::Daily => self.daily_view,
        }
    }

    pub fn toggle_view(&mut self, kind: SeriesKind) -> ViewMode {
        let slot = match kind {
            SeriesKind::Hourly => &mut self.hourly_view,
            SeriesKind::Daily => &mut self.daily_view,
        };
        *slot = slot.toggled();
        *slot
    }

    #[must_use]
    pub fn is_favorite(&self, location: &Location) -> bool {
        self.favorites.iter().any(|saved| same_place(saved, location))
    }

    /// Appends `location` unless it is unnamed, already saved, or the list is full.
    pub fn add_favorite(&mut self, location: &Location) -> bool {
        if location.name.trim().is_empty()
            || self.is_favorite(location)
            || self.favorites.len() >= MAX_FAVORITES
        {
            return false;
        }
        self.favorites.push(location.clone());
        true
    }

    pub fn remove_favorite(&mut self, location: &Location) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|saved| !same_place(saved, location));
        self.favorites.len() != before
    }

    /// Returns whether `location` is a favorite after the toggle.
    pub fn toggle_favorite(&mut self, location: &Location) -> bool {
        if self.remove_favorite(location) {
            false
        } else {
            self.add_favorite(location)
        }
    }

    fn sanitize(&mut self) {
        let mut kept: Vec<Location> = Vec::with_capacity(self.favorites.len());
        for mut location in self.favorites.drain(..) {
            location.name = location.name.trim().to_string();
            let valid = !location.name.is_empty()
                && (-90.0..=90.0).contains(&location.latitude)
                && (-180.0..=180.0).contains(&location.longitude);
            if valid
                && !kept.iter().any(|saved| same_place(saved, &location))
                && kept.len() < MAX_FAVORITES
            {
                kept.push(location);
            }
        }
        self.favorites = kept;
        if self.refresh_interval_secs == 0 {
            self.refresh_interval_secs = DEFAULT_REFRESH_SECS;
        }
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if cli.units != UnitsArg::Metric {
            self.units = cli.units.into();
        }
        if let Some(view) = cli.view {
            self.hourly_view = view.into();
            self.daily_view = view.into();
        }
        if cli.refresh_interval != DEFAULT_REFRESH_SECS {
            self.refresh_interval_secs = cli.refresh_interval;
        }
        if let Some(lang) = cli.lang {
            self.locale = lang.into();
        }
    }
}

fn same_place(a: &Location, b: &Location) -> bool {
    a.display_name() == b.display_name()
        && (a.latitude - b.latitude).abs() < SAME_PLACE_DEGREES
        && (a.longitude - b.longitude).abs() < SAME_PLACE_DEGREES
}

pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    if !enable_disk {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    }
    load_runtime_settings_from(cli, settings_path())
}

pub(crate) fn load_runtime_settings_from(
    cli: &Cli,
    path: Option<PathBuf>,
) -> (RuntimeSettings, Option<PathBuf>) {
    let mut settings = RuntimeSettings::from_cli_defaults(cli);
    let Some(path) = path else {
        return (settings, None);
    };

    match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str::<RuntimeSettings>(&content) {
            Ok(saved) => {
                debug!("loaded settings from {}", path.display());
                settings = saved;
                settings.sanitize();
            }
            Err(err) => warn!("ignoring unreadable settings {}: {err}", path.display()),
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => warn!("reading settings {} failed: {err}", path.display()),
    }

    settings.apply_cli_overrides(cli);
    (settings, Some(path))
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .context("restricting settings file permissions failed")?;
    }
    Ok(())
}

fn settings_path() -> Option<PathBuf> {
    resolve_settings_path(
        std::env::var_os("FORECAST_SERIES_CONFIG_DIR"),
        std::env::var_os("HOME"),
    )
}

fn resolve_settings_path(config_dir: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    if let Some(base) = config_dir.filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(base).join("settings.json"));
    }
    let home = home?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("forecast-series")
            .join("settings.json"),
    )
}

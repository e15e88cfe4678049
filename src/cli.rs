#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::{
    app::settings::ViewMode,
    domain::{
        conditions::IconMode,
        i18n::Locale,
        snapshot::{SeriesKind, Units},
    },
};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

impl From<UnitsArg> for Units {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Metric => Self::Metric,
            UnitsArg::Imperial => Self::Imperial,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SeriesKindArg {
    Hourly,
    Daily,
}

impl From<SeriesKindArg> for SeriesKind {
    fn from(value: SeriesKindArg) -> Self {
        match value {
            SeriesKindArg::Hourly => Self::Hourly,
            SeriesKindArg::Daily => Self::Daily,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ViewArg {
    Chart,
    List,
}

impl From<ViewArg> for ViewMode {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Chart => Self::Chart,
            ViewArg::List => Self::List,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LangArg {
    En,
    Fr,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Fr => Self::Fr,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
            LogLevelArg::Trace => Self::Trace,
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "forecast-series",
    version,
    about = "Hourly and daily forecast charts in the terminal"
)]
pub struct Cli {
    /// City name, e.g. "Paris" or "Paris, FR" (default: detect from IP)
    pub city: Option<String>,

    /// Measurement system
    #[arg(long, value_enum, default_value_t = UnitsArg::Metric)]
    pub units: UnitsArg,

    /// Series printed by --one-shot --json
    #[arg(long, value_enum, default_value_t = SeriesKindArg::Hourly)]
    pub kind: SeriesKindArg,

    /// Force chart or list view for both panels
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Display language for labels and place names (saved for next time)
    #[arg(long, value_enum)]
    pub lang: Option<LangArg>,

    /// Refresh interval in seconds
    #[arg(long, default_value_t = 600)]
    pub refresh_interval: u64,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Print a forecast report to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// With --one-shot, print the derived series as JSON
    #[arg(long, requires = "one_shot")]
    pub json: bool,

    /// With --one-shot, evaluate the forecast at this epoch second instead of the clock
    #[arg(long, requires = "one_shot")]
    pub now: Option<i64>,

    /// Override forecast API base URL
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Override geocoding API base URL
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Override reverse geocoding API base URL
    #[arg(long)]
    pub reverse_geocode_url: Option<String>,

    /// Override IP geolocation URL
    #[arg(long)]
    pub geoip_url: Option<String>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevelArg::Info)]
    pub log_level: LogLevelArg,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            (Some(lat), Some(lon))
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) =>
            {
                anyhow::bail!("coordinates out of range: {lat}, {lon}")
            }
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }

    #[must_use]
    pub fn temperature_param(self) -> &'static str {
        match self {
            Self::Metric => "celsius",
            Self::Imperial => "fahrenheit",
        }
    }

    #[must_use]
    pub fn wind_speed_param(self) -> &'static str {
        match self {
            Self::Metric => "kmh",
            Self::Imperial => "mph",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

/// Which forecast horizon a derived series targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    /// Roughly the next 24 hours.
    Hourly,
    /// Roughly the next five days.
    Daily,
}

impl SeriesKind {
    #[must_use]
    pub fn title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Hourly, Locale::En) => "Next 24 Hours",
            (Self::Hourly, Locale::Fr) => "Prochaines 24 heures",
            (Self::Daily, Locale::En) => "Next 5 Days",
            (Self::Daily, Locale::Fr) => "5 prochains jours",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hourly => Self::Daily,
            Self::Daily => Self::Hourly,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub timezone: Option<String>,
    pub population: Option<u64>,
}

impl Location {
    #[must_use]
    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self {
            name: format!("{lat:.4}, {lon:.4}"),
            latitude: lat,
            longitude: lon,
            country: None,
            timezone: None,
            population: None,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) if !self.name.contains(',') => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub time: i64,
    pub temperature: f64,
    pub relative_humidity: f64,
    pub is_day: bool,
    pub weather_code: u8,
    pub wind_speed: f64,
    pub pressure_msl: f64,
}

/// Hourly block as parallel arrays indexed by position in `time`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<i64>,
    pub temperature: Vec<Option<f64>>,
    pub precipitation_probability: Vec<Option<f64>>,
    pub wind_speed: Vec<Option<f64>>,
    pub visibility: Vec<Option<f64>>,
    pub weather_code: Vec<Option<u8>>,
    /// Upstream day flag. Kept for completeness; list points recompute it.
    pub is_day: Vec<Option<bool>>,
}

impl HourlySeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    #[must_use]
    pub fn temperature_at(&self, idx: usize) -> Option<f64> {
        self.temperature.get(idx).copied().flatten()
    }

    #[must_use]
    pub fn precipitation_probability_at(&self, idx: usize) -> Option<f64> {
        self.precipitation_probability.get(idx).copied().flatten()
    }

    #[must_use]
    pub fn wind_speed_at(&self, idx: usize) -> Option<f64> {
        self.wind_speed.get(idx).copied().flatten()
    }

    #[must_use]
    pub fn visibility_at(&self, idx: usize) -> Option<f64> {
        self.visibility.get(idx).copied().flatten()
    }

    #[must_use]
    pub fn weather_code_at(&self, idx: usize) -> Option<u8> {
        self.weather_code.get(idx).copied().flatten()
    }
}

/// Daily block; `time[i]` is the local midnight starting day `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub time: Vec<i64>,
    pub temperature_max: Vec<Option<f64>>,
    pub temperature_min: Vec<Option<f64>>,
    pub sunrise: Vec<Option<i64>>,
    pub sunset: Vec<Option<i64>>,
    pub weather_code: Vec<Option<u8>>,
}

impl DailySeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    #[must_use]
    pub fn temperature_max_at(&self, idx: usize) -> Option<f64> {
        self.temperature_max.get(idx).copied().flatten()
    }

    #[must_use]
    pub fn temperature_min_at(&self, idx: usize) -> Option<f64> {
        self.temperature_min.get(idx).copied().flatten()
    }

    #[must_use]
    pub fn sunrise_at(&self, idx: usize) -> Option<i64> {
        self.sunrise.get(idx).copied().flatten()
    }

    #[must_use]
    pub fn sunset_at(&self, idx: usize) -> Option<i64> {
        self.sunset.get(idx).copied().flatten()
    }

    #[must_use]
    pub fn weather_code_at(&self, idx: usize) -> Option<u8> {
        self.weather_code.get(idx).copied().flatten()
    }
}

/// One forecast response for a single location, already in the requested units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub timezone: String,
    pub utc_offset_seconds: i32,
    pub units: Units,
    pub current: Option<CurrentConditions>,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("{block}.{field} has {actual} entries, expected {expected}")]
    RaggedSeries {
        block: &'static str,
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{block}.time is not strictly ascending at index {index}")]
    NonAscending { block: &'static str, index: usize },
}

impl WeatherSnapshot {
    /// Rejects ragged parallel arrays and out-of-order timestamps.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let hourly = &self.hourly;
        let expected = hourly.time.len();
        check_len("hourly", "temperature_2m", expected, hourly.temperature.len())?;
        check_len(
            "hourly",
            "precipitation_probability",
            expected,
            hourly.precipitation_probability.len(),
        )?;
        check_len("hourly", "wind_speed_10m", expected, hourly.wind_speed.len())?;
        check_len("hourly", "visibility", expected, hourly.visibility.len())?;
        check_len("hourly", "weather_code", expected, hourly.weather_code.len())?;
        if !hourly.is_day.is_empty() {
            check_len("hourly", "is_day", expected, hourly.is_day.len())?;
        }
        check_ascending("hourly", &hourly.time)?;

        let daily = &self.daily;
        let expected = daily.time.len();
        check_len("daily", "temperature_2m_max", expected, daily.temperature_max.len())?;
        check_len("daily", "temperature_2m_min", expected, daily.temperature_min.len())?;
        check_len("daily", "sunrise", expected, daily.sunrise.len())?;
        check_len("daily", "sunset", expected, daily.sunset.len())?;
        check_len("daily", "weather_code", expected, daily.weather_code.len())?;
        check_ascending("daily", &daily.time)
    }
}

fn check_len(
    block: &'static str,
    field: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), SnapshotError> {
    if expected == actual {
        Ok(())
    } else {
        Err(SnapshotError::RaggedSeries {
            block,
            field,
            expected,
            actual,
        })
    }
}

fn check_ascending(block: &'static str, times: &[i64]) -> Result<(), SnapshotError> {
    match times.windows(2).position(|pair| pair[0] >= pair[1]) {
        Some(idx) => Err(SnapshotError::NonAscending {
            block,
            index: idx + 1,
        }),
        None => Ok(()),
    }
}

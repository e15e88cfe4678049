use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::snapshot::{
    CurrentConditions, DailySeries, HourlySeries, Location, Units, WeatherSnapshot,
};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,is_day,weather_code,wind_speed_10m,pressure_msl";
const HOURLY_FIELDS: &str =
    "temperature_2m,precipitation_probability,weather_code,wind_speed_10m,visibility,is_day";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,sunrise,sunset";
const FORECAST_DAYS: &str = "5";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: super::http_client(10),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(&self, location: Location, units: Units) -> Result<WeatherSnapshot> {
        debug!(
            "fetching forecast for {} ({:.4}, {:.4}) in {} units",
            location.name,
            location.latitude,
            location.longitude,
            units.label()
        );
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timeformat", "unixtime".to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
                ("temperature_unit", units.temperature_param().to_string()),
                ("wind_speed_unit", units.wind_speed_param().to_string()),
            ])
            .send()
            .await
            .context("forecast request failed")?
            .error_for_status()
            .context("forecast request returned non-success status")?;

        let payload: ForecastResponse = response
            .json()
            .await
            .context("failed to parse forecast payload")?;

        let snapshot = payload.into_snapshot(location, units);
        if let Err(err) = snapshot.validate() {
            warn!("rejecting malformed forecast payload: {err}");
            return Err(err).context("forecast payload failed validation");
        }
        Ok(snapshot)
    }
}

impl ForecastResponse {
    fn into_snapshot(self, location: Location, units: Units) -> WeatherSnapshot {
        let mut location = location;
        if location.timezone.is_none() {
            location.timezone = Some(self.timezone.clone());
        }

        WeatherSnapshot {
            location,
            timezone: self.timezone,
            utc_offset_seconds: self.utc_offset_seconds,
            units,
            current: self.current.map(CurrentBlock::into_conditions),
            hourly: self.hourly.into_series(),
            daily: self.daily.into_series(),
        }
    }
}

impl CurrentBlock {
    fn into_conditions(self) -> CurrentConditions {
        CurrentConditions {
            time: self.time,
            temperature: self.temperature_2m,
            relative_humidity: self.relative_humidity_2m,
            is_day: self.is_day == 1,
            weather_code: self.weather_code,
            wind_speed: self.wind_speed_10m,
            pressure_msl: self.pressure_msl,
        }
    }
}

impl HourlyBlock {
    fn into_series(self) -> HourlySeries {
        HourlySeries {
            time: self.time,
            temperature: self.temperature_2m,
            precipitation_probability: self.precipitation_probability,
            wind_speed: self.wind_speed_10m,
            visibility: self.visibility,
            weather_code: self.weather_code,
            is_day: self
                .is_day
                .into_iter()
                .map(|flag| flag.map(|value| value == 1))
                .collect(),
        }
    }
}

impl DailyBlock {
    fn into_series(self) -> DailySeries {
        DailySeries {
            time: self.time,
            temperature_max: self.temperature_2m_max,
            temperature_min: self.temperature_2m_min,
            sunrise: self.sunrise,
            sunset: self.sunset,
            weather_code: self.weather_code,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default = "default_timezone")]
    timezone: String,
    #[serde(default)]
    utc_offset_seconds: i32,
    current: Option<CurrentBlock>,
    #[serde(default)]
    hourly: HourlyBlock,
    #[serde(default)]
    daily: DailyBlock,
}

fn default_timezone() -> String {
    "GMT".to_string()
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    time: i64,
    temperature_2m: f64,
    relative_humidity_2m: f64,
    is_day: u8,
    weather_code: u8,
    wind_speed_10m: f64,
    pressure_msl: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HourlyBlock {
    time: Vec<i64>,
    temperature_2m: Vec<Option<f64>>,
    precipitation_probability: Vec<Option<f64>>,
    weather_code: Vec<Option<u8>>,
    wind_speed_10m: Vec<Option<f64>>,
    visibility: Vec<Option<f64>>,
    is_day: Vec<Option<u8>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DailyBlock {
    time: Vec<i64>,
    weather_code: Vec<Option<u8>>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    sunrise: Vec<Option<i64>>,
    sunset: Vec<Option<i64>>,
}

#![allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#![allow(dead_code)]

use forecast_series::{
    app::state::{AppMode, AppState},
    cli::{Cli, LogLevelArg, SeriesKindArg, UnitsArg},
    domain::snapshot::{
        CurrentConditions, DailySeries, HourlySeries, Location, Units, WeatherSnapshot,
    },
};
use serde_json::{Value, json};

pub const HOUR: i64 = 3600;
pub const DAY: i64 = 86_400;
/// 2026-02-12T00:00Z
pub const BASE_MIDNIGHT: i64 = 1_770_854_400;

pub fn stockholm_cli() -> Cli {
    Cli {
        city: Some("Stockholm".to_string()),
        units: UnitsArg::Metric,
        kind: SeriesKindArg::Hourly,
        view: None,
        lat: None,
        lon: None,
        lang: None,
        refresh_interval: 600,
        ascii_icons: false,
        emoji_icons: false,
        one_shot: false,
        json: false,
        now: None,
        forecast_url: None,
        geocode_url: None,
        reverse_geocode_url: None,
        geoip_url: None,
        log_file: None,
        log_level: LogLevelArg::Info,
    }
}

/// CLI whose endpoints refuse connections, so spawned loads fail fast.
pub fn offline_cli() -> Cli {
    let unreachable = Some("http://127.0.0.1:9/".to_string());
    Cli {
        forecast_url: unreachable.clone(),
        geocode_url: unreachable.clone(),
        reverse_geocode_url: unreachable.clone(),
        geoip_url: unreachable,
        ..stockholm_cli()
    }
}

pub fn stockholm_location() -> Location {
    Location {
        name: "Stockholm".to_string(),
        latitude: 59.3293,
        longitude: 18.0686,
        country: Some("Sweden".to_string()),
        timezone: Some("Europe/Stockholm".to_string()),
        population: Some(975_000),
    }
}

pub fn fixture_snapshot(hours: usize, days: usize) -> WeatherSnapshot {
    let hourly_time = (0..hours)
        .map(|idx| BASE_MIDNIGHT + idx as i64 * HOUR)
        .collect::<Vec<_>>();
    WeatherSnapshot {
        location: stockholm_location(),
        timezone: "GMT".to_string(),
        utc_offset_seconds: 0,
        units: Units::Metric,
        current: Some(CurrentConditions {
            time: BASE_MIDNIGHT + 10 * HOUR,
            temperature: 7.2,
            relative_humidity: 73.0,
            is_day: true,
            weather_code: 61,
            wind_speed: 12.0,
            pressure_msl: 1008.2,
        }),
        hourly: HourlySeries {
            temperature: (0..hours)
                .map(|idx| Some(2.0 + (idx % 24) as f64 * 0.5))
                .collect(),
            precipitation_probability: (0..hours)
                .map(|idx| Some((idx % 10) as f64 * 10.0))
                .collect(),
            wind_speed: (0..hours).map(|idx| Some(8.0 + (idx % 5) as f64)).collect(),
            visibility: vec![Some(11_200.0); hours],
            weather_code: vec![Some(61); hours],
            is_day: vec![Some(true); hours],
            time: hourly_time,
        },
        daily: DailySeries {
            time: (0..days).map(|idx| BASE_MIDNIGHT + idx as i64 * DAY).collect(),
            temperature_max: (0..days).map(|idx| Some(8.0 + idx as f64)).collect(),
            temperature_min: (0..days).map(|idx| Some(1.0 + idx as f64 * 0.3)).collect(),
            sunrise: (0..days)
                .map(|idx| Some(BASE_MIDNIGHT + idx as i64 * DAY + 7 * HOUR))
                .collect(),
            sunset: (0..days)
                .map(|idx| Some(BASE_MIDNIGHT + idx as i64 * DAY + 17 * HOUR))
                .collect(),
            weather_code: vec![Some(61); days],
        },
    }
}

/// Open-Meteo style forecast body with `timeformat=unixtime`.
pub fn forecast_payload(hours: usize, days: usize) -> Value {
    let hourly_time = (0..hours)
        .map(|idx| BASE_MIDNIGHT + idx as i64 * HOUR)
        .collect::<Vec<_>>();
    let daily_time = (0..days)
        .map(|idx| BASE_MIDNIGHT + idx as i64 * DAY)
        .collect::<Vec<_>>();
    let temperatures = (0..hours)
        .map(|idx| 3.0 + (idx % 24) as f64 * 0.25)
        .collect::<Vec<_>>();
    json!({
        "latitude": 59.33,
        "longitude": 18.07,
        "timezone": "Europe/Stockholm",
        "utc_offset_seconds": 3600,
        "current": {
            "time": BASE_MIDNIGHT + 10 * HOUR,
            "temperature_2m": 4.6,
            "relative_humidity_2m": 81,
            "is_day": 1,
            "weather_code": 3,
            "wind_speed_10m": 14.2,
            "pressure_msl": 1012.4
        },
        "hourly": {
            "time": hourly_time,
            "temperature_2m": temperatures,
            "precipitation_probability": vec![20; hours],
            "weather_code": vec![3; hours],
            "wind_speed_10m": vec![12.5; hours],
            "visibility": vec![24_140.0; hours],
            "is_day": vec![1; hours]
        },
        "daily": {
            "time": daily_time,
            "weather_code": vec![3; days],
            "temperature_2m_max": vec![6.5; days],
            "temperature_2m_min": vec![0.5; days],
            "sunrise": daily_time.iter().map(|t| t + 8 * HOUR).collect::<Vec<_>>(),
            "sunset": daily_time.iter().map(|t| t + 16 * HOUR).collect::<Vec<_>>()
        }
    })
}

pub fn ready_state(cli: &Cli, snapshot: WeatherSnapshot) -> AppState {
    let mut state = AppState::new(cli);
    state.snapshot = Some(snapshot);
    state.mode = AppMode::Ready;
    state.now = BASE_MIDNIGHT + 10 * HOUR;
    state
}

use chrono::NaiveDate;

use crate::{
    cli::{Cli, LogLevelArg, SeriesKindArg, UnitsArg},
    domain::snapshot::{
        CurrentConditions, DailySeries, HourlySeries, Location, Units, WeatherSnapshot,
    },
};

pub(crate) const HOUR: i64 = 3600;
pub(crate) const DAY: i64 = 86_400;

/// 2026-02-12T00:00Z, the first day of every fixture.
pub(crate) fn base_midnight() -> i64 {
    NaiveDate::from_ymd_opt(2026, 2, 12)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid date fixture")
        .and_utc()
        .timestamp()
}

pub(crate) fn stockholm_location() -> Location {
    Location {
        name: "Stockholm".to_string(),
        latitude: 59.3293,
        longitude: 18.0686,
        country: Some("Sweden".to_string()),
        timezone: Some("Europe/Stockholm".to_string()),
        population: Some(975_000),
    }
}

pub(crate) fn sample_current() -> CurrentConditions {
    CurrentConditions {
        time: base_midnight() + 10 * HOUR,
        temperature: 7.0,
        relative_humidity: 72.0,
        is_day: true,
        weather_code: 3,
        wind_speed: 10.0,
        pressure_msl: 1008.0,
    }
}

pub(crate) fn sample_hourly(start: i64, hours: usize) -> HourlySeries {
    let time = (0..hours)
        .map(|idx| start + idx as i64 * HOUR)
        .collect::<Vec<_>>();
    HourlySeries {
        temperature: (0..hours)
            .map(|idx| Some(5.0 + (idx % 24) as f64 * 0.5))
            .collect(),
        precipitation_probability: (0..hours).map(|idx| Some(((idx * 5) % 100) as f64)).collect(),
        wind_speed: (0..hours).map(|idx| Some(10.0 + (idx % 7) as f64)).collect(),
        visibility: (0..hours).map(|idx| Some(10_000.0 - idx as f64)).collect(),
        weather_code: (0..hours).map(|idx| Some(if idx % 2 == 0 { 3 } else { 61 })).collect(),
        // Deliberately wrong at night so tests can show it is ignored.
        is_day: vec![Some(true); hours],
        time,
    }
}

pub(crate) fn sample_daily(start: i64, days: usize) -> DailySeries {
    DailySeries {
        time: (0..days).map(|idx| start + idx as i64 * DAY).collect(),
        temperature_max: (0..days).map(|idx| Some(8.0 + idx as f64)).collect(),
        temperature_min: (0..days).map(|idx| Some(1.0 + idx as f64 * 0.5)).collect(),
        sunrise: (0..days)
            .map(|idx| Some(start + idx as i64 * DAY + 7 * HOUR))
            .collect(),
        sunset: (0..days)
            .map(|idx| Some(start + idx as i64 * DAY + 17 * HOUR))
            .collect(),
        weather_code: vec![Some(3); days],
    }
}

pub(crate) fn sample_snapshot(hours: usize, days: usize) -> WeatherSnapshot {
    let base = base_midnight();
    WeatherSnapshot {
        location: stockholm_location(),
        timezone: "GMT".to_string(),
        utc_offset_seconds: 0,
        units: Units::Metric,
        current: Some(sample_current()),
        hourly: sample_hourly(base, hours),
        daily: sample_daily(base, days),
    }
}

pub(crate) fn test_cli() -> Cli {
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

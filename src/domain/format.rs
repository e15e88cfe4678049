use chrono::{DateTime, Datelike, FixedOffset};

use super::{
    i18n::{Locale, month_abbrev, weekday_name},
    snapshot::Units,
};

const MISSING: &str = "--";
const HPA_TO_INHG: f64 = 0.029_53;
const KM_TO_MILES: f64 = 0.621_371;

#[must_use]
pub fn round_value(value: f64) -> i64 {
    value.round() as i64
}

#[must_use]
pub fn temperature_unit(units: Units) -> &'static str {
    match units {
        Units::Metric => "°C",
        Units::Imperial => "°F",
    }
}

#[must_use]
pub fn wind_unit(units: Units) -> &'static str {
    match units {
        Units::Metric => "km/h",
        Units::Imperial => "mph",
    }
}

#[must_use]
pub fn format_temperature(value: Option<f64>, units: Units) -> (String, &'static str) {
    match value {
        Some(temp) => (round_value(temp).to_string(), temperature_unit(units)),
        None => (MISSING.to_string(), ""),
    }
}

#[must_use]
pub fn format_wind_speed(value: Option<f64>, units: Units) -> (String, &'static str) {
    match value {
        Some(speed) => (round_value(speed).to_string(), wind_unit(units)),
        None => (MISSING.to_string(), ""),
    }
}

#[must_use]
pub fn format_humidity(value: Option<f64>) -> (String, &'static str) {
    (
        value.map_or_else(|| MISSING.to_string(), |h| round_value(h).to_string()),
        "%",
    )
}

/// Pressure arrives in hPa regardless of the requested units.
#[must_use]
pub fn format_pressure(value: Option<f64>, units: Units) -> (String, &'static str) {
    match (value, units) {
        (None, _) => (MISSING.to_string(), ""),
        (Some(hpa), Units::Metric) => (round_value(hpa).to_string(), "hPa"),
        (Some(hpa), Units::Imperial) => (format!("{:.2}", hpa * HPA_TO_INHG), "inHg"),
    }
}

/// Visibility arrives in metres regardless of the requested units.
#[must_use]
pub fn format_visibility(value: Option<f64>, units: Units) -> (String, &'static str) {
    let Some(metres) = value else {
        return (MISSING.to_string(), "");
    };
    let km = metres / 1000.0;
    match units {
        Units::Metric => (format!("{km:.1}"), "km"),
        Units::Imperial => (format!("{:.1}", km * KM_TO_MILES), "mi"),
    }
}

fn local_time(timestamp: i64, utc_offset_seconds: i32) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(utc_offset_seconds)?;
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(&offset))
}

/// 24-hour clock for metric, 12-hour clock for imperial.
#[must_use]
pub fn format_clock(timestamp: i64, utc_offset_seconds: i32, units: Units) -> String {
    let pattern = match units {
        Units::Metric => "%H:%M",
        Units::Imperial => "%I:%M %p",
    };
    local_time(timestamp, utc_offset_seconds)
        .map_or_else(|| MISSING.to_string(), |time| time.format(pattern).to_string())
}

#[must_use]
pub fn format_hour(timestamp: i64, utc_offset_seconds: i32) -> String {
    local_time(timestamp, utc_offset_seconds)
        .map_or_else(|| MISSING.to_string(), |time| time.format("%H:%M").to_string())
}

#[must_use]
pub fn format_weekday(timestamp: i64, utc_offset_seconds: i32, locale: Locale) -> String {
    local_time(timestamp, utc_offset_seconds).map_or_else(
        || MISSING.to_string(),
        |time| weekday_name(time.weekday(), locale).to_string(),
    )
}

/// `Feb 12` in English, `12 févr.` in French.
#[must_use]
pub fn format_short_date(timestamp: i64, utc_offset_seconds: i32, locale: Locale) -> String {
    let Some(time) = local_time(timestamp, utc_offset_seconds) else {
        return MISSING.to_string();
    };
    let month = month_abbrev(time.month0(), locale);
    match locale {
        Locale::En => format!("{month} {}", time.day()),
        Locale::Fr => format!("{} {month}", time.day()),
    }
}

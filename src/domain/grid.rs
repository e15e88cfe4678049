use serde::Serialize;

use super::{
    conditions::{IconMode, describe_condition, weather_icon},
    format::{
        format_clock, format_humidity, format_pressure, format_temperature, format_visibility,
        format_wind_speed,
    },
    i18n::Locale,
    snapshot::WeatherSnapshot,
};

const SECONDS_PER_HOUR: i64 = 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardKind {
    Humidity,
    Wind,
    Pressure,
    Visibility,
    Sunrise,
    Sunset,
}

impl CardKind {
    #[must_use]
    pub fn title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Humidity, Locale::En) => "Humidity",
            (Self::Humidity, Locale::Fr) => "Humidité",
            (Self::Wind, Locale::En) => "Wind speed",
            (Self::Wind, Locale::Fr) => "Vent",
            (Self::Pressure, Locale::En) => "Pressure",
            (Self::Pressure, Locale::Fr) => "Pression",
            (Self::Visibility, Locale::En) => "Visibility",
            (Self::Visibility, Locale::Fr) => "Visibilité",
            (Self::Sunrise, Locale::En) => "Sunrise",
            (Self::Sunrise, Locale::Fr) => "Lever du soleil",
            (Self::Sunset, Locale::En) => "Sunset",
            (Self::Sunset, Locale::Fr) => "Coucher du soleil",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataCard {
    pub kind: CardKind,
    pub value: String,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodaySummary {
    pub temperature: String,
    pub unit: &'static str,
    pub label: &'static str,
    pub icon: String,
    pub glyph: &'static str,
    pub high: String,
    pub low: String,
}

/// Hourly slot whose hour contains `now`, else the first slot.
#[must_use]
pub fn current_hour_index(snapshot: &WeatherSnapshot, now: i64) -> Option<usize> {
    if snapshot.hourly.is_empty() {
        return None;
    }
    let slot = snapshot
        .hourly
        .time
        .iter()
        .position(|&time| time <= now && now < time + SECONDS_PER_HOUR);
    Some(slot.unwrap_or(0))
}

#[must_use]
pub fn build_data_grid(snapshot: &WeatherSnapshot, now: i64) -> Vec<DataCard> {
    let Some(current) = &snapshot.current else {
        return Vec::new();
    };
    let units = snapshot.units;
    let offset = snapshot.utc_offset_seconds;

    let visibility = current_hour_index(snapshot, now)
        .and_then(|idx| snapshot.hourly.visibility_at(idx));
    let sun_time = |value: Option<i64>| {
        value.map_or_else(|| "--".to_string(), |ts| format_clock(ts, offset, units))
    };

    let card = |kind, (value, unit): (String, &'static str)| DataCard { kind, value, unit };
    vec![
        card(CardKind::Humidity, format_humidity(Some(current.relative_humidity))),
        card(CardKind::Wind, format_wind_speed(Some(current.wind_speed), units)),
        card(CardKind::Pressure, format_pressure(Some(current.pressure_msl), units)),
        card(CardKind::Visibility, format_visibility(visibility, units)),
        card(CardKind::Sunrise, (sun_time(snapshot.daily.sunrise_at(0)), "")),
        card(CardKind::Sunset, (sun_time(snapshot.daily.sunset_at(0)), "")),
    ]
}

#[must_use]
pub fn today_summary(
    snapshot: &WeatherSnapshot,
    icon_mode: IconMode,
    locale: Locale,
) -> Option<TodaySummary> {
    let current = snapshot.current.as_ref()?;
    let units = snapshot.units;
    let (temperature, unit) = format_temperature(Some(current.temperature), units);
    let descriptor = describe_condition(current.weather_code, current.is_day, locale);

    Some(TodaySummary {
        temperature,
        unit,
        label: descriptor.label,
        icon: descriptor.icon,
        glyph: weather_icon(current.weather_code, icon_mode, current.is_day),
        high: format_temperature(snapshot.daily.temperature_max_at(0), units).0,
        low: format_temperature(snapshot.daily.temperature_min_at(0), units).0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::snapshot::Units,
        test_support::{HOUR, base_midnight, sample_snapshot},
    };

    #[test]
    fn grid_lists_six_cards_in_display_order() {
        let snapshot = sample_snapshot(48, 2);
        let cards = build_data_grid(&snapshot, base_midnight() + 10 * HOUR);

        let kinds = cards.iter().map(|card| card.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                CardKind::Humidity,
                CardKind::Wind,
                CardKind::Pressure,
                CardKind::Visibility,
                CardKind::Sunrise,
                CardKind::Sunset,
            ]
        );
        assert_eq!(cards[0].value, "72");
        assert_eq!(cards[1].unit, "km/h");
        assert_eq!(cards[4].value, "07:00");
        assert_eq!(cards[5].value, "17:00");
    }

    #[test]
    fn visibility_is_read_at_current_hour() {
        let snapshot = sample_snapshot(48, 2);
        let cards = build_data_grid(&snapshot, base_midnight() + 10 * HOUR + 59 * 60);
        // Fixture visibility at index 10 is 9 990 m.
        assert_eq!(cards[3].value, "10.0");
        assert_eq!(current_hour_index(&snapshot, base_midnight() + 10 * HOUR + 59 * 60), Some(10));
    }

    #[test]
    fn visibility_falls_back_to_first_slot() {
        let snapshot = sample_snapshot(48, 2);
        assert_eq!(current_hour_index(&snapshot, base_midnight() - 5 * HOUR), Some(0));
    }

    #[test]
    fn grid_is_empty_without_current_block() {
        let mut snapshot = sample_snapshot(48, 2);
        snapshot.current = None;
        assert!(build_data_grid(&snapshot, base_midnight()).is_empty());
        assert!(today_summary(&snapshot, IconMode::Ascii, Locale::En).is_none());
    }

    #[test]
    fn imperial_grid_uses_imperial_units() {
        let mut snapshot = sample_snapshot(48, 2);
        snapshot.units = Units::Imperial;
        let cards = build_data_grid(&snapshot, base_midnight());
        assert_eq!(cards[1].unit, "mph");
        assert_eq!(cards[2].unit, "inHg");
        assert_eq!(cards[3].unit, "mi");
        assert_eq!(cards[4].value, "07:00 AM");
    }

    #[test]
    fn today_summary_reads_current_and_first_day() {
        let snapshot = sample_snapshot(48, 2);
        let summary = today_summary(&snapshot, IconMode::Ascii, Locale::En).expect("summary");
        assert_eq!(summary.temperature, "7");
        assert_eq!(summary.unit, "°C");
        assert_eq!(summary.label, "Overcast");
        assert_eq!(summary.icon, "04d");
        assert_eq!(summary.glyph, "CLD");
        assert_eq!(summary.high, "8");
        assert_eq!(summary.low, "1");
    }

    #[test]
    fn french_summary_and_card_titles() {
        let snapshot = sample_snapshot(48, 2);
        let summary = today_summary(&snapshot, IconMode::Ascii, Locale::Fr).expect("summary");
        assert_eq!(summary.label, "Couvert");
        assert_eq!(CardKind::Humidity.title(Locale::Fr), "Humidité");
        assert_eq!(CardKind::Sunset.title(Locale::En), "Sunset");
    }
}

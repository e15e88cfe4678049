use serde::{Deserialize, Serialize};

use super::i18n::{Locale, condition_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IconMode {
    #[default]
    Unicode,
    Ascii,
    Emoji,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Fog,
    Thunder,
    Unknown,
}

/// Icon identifier and translation key for one condition code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionDescriptor {
    pub icon: String,
    pub description_key: String,
    pub label: &'static str,
}

/// `(code, icon family)`
const WMO_TABLE: &[(u8, &str)] = &[
    (0, "01"),
    (1, "02"),
    (2, "02"),
    (3, "04"),
    (45, "50"),
    (48, "50"),
    (51, "09"),
    (53, "09"),
    (55, "09"),
    (56, "09"),
    (57, "09"),
    (61, "10"),
    (63, "10"),
    (65, "10"),
    (66, "13"),
    (67, "13"),
    (71, "13"),
    (73, "13"),
    (75, "13"),
    (77, "13"),
    (80, "09"),
    (81, "09"),
    (82, "09"),
    (85, "13"),
    (86, "13"),
    (95, "11"),
    (96, "11"),
    (99, "11"),
];

const UNKNOWN_KEY: &str = "unknown";

fn icon_family(code: u8) -> Option<&'static str> {
    WMO_TABLE
        .iter()
        .find_map(|&(candidate, family)| (candidate == code).then_some(family))
}

#[must_use]
pub fn describe_condition(code: u8, is_day: bool, locale: Locale) -> ConditionDescriptor {
    let suffix = if is_day { 'd' } else { 'n' };
    let (icon, description_key) = match icon_family(code) {
        Some(family) => (format!("{family}{suffix}"), code.to_string()),
        None => (format!("01{suffix}"), UNKNOWN_KEY.to_string()),
    };
    ConditionDescriptor {
        label: condition_label(&description_key, is_day, locale),
        icon,
        description_key,
    }
}

#[must_use]
pub fn weather_code_to_category(code: u8) -> WeatherCategory {
    match code {
        0 | 1 => WeatherCategory::Clear,
        2 | 3 => WeatherCategory::Cloudy,
        45 | 48 => WeatherCategory::Fog,
        51..=57 | 61..=67 | 80..=82 => WeatherCategory::Rain,
        71..=77 | 85..=86 => WeatherCategory::Snow,
        95 | 96 | 99 => WeatherCategory::Thunder,
        _ => WeatherCategory::Unknown,
    }
}

#[must_use]
pub fn weather_label_for_time(code: u8, is_day: bool, locale: Locale) -> &'static str {
    describe_condition(code, is_day, locale).label
}

#[must_use]
pub fn weather_icon(code: u8, mode: IconMode, is_day: bool) -> &'static str {
    let (ascii, emoji, unicode) = icon_tokens(weather_code_to_category(code), is_day);
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
        IconMode::Unicode => unicode,
    }
}

fn icon_tokens(
    category: WeatherCategory,
    is_day: bool,
) -> (&'static str, &'static str, &'static str) {
    match category {
        WeatherCategory::Clear if is_day => ("SUN", "☀️", "☀"),
        WeatherCategory::Clear => ("MON", "🌙", "☾"),
        WeatherCategory::Cloudy => ("CLD", "☁️", "☁"),
        WeatherCategory::Rain => ("RAN", "🌧️", "☂"),
        WeatherCategory::Snow => ("SNW", "🌨️", "❄"),
        WeatherCategory::Fog => ("FOG", "🌫️", "░"),
        WeatherCategory::Thunder => ("THN", "⛈️", "⚡"),
        WeatherCategory::Unknown => ("---", "☁️", "☁"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_maps_to_icon_family_with_day_suffix() {
        let descriptor = describe_condition(61, true, Locale::En);
        assert_eq!(descriptor.icon, "10d");
        assert_eq!(descriptor.description_key, "61");
        assert_eq!(descriptor.label, "Slight rain");

        assert_eq!(describe_condition(3, false, Locale::En).icon, "04n");
    }

    #[test]
    fn unknown_code_falls_back_to_clear_icon() {
        let descriptor = describe_condition(42, false, Locale::En);
        assert_eq!(descriptor.icon, "01n");
        assert_eq!(descriptor.description_key, "unknown");
        assert_eq!(descriptor.label, "Unknown");
    }

    #[test]
    fn clear_conditions_respect_day_night_for_labels_and_icons() {
        assert_eq!(weather_label_for_time(0, true, Locale::En), "Clear sky");
        assert_eq!(weather_label_for_time(0, false, Locale::En), "Clear night");
        assert_eq!(weather_icon(0, IconMode::Ascii, true), "SUN");
        assert_eq!(weather_icon(0, IconMode::Ascii, false), "MON");
    }

    #[test]
    fn labels_are_looked_up_by_description_key() {
        let descriptor = describe_condition(56, true, Locale::Fr);
        assert_eq!(descriptor.description_key, "56");
        assert_eq!(descriptor.label, "Bruine verglaçante légère");
        assert_eq!(weather_label_for_time(57, true, Locale::En), "Dense freezing drizzle");
    }

    #[test]
    fn every_table_code_has_a_category_and_label() {
        for (code, _) in WMO_TABLE {
            assert_ne!(
                weather_code_to_category(*code),
                WeatherCategory::Unknown,
                "code {code}"
            );
            assert_ne!(weather_label_for_time(*code, true, Locale::Fr), "Inconnu");
        }
    }
}

//! Display language for labels the dashboard generates itself.
//!
//! Location names come from the geocoder, which is asked for the same
//! language; everything else is looked up here.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::En,
        }
    }
}

/// `(description key, English, French)`
const CONDITION_LABELS: &[(&str, &str, &str)] = &[
    ("0", "Clear sky", "Ciel dégagé"),
    ("1", "Mainly clear", "Plutôt dégagé"),
    ("2", "Partly cloudy", "Partiellement nuageux"),
    ("3", "Overcast", "Couvert"),
    ("45", "Fog", "Brouillard"),
    ("48", "Depositing rime fog", "Brouillard givrant"),
    ("51", "Light drizzle", "Bruine légère"),
    ("53", "Moderate drizzle", "Bruine modérée"),
    ("55", "Dense drizzle", "Bruine dense"),
    ("56", "Light freezing drizzle", "Bruine verglaçante légère"),
    ("57", "Dense freezing drizzle", "Bruine verglaçante dense"),
    ("61", "Slight rain", "Pluie faible"),
    ("63", "Moderate rain", "Pluie modérée"),
    ("65", "Heavy rain", "Pluie forte"),
    ("66", "Light freezing rain", "Pluie verglaçante légère"),
    ("67", "Heavy freezing rain", "Pluie verglaçante forte"),
    ("71", "Slight snowfall", "Neige faible"),
    ("73", "Moderate snowfall", "Neige modérée"),
    ("75", "Heavy snowfall", "Neige forte"),
    ("77", "Snow grains", "Grains de neige"),
    ("80", "Slight rain showers", "Averses de pluie faibles"),
    ("81", "Moderate rain showers", "Averses de pluie modérées"),
    ("82", "Violent rain showers", "Averses de pluie violentes"),
    ("85", "Slight snow showers", "Averses de neige faibles"),
    ("86", "Heavy snow showers", "Averses de neige fortes"),
    ("95", "Thunderstorm", "Orage"),
    ("96", "Thunderstorm + light hail", "Orage avec grêle légère"),
    ("99", "Thunderstorm + heavy hail", "Orage avec forte grêle"),
];

/// Label for a condition description key. Clear and mainly clear codes
/// have their own night wording.
#[must_use]
pub fn condition_label(key: &str, is_day: bool, locale: Locale) -> &'static str {
    let night = match (key, locale) {
        ("0", Locale::En) => Some("Clear night"),
        ("0", Locale::Fr) => Some("Nuit claire"),
        ("1", Locale::En) => Some("Mainly clear night"),
        ("1", Locale::Fr) => Some("Nuit plutôt claire"),
        _ => None,
    };
    if let (false, Some(label)) = (is_day, night) {
        return label;
    }

    CONDITION_LABELS
        .iter()
        .find(|(candidate, _, _)| *candidate == key)
        .map_or(
            match locale {
                Locale::En => "Unknown",
                Locale::Fr => "Inconnu",
            },
            |&(_, en, fr)| match locale {
                Locale::En => en,
                Locale::Fr => fr,
            },
        )
}

#[must_use]
pub fn weekday_name(day: Weekday, locale: Locale) -> &'static str {
    const EN: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    const FR: [&str; 7] = [
        "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
    ];
    let idx = day.num_days_from_monday() as usize;
    match locale {
        Locale::En => EN[idx],
        Locale::Fr => FR[idx],
    }
}

/// Abbreviated month name; `month0` counts from January = 0.
#[must_use]
pub fn month_abbrev(month0: u32, locale: Locale) -> &'static str {
    const EN: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    const FR: [&str; 12] = [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
        "nov.", "déc.",
    ];
    let idx = (month0 as usize).min(11);
    match locale {
        Locale::En => EN[idx],
        Locale::Fr => FR[idx],
    }
}

/// Name shown for a coordinate lookup that reverse geocoding could not name.
#[must_use]
pub fn current_location_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Current location",
        Locale::Fr => "Position actuelle",
    }
}

#[must_use]
pub fn today_title(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Today",
        Locale::Fr => "Aujourd'hui",
    }
}

#[must_use]
pub fn no_data_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "No forecast data for this window",
        Locale::Fr => "Aucune prévision pour cette période",
    }
}

#[must_use]
pub fn load_failed_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Could not load the forecast. Press R to retry.",
        Locale::Fr => "Impossible de charger la prévision. Appuyez sur R pour réessayer.",
    }
}

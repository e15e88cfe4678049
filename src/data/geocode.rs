use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{i18n::Locale, snapshot::Location};

pub const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const REVERSE_GEOCODE_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("no location matches \"{0}\"")]
    NotFound(String),
    #[error("location query is empty")]
    EmptyQuery,
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    reverse_url: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_urls(GEOCODE_URL, REVERSE_GEOCODE_URL)
    }

    #[must_use]
    pub fn with_base_urls(base_url: impl Into<String>, reverse_url: impl Into<String>) -> Self {
        Self {
            client: super::http_client(8),
            base_url: base_url.into(),
            reverse_url: reverse_url.into(),
        }
    }

    /// Resolves a free-text query such as `"Paris, FR"` to its best match.
    pub async fn resolve(&self, query: &str, locale: Locale) -> Result<Location> {
        let city = city_part(query);
        if city.is_empty() {
            return Err(LocationError::EmptyQuery.into());
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", city.as_str()),
                ("count", "5"),
                ("language", locale.code()),
                ("format", "json"),
            ])
            .send()
            .await
            .context("geocoding request failed")?
            .error_for_status()
            .context("geocoding request returned non-success status")?;

        let payload: GeocodeResponse = response
            .json()
            .await
            .context("failed to decode geocoding response")?;

        let results = payload.results.unwrap_or_default();
        let Some(best) = rank_locations(results, &city).into_iter().next() else {
            return Err(LocationError::NotFound(city).into());
        };
        debug!("geocoded \"{query}\" to {}", best.location.display_name());
        Ok(best.location)
    }

    /// Best-effort `"City, CC"` label for coordinates; failures yield `None`.
    pub async fn reverse(&self, latitude: f64, longitude: f64, locale: Locale) -> Option<String> {
        let response = self
            .client
            .get(&self.reverse_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("localityLanguage", locale.code().to_string()),
            ])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status);

        let payload: ReverseResponse = match response {
            Ok(response) => match response.json().await {
                Ok(payload) => payload,
                Err(err) => {
                    warn!("reverse geocoding payload unreadable: {err}");
                    return None;
                }
            },
            Err(err) => {
                warn!("reverse geocoding failed: {err}");
                return None;
            }
        };
        reverse_label(payload)
    }
}

fn reverse_label(payload: ReverseResponse) -> Option<String> {
    let city = payload.city.filter(|city| !city.trim().is_empty())?;
    Some(match payload.country_code.filter(|code| !code.is_empty()) {
        Some(code) => format!("{city}, {code}"),
        None => city,
    })
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    timezone: Option<String>,
    population: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReverseResponse {
    city: Option<String>,
    country_code: Option<String>,
}

#[derive(Debug, Clone)]
struct ScoredLocation {
    location: Location,
    exact_name_match: bool,
    population: u64,
    api_order: usize,
}

fn rank_locations(results: Vec<GeocodeResult>, city: &str) -> Vec<ScoredLocation> {
    let normalized_city = normalize(city);

    let mut scored: Vec<ScoredLocation> = results
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| ScoredLocation {
            exact_name_match: normalize(&entry.name) == normalized_city,
            population: entry.population.unwrap_or_default(),
            api_order: idx,
            location: Location {
                name: entry.name,
                latitude: entry.latitude,
                longitude: entry.longitude,
                country: entry.country,
                timezone: entry.timezone,
                population: entry.population,
            },
        })
        .collect();

    scored.sort_by(|a, b| {
        b.exact_name_match
            .cmp(&a.exact_name_match)
            .then_with(|| b.population.cmp(&a.population))
            .then_with(|| a.api_order.cmp(&b.api_order))
    });

    scored
}

/// Text before the first comma, trimmed.
fn city_part(query: &str) -> String {
    query.split(',').next().unwrap_or_default().trim().to_string()
}

fn normalize(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub mod forecast;
pub mod geocode;
pub mod geoip;

use std::time::Duration;

use anyhow::Result;
use log::{info, warn};
use reqwest::Client;

use crate::{
    cli::Cli,
    domain::{
        i18n::{Locale, current_location_label},
        snapshot::{Location, Units, WeatherSnapshot},
    },
};
use forecast::ForecastClient;
use geocode::GeocodeClient;

pub const DEFAULT_CITY: &str = "Stockholm";

pub(crate) fn http_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// How the user asked for a location.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Coordinates { latitude: f64, longitude: f64 },
    City(String),
    /// A place resolved earlier, such as a favorite; fetched without geocoding.
    Saved(Location),
    /// Geolocate this machine, falling back to [`DEFAULT_CITY`].
    Auto,
}

impl LocationQuery {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        match (cli.lat, cli.lon, cli.city.as_deref()) {
            (Some(latitude), Some(longitude), _) => Self::Coordinates {
                latitude,
                longitude,
            },
            (_, _, Some(city)) if !city.trim().is_empty() => Self::City(city.trim().to_string()),
            _ => Self::Auto,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherClients {
    pub forecast: ForecastClient,
    pub geocode: GeocodeClient,
    pub geoip_url: String,
}

impl Default for WeatherClients {
    fn default() -> Self {
        Self {
            forecast: ForecastClient::new(),
            geocode: GeocodeClient::new(),
            geoip_url: geoip::GEOIP_URL.to_string(),
        }
    }
}

impl WeatherClients {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        let geocode = match (&cli.geocode_url, &cli.reverse_geocode_url) {
            (None, None) => defaults.geocode,
            (forward, reverse) => GeocodeClient::with_base_urls(
                forward.as_deref().unwrap_or(geocode::GEOCODE_URL),
                reverse.as_deref().unwrap_or(geocode::REVERSE_GEOCODE_URL),
            ),
        };
        Self {
            forecast: cli
                .forecast_url
                .as_ref()
                .map_or(defaults.forecast, ForecastClient::with_base_url),
            geocode,
            geoip_url: cli.geoip_url.clone().unwrap_or(defaults.geoip_url),
        }
    }

    /// Resolves the query to a location, then fetches and validates its forecast.
    /// Geocoded and fallback names are produced in `locale`.
    pub async fn load_snapshot(
        &self,
        query: &LocationQuery,
        units: Units,
        locale: Locale,
    ) -> Result<WeatherSnapshot> {
        match query {
            LocationQuery::Coordinates {
                latitude,
                longitude,
            } => {
                self.load_by_coordinates(*latitude, *longitude, units, locale, None)
                    .await
            }
            LocationQuery::City(name) => {
                let location = self.geocode.resolve(name, locale).await?;
                self.forecast.fetch(location, units).await
            }
            LocationQuery::Saved(location) => self.forecast.fetch(location.clone(), units).await,
            LocationQuery::Auto => match geoip::detect_location(&self.geoip_url).await {
                Some(found) => {
                    let (latitude, longitude) = (found.latitude, found.longitude);
                    self.load_by_coordinates(latitude, longitude, units, locale, Some(found.name))
                        .await
                }
                None => {
                    warn!("geolocation unavailable, falling back to {DEFAULT_CITY}");
                    let location = self.geocode.resolve(DEFAULT_CITY, locale).await?;
                    self.forecast.fetch(location, units).await
                }
            },
        }
    }

    async fn load_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        units: Units,
        locale: Locale,
        fallback_name: Option<String>,
    ) -> Result<WeatherSnapshot> {
        let mut snapshot = self
            .forecast
            .fetch(Location::from_coords(latitude, longitude), units)
            .await?;
        snapshot.location.name = match self.geocode.reverse(latitude, longitude, locale).await {
            Some(name) => name,
            None => fallback_name.unwrap_or_else(|| current_location_label(locale).to_string()),
        };
        info!("loaded forecast for {}", snapshot.location.display_name());
        Ok(snapshot)
    }
}

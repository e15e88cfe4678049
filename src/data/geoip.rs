use log::{debug, warn};
use serde::Deserialize;

use crate::domain::snapshot::Location;

pub const GEOIP_URL: &str = "https://ipapi.co/json/";

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    city: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    country_name: Option<String>,
    timezone: Option<String>,
}

/// Approximate location of this machine from its public IP address.
pub async fn detect_location(url: &str) -> Option<Location> {
    let client = super::http_client(5);
    let response: IpApiResponse = match client.get(url).send().await {
        Ok(response) => response.json().await.ok()?,
        Err(err) => {
            warn!("ip geolocation failed: {err}");
            return None;
        }
    };
    let location = into_location(response)?;
    debug!("ip geolocation resolved {}", location.display_name());
    Some(location)
}

fn into_location(response: IpApiResponse) -> Option<Location> {
    let name = response.city.filter(|city| !city.is_empty())?;
    Some(Location {
        name,
        latitude: response.latitude?,
        longitude: response.longitude?,
        country: response.country_name,
        timezone: response.timezone,
        population: None,
    })
}

//! Forward geocoding: resolve a city name to coordinates.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::GeocodeError;
use crate::model::Coordinates;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
// Nominatim's usage policy asks for an identifying user agent.
const USER_AGENT: &str = "capitals/0.1.0";

/// One search hit; Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    http: Client,
    base_url: String,
}

impl Geocoder {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve `city` to the first matching coordinate pair.
    ///
    /// An empty result array is [`GeocodeError::NotFound`], never a
    /// zero-valued coordinate.
    pub async fn lookup(&self, city: &str) -> Result<Coordinates, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        debug!("geocoding '{city}'");

        let res = self
            .http
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[("q", city), ("format", "json")])
            .send()
            .await?;

        let body = res.text().await?;
        let hits: Vec<SearchHit> = serde_json::from_str(&body)?;

        let Some(hit) = hits.into_iter().next() else {
            warn!("no geocoding results for '{city}'");
            return Err(GeocodeError::NotFound(city.to_string()));
        };

        Ok(Coordinates {
            latitude: hit.lat.parse()?,
            longitude: hit.lon.parse()?,
        })
    }
}

impl Default for Geocoder {
    fn default() -> Self {
        Self::new()
    }
}

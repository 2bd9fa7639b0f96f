//! Client for the countries data provider.
//!
//! One request at startup fetches every country together with its capitals;
//! the parsed list lives for the rest of the process.

use reqwest::Client;
use tracing::debug;

use crate::error::LoadError;
use crate::model::Country;

const DEFAULT_BASE_URL: &str = "https://restcountries.com";

#[derive(Debug, Clone)]
pub struct CountryClient {
    http: Client,
    base_url: String,
}

impl CountryClient {
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

    /// Fetch and decode the full country list.
    ///
    /// The status code is checked before the body is touched, so a failing
    /// endpoint surfaces as [`LoadError::Status`] and never as a JSON error.
    /// No retries; an empty list is rejected.
    pub async fn load_all(&self) -> Result<Vec<Country>, LoadError> {
        let url = format!("{}/v3.1/all", self.base_url);
        debug!("loading country list from {url}");

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }

        let body = res.text().await?;
        let countries: Vec<Country> = serde_json::from_str(&body)?;

        if countries.is_empty() {
            return Err(LoadError::Empty);
        }

        debug!("loaded {} countries", countries.len());
        Ok(countries)
    }
}

impl Default for CountryClient {
    fn default() -> Self {
        Self::new()
    }
}

//! Error taxonomy for the collaborator clients.
//!
//! A failed country load is fatal for the process; geocoding errors are
//! per-tick and recoverable.

use thiserror::Error;

/// Errors from the one-shot country list load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch country data: {0}")]
    Request(#[from] reqwest::Error),

    #[error("country API request failed with status code: {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode country JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("country list is empty")]
    Empty,
}

/// Errors from a single geocoding lookup.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to decode geocoding JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("geocoding returned malformed coordinates: {0}")]
    ParseCoordinates(#[from] std::num::ParseFloatError),

    #[error("no coordinates found for {0}")]
    NotFound(String),
}

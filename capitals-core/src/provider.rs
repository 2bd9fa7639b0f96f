use std::fmt::Debug;

use async_trait::async_trait;

use crate::model::{Coordinates, WeatherReading};

pub mod open_meteo;

pub use open_meteo::OpenMeteoProvider;

/// Fixed query options sent with every current-weather request.
#[derive(Debug, Clone)]
pub struct ForecastOptions {
    pub temperature_unit: String,
    pub timezone: String,
    pub past_days: u8,
    pub hourly_metrics: Vec<String>,
    pub daily_metrics: Vec<String>,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            temperature_unit: "celsius".to_string(),
            timezone: "Asia/Jerusalem".to_string(),
            past_days: 2,
            hourly_metrics: vec!["cloudcover".to_string(), "relativehumidity_2m".to_string()],
            daily_metrics: vec!["temperature_2m_max".to_string()],
        }
    }
}

/// Narrow seam over a concrete weather backend.
///
/// The poller only needs one operation, so the concrete provider can be
/// swapped or mocked behind this trait.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(
        &self,
        coordinates: Coordinates,
        options: &ForecastOptions,
    ) -> anyhow::Result<WeatherReading>;
}

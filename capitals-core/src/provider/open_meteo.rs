use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{Coordinates, WeatherReading};

use super::{ForecastOptions, WeatherProvider};

const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    base_url: String,
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different host (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    winddirection: f64,
    weathercode: i32,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: Option<OmCurrentWeather>,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current_weather(
        &self,
        coordinates: Coordinates,
        options: &ForecastOptions,
    ) -> Result<WeatherReading> {
        let url = format!("{}/v1/forecast", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("temperature_unit", options.temperature_unit.clone()),
                ("timezone", options.timezone.clone()),
                ("past_days", options.past_days.to_string()),
                ("hourly", options.hourly_metrics.join(",")),
                ("daily", options.daily_metrics.join(",")),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OmForecastResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo JSON")?;

        let current = parsed
            .current_weather
            .ok_or_else(|| anyhow!("Open-Meteo response contained no current weather"))?;

        Ok(WeatherReading {
            temperature_c: current.temperature,
            wind_speed: current.windspeed,
            wind_direction: current.winddirection,
            weather_code: current.weathercode,
            fetched_at: Utc::now(),
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn berlin() -> Coordinates {
        Coordinates {
            latitude: 52.52,
            longitude: 13.405,
        }
    }

    #[tokio::test]
    async fn current_weather_sends_fixed_options_and_parses_temperature() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "52.52"))
            .and(query_param("longitude", "13.405"))
            .and(query_param("current_weather", "true"))
            .and(query_param("temperature_unit", "celsius"))
            .and(query_param("timezone", "Asia/Jerusalem"))
            .and(query_param("past_days", "2"))
            .and(query_param("hourly", "cloudcover,relativehumidity_2m"))
            .and(query_param("daily", "temperature_2m_max"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current_weather": {
                    "temperature": 21.3,
                    "windspeed": 3.4,
                    "winddirection": 210.0,
                    "weathercode": 2,
                    "time": "2026-08-06T12:00"
                }
            })))
            .mount(&server)
            .await;

        let reading = OpenMeteoProvider::with_base_url(server.uri())
            .current_weather(berlin(), &ForecastOptions::default())
            .await
            .expect("fetch should succeed");

        assert_eq!(reading.temperature_c, 21.3);
        assert_eq!(reading.weather_code, 2);
    }

    #[tokio::test]
    async fn current_weather_fails_when_current_block_is_missing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hourly": { "cloudcover": [12, 40] }
            })))
            .mount(&server)
            .await;

        let err = OpenMeteoProvider::with_base_url(server.uri())
            .current_weather(berlin(), &ForecastOptions::default())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("no current weather"));
    }

    #[tokio::test]
    async fn current_weather_reports_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
            .mount(&server)
            .await;

        let err = OpenMeteoProvider::with_base_url(server.uri())
            .current_weather(berlin(), &ForecastOptions::default())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("429"));
    }
}

use chrono::{DateTime, Utc};
use rand::RngExt;
use serde::Deserialize;

/// One country record as served by the countries provider.
///
/// The full list is loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub name: CountryName,
    /// Capital cities; a handful of countries legitimately have none.
    #[serde(default)]
    pub capital: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryName {
    pub common: String,
}

/// Latitude/longitude pair resolved by the geocoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current weather as reported by a provider.
///
/// The poller only consumes `temperature_c`; the remaining fields ride along
/// from the provider response.
#[derive(Debug, Clone)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub weather_code: i32,
    pub fetched_at: DateTime<Utc>,
}

/// Capital name substituted for countries that list none.
pub const UNKNOWN_CAPITAL: &str = "Unknown";

/// Pick a uniformly random country and return its first capital, or
/// [`UNKNOWN_CAPITAL`] when the country has none.
///
/// Panics on an empty slice; the loader guarantees a non-empty list.
pub fn random_capital<'a, R: RngExt + ?Sized>(countries: &'a [Country], rng: &mut R) -> &'a str {
    let index = rng.random_range(0..countries.len());
    countries[index]
        .capital
        .first()
        .map_or(UNKNOWN_CAPITAL, String::as_str)
}

//! Core library for the `capitals` CLI.
//!
//! This crate defines:
//! - Shared domain models (countries, coordinates, weather readings)
//! - Clients for the country-list and geocoding services
//! - Abstraction over weather providers
//! - The polling loop that ties the three together
//!
//! It is used by `capitals-cli`, but can also be reused by other binaries or services.

pub mod countries;
pub mod error;
pub mod geocode;
pub mod model;
pub mod poller;
pub mod provider;

pub use countries::CountryClient;
pub use error::{GeocodeError, LoadError};
pub use geocode::Geocoder;
pub use model::{Coordinates, Country, WeatherReading, random_capital};
pub use poller::Poller;
pub use provider::{ForecastOptions, OpenMeteoProvider, WeatherProvider};

//! Timer-driven fetch-decode-print loop.
//!
//! Each tick picks a random capital, resolves its coordinates, fetches
//! current weather, and prints one line. Ticks are independent; the only
//! shared state is the read-only country list.

use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::geocode::Geocoder;
use crate::model::{Country, random_capital};
use crate::provider::{ForecastOptions, WeatherProvider};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct Poller {
    countries: Vec<Country>,
    geocoder: Geocoder,
    provider: Box<dyn WeatherProvider>,
    options: ForecastOptions,
    interval: Duration,
}

impl Poller {
    /// Build a poller over an already-loaded, non-empty country list.
    pub fn new(
        countries: Vec<Country>,
        geocoder: Geocoder,
        provider: Box<dyn WeatherProvider>,
    ) -> Self {
        Self {
            countries,
            geocoder,
            provider,
            options: ForecastOptions::default(),
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Run until `cancel` fires.
    ///
    /// The first tick fires one full interval after start. A tick already in
    /// flight runs to completion; cancellation is observed again before the
    /// next tick starts, so the loop stops within one interval.
    pub async fn run(&self, cancel: CancellationToken) {
        let start = time::Instant::now() + self.interval;
        let mut ticker = time::interval_at(start, self.interval);
        // A slow tick skips missed fires instead of bursting to catch up.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.tick().await,
                _ = cancel.cancelled() => {
                    debug!("cancellation received, stopping poller");
                    return;
                }
            }
        }
    }

    async fn tick(&self) {
        let city = random_capital(&self.countries, &mut rand::rng());

        let coordinates = match self.geocoder.lookup(city).await {
            Ok(coordinates) => coordinates,
            Err(err) => {
                // Geocoding failures are printed and the tick is abandoned;
                // the loop itself keeps running.
                println!("{err}");
                return;
            }
        };

        match self.provider.current_weather(coordinates, &self.options).await {
            Ok(reading) => {
                println!(
                    "the Temperature in {} is: {:.1}°C",
                    city, reading.temperature_c
                );
            }
            Err(err) => {
                // A failed fetch drops the reading for this tick; stdout
                // stays quiet.
                debug!("weather fetch for {city} failed: {err:#}");
            }
        }
    }
}

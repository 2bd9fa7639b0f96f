use std::time::Duration;

use anyhow::Context;
use capitals_core::{CountryClient, Geocoder, OpenMeteoProvider, Poller};
use clap::Parser;
use tokio_util::sync::CancellationToken;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "capitals", version, about = "Random capital weather sampler")]
pub struct Cli {
    /// Seconds between weather samples.
    #[arg(long, default_value_t = 5)]
    pub interval: u64,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        println!("Loading random capitals...");

        // A failed load is fatal; everything after this point is recoverable
        // per tick.
        let countries = CountryClient::new()
            .load_all()
            .await
            .context("Error loading cities")?;

        let poller = Poller::new(
            countries,
            Geocoder::new(),
            Box::new(OpenMeteoProvider::new()),
        )
        .with_interval(Duration::from_secs(self.interval));

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::debug!("interrupt received");
                token.cancel();
            }
        });

        poller.run(cancel).await;
        Ok(())
    }
}

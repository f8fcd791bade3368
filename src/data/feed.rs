use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;
use thiserror::Error;

use crate::config::{FEED, FetchProfile};
use crate::data::fixture;
use crate::models::Quote;

/// Options for one simulated fetch.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// Probability in [0,1] that the fetch fails.
    pub fail_rate: f64,
    pub latency: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        (&FEED.default).into()
    }
}

impl From<&FetchProfile> for FetchOptions {
    fn from(profile: &FetchProfile) -> Self {
        Self {
            fail_rate: profile.fail_rate,
            latency: Duration::from_millis(profile.latency_ms),
        }
    }
}

/// The single failure kind this app can produce.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Simulated network error")]
    SimulatedNetwork,
}

/// Uniform [0,1) roll deciding whether a simulated fetch fails.
/// Injected so tests can force either branch.
pub trait FailureDice: Send + Sync {
    fn roll(&self) -> f64;
}

/// Production dice backed by the thread-local rng.
pub struct ThreadDice;

impl FailureDice for ThreadDice {
    fn roll(&self) -> f64 {
        rand::rng().random()
    }
}

/// Abstract interface for fetching quotes.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the full quote set, honoring the simulated latency and
    /// failure probability in `options`.
    async fn fetch_quotes(&self, options: FetchOptions) -> Result<Vec<Quote>>;
}

/// The only data source in the app: wait out the latency, maybe fail,
/// otherwise hand the caller its own copy of the dataset.
pub struct MockQuoteFeed {
    dataset: Vec<Quote>,
    dice: Box<dyn FailureDice>,
}

impl MockQuoteFeed {
    pub fn new() -> Self {
        Self::with_parts(fixture::snapshot(), Box::new(ThreadDice))
    }

    /// Full dependency injection - tests substitute both the dataset and
    /// the randomness source.
    pub fn with_parts(dataset: Vec<Quote>, dice: Box<dyn FailureDice>) -> Self {
        Self { dataset, dice }
    }
}

impl Default for MockQuoteFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteSource for MockQuoteFeed {
    async fn fetch_quotes(&self, options: FetchOptions) -> Result<Vec<Quote>> {
        tokio::time::sleep(options.latency).await;

        if self.dice.roll() < options.fail_rate {
            log::info!("simulated fetch failure (p={})", options.fail_rate);
            return Err(FeedError::SimulatedNetwork.into());
        }

        // Clone, not a shared reference: callers must never be able to
        // mutate the feed's own dataset.
        Ok(self.dataset.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDice(f64);

    impl FailureDice for FixedDice {
        fn roll(&self) -> f64 {
            self.0
        }
    }

    fn instant(fail_rate: f64) -> FetchOptions {
        FetchOptions {
            fail_rate,
            latency: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn certain_failure_yields_the_simulated_network_error() {
        let feed = MockQuoteFeed::with_parts(fixture::snapshot(), Box::new(FixedDice(0.0)));
        let err = feed.fetch_quotes(instant(1.0)).await.unwrap_err();
        assert_eq!(err.to_string(), "Simulated network error");
    }

    #[tokio::test]
    async fn zero_fail_rate_always_succeeds_with_all_records() {
        // Even the worst possible roll stays >= a fail_rate of zero.
        let feed = MockQuoteFeed::with_parts(fixture::snapshot(), Box::new(FixedDice(0.0)));
        let records = feed.fetch_quotes(instant(0.0)).await.unwrap();
        assert_eq!(records.len(), 12);
    }

    #[tokio::test]
    async fn callers_receive_an_independent_copy() {
        let feed = MockQuoteFeed::with_parts(fixture::snapshot(), Box::new(FixedDice(0.99)));

        let mut first = feed.fetch_quotes(instant(0.2)).await.unwrap();
        first[0].trading_symbol = "MUTATED".to_string();

        let second = feed.fetch_quotes(instant(0.2)).await.unwrap();
        assert_eq!(second[0].trading_symbol, "RELIANCE");
    }

    #[tokio::test]
    async fn injected_dataset_is_served_back() {
        let mut custom = fixture::snapshot();
        custom.truncate(3);
        let feed = MockQuoteFeed::with_parts(custom, Box::new(FixedDice(0.5)));

        let records = feed.fetch_quotes(instant(0.0)).await.unwrap();
        assert_eq!(records.len(), 3);
    }
}

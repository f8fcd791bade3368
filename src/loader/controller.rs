use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use anyhow::Result;
use chrono::Utc;
use tokio::runtime::Builder;

use crate::data::{FetchOptions, QuoteSource};
use crate::loader::LoadState;
use crate::models::Quote;

/// Shown when a failure somehow carries no message of its own.
const FALLBACK_FAILURE_MESSAGE: &str = "Failed";

struct LoadEvent {
    generation: u64,
    outcome: Result<Vec<Quote>>,
}

/// Owns the load lifecycle: `Idle -> Loading -> {Loaded | Failed} -> Loading -> ...`
///
/// Each `load` bumps a generation counter captured by the in-flight fetch.
/// A result is applied only while its generation is still the latest, so a
/// slow response can never clobber the state of a load started after it.
pub struct LoadController {
    source: Arc<dyn QuoteSource>,
    /// What `retry` re-runs: the options the initial load was issued with.
    initial_options: FetchOptions,
    state: LoadState,
    generation: u64,
    /// Records from the last success, kept through a failed refresh.
    last_good: Vec<Quote>,
    tx: Sender<LoadEvent>,
    rx: Receiver<LoadEvent>,
}

impl LoadController {
    pub fn new(source: Arc<dyn QuoteSource>, initial_options: FetchOptions) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            initial_options,
            state: LoadState::Idle,
            generation: 0,
            last_good: Vec::new(),
            tx,
            rx,
        }
    }

    /// Start a new load. Any load still in flight is superseded; its
    /// eventual result arrives with a stale generation and is dropped.
    pub fn load(&mut self, options: FetchOptions) {
        let generation = self.begin();
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        thread::spawn(move || {
            let outcome = match Builder::new_current_thread().enable_time().build() {
                Ok(rt) => rt.block_on(source.fetch_quotes(options)),
                Err(e) => Err(e.into()),
            };
            // Receiver gone means the view unmounted; nothing left to update.
            let _ = tx.send(LoadEvent {
                generation,
                outcome,
            });
        });
    }

    /// Retry re-runs the same options the initial load used.
    pub fn retry(&mut self) {
        self.load(self.initial_options);
    }

    /// Drain completion events (called once per frame on the UI thread).
    /// Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.rx.try_recv() {
            changed |= self.apply(event.generation, event.outcome);
        }
        changed
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Records from the most recent successful load, whatever the current
    /// phase. Empty until the first success.
    pub fn retained(&self) -> &[Quote] {
        match &self.state {
            LoadState::Loaded(records) => records,
            _ => &self.last_good,
        }
    }

    // --- State machine core (exercised directly by the unit tests) ---

    /// Transition to `Loading`, clearing any prior error, and hand back the
    /// generation token the eventual result must present.
    pub(crate) fn begin(&mut self) -> u64 {
        self.generation += 1;
        if let LoadState::Loaded(records) = std::mem::replace(&mut self.state, LoadState::Loading) {
            self.last_good = records;
        }
        self.generation
    }

    /// Apply a completed fetch. Stale generations are ignored.
    pub(crate) fn apply(&mut self, generation: u64, outcome: Result<Vec<Quote>>) -> bool {
        if generation != self.generation {
            log::info!(
                "dropping stale load result (generation {generation}, latest {})",
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(mut records) => {
                // The fixture carries stale timestamps; stamping "now"
                // models data that just arrived.
                let now = Utc::now();
                for quote in &mut records {
                    quote.last_updated_timestamp = now;
                }
                log::info!("loaded {} quotes", records.len());
                self.state = LoadState::Loaded(records);
            }
            Err(err) => {
                let mut message = err.to_string();
                if message.trim().is_empty() {
                    message = FALLBACK_FAILURE_MESSAGE.to_string();
                }
                log::warn!("load failed: {message}");
                self.state = LoadState::Failed(message);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use crate::data::{FailureDice, FeedError, MockQuoteFeed, fixture};

    struct FixedDice(f64);

    impl FailureDice for FixedDice {
        fn roll(&self) -> f64 {
            self.0
        }
    }

    fn instant_options() -> FetchOptions {
        FetchOptions {
            fail_rate: 0.0,
            latency: Duration::ZERO,
        }
    }

    fn controller() -> LoadController {
        let feed = MockQuoteFeed::with_parts(fixture::snapshot(), Box::new(FixedDice(0.99)));
        LoadController::new(Arc::new(feed), instant_options())
    }

    #[test]
    fn idle_to_loading_to_loaded_with_stamped_records() {
        let mut c = controller();
        assert_eq!(*c.state(), LoadState::Idle);

        let before = Utc::now();
        let generation = c.begin();
        assert!(c.state().is_loading());

        assert!(c.apply(generation, Ok(fixture::snapshot())));
        let records = c.state().records().expect("should be loaded");
        assert_eq!(records.len(), 12);
        for quote in records {
            assert!(quote.last_updated_timestamp >= before);
        }
    }

    #[test]
    fn failure_stores_the_simulated_error_message() {
        let mut c = controller();
        let generation = c.begin();
        assert!(c.apply(generation, Err(FeedError::SimulatedNetwork.into())));
        assert_eq!(c.state().error(), Some("Simulated network error"));
    }

    #[test]
    fn blank_failure_message_falls_back_to_generic() {
        let mut c = controller();
        let generation = c.begin();
        c.apply(generation, Err(anyhow::anyhow!("   ")));
        assert_eq!(c.state().error(), Some("Failed"));
    }

    #[test]
    fn starting_a_load_clears_a_prior_error() {
        let mut c = controller();
        let generation = c.begin();
        c.apply(generation, Err(FeedError::SimulatedNetwork.into()));
        assert!(c.state().error().is_some());

        c.begin();
        assert!(c.state().is_loading());
        assert!(c.state().error().is_none());
    }

    #[test]
    fn retry_after_failure_recovers_to_loaded() {
        let mut c = controller();
        let generation = c.begin();
        c.apply(generation, Err(FeedError::SimulatedNetwork.into()));

        let generation = c.begin();
        assert!(c.apply(generation, Ok(fixture::snapshot())));
        assert_eq!(c.state().records().map(<[Quote]>::len), Some(12));
    }

    #[test]
    fn stale_result_never_overwrites_a_newer_load() {
        let mut c = controller();
        let first = c.begin();
        let second = c.begin();

        // The older load resolves late - with records that must not land.
        let mut stale = fixture::snapshot();
        stale.truncate(1);
        assert!(!c.apply(first, Ok(stale)));
        assert!(c.state().is_loading());

        assert!(c.apply(second, Ok(fixture::snapshot())));
        assert_eq!(c.state().records().map(<[Quote]>::len), Some(12));
    }

    #[test]
    fn failed_refresh_keeps_the_previous_records_retained() {
        let mut c = controller();
        let generation = c.begin();
        c.apply(generation, Ok(fixture::snapshot()));

        let generation = c.begin();
        c.apply(generation, Err(FeedError::SimulatedNetwork.into()));

        assert!(c.state().error().is_some());
        assert_eq!(c.retained().len(), 12);
    }

    #[test]
    fn threaded_load_polls_into_loaded_state() {
        let mut c = controller();
        c.load(instant_options());
        assert!(c.state().is_loading());

        let deadline = Instant::now() + Duration::from_secs(5);
        while !matches!(c.state(), LoadState::Loaded(_)) {
            assert!(Instant::now() < deadline, "load never completed");
            c.poll();
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(c.state().records().map(<[Quote]>::len), Some(12));
    }
}

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often the watcher re-checks its stop flag between ticks.
const STOP_POLL: Duration = Duration::from_millis(25);

/// Recurring tick counter that keeps relative-time labels honest.
///
/// A scoped resource: `start` spawns the watcher thread, `Drop` signals it
/// and joins. Ticks only invalidate derived views - they never fetch.
pub struct RefreshTicker {
    ticks: Arc<AtomicU64>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTicker {
    pub fn start(interval: Duration) -> Self {
        let ticks = Arc::new(AtomicU64::new(0));
        let stop = Arc::new(AtomicBool::new(false));

        let thread_ticks = Arc::clone(&ticks);
        let thread_stop = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            let mut next = Instant::now() + interval;
            while !thread_stop.load(Ordering::Relaxed) {
                if Instant::now() >= next {
                    thread_ticks.fetch_add(1, Ordering::Relaxed);
                    next += interval;
                }
                thread::sleep(STOP_POLL.min(interval));
            }
        });

        Self {
            ticks,
            stop,
            handle: Some(handle),
        }
    }

    /// Monotonically increasing tick count since start.
    pub fn count(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
}

impl Drop for RefreshTicker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wait_for_tick(ticks: &AtomicU64, at_least: u64) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while ticks.load(Ordering::Relaxed) < at_least {
            assert!(Instant::now() < deadline, "ticker never ticked");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn ticks_advance_while_running() {
        let ticker = RefreshTicker::start(Duration::from_millis(20));
        wait_for_tick(&ticker.ticks, 2);
        assert!(ticker.count() >= 2);
    }

    #[test]
    fn dropping_stops_the_ticks_and_releases_the_thread() {
        let ticker = RefreshTicker::start(Duration::from_millis(10));
        let ticks = Arc::clone(&ticker.ticks);
        wait_for_tick(&ticks, 1);

        drop(ticker); // joins the watcher

        let frozen = ticks.load(Ordering::Relaxed);
        thread::sleep(Duration::from_millis(100));
        assert_eq!(ticks.load(Ordering::Relaxed), frozen);

        // The watcher dropped its handle on the counter too.
        assert_eq!(Arc::strong_count(&ticks), 1);
    }
}

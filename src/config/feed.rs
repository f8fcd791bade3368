/// One named combination of failure probability and simulated latency.
pub struct FetchProfile {
    pub fail_rate: f64,
    pub latency_ms: u64,
}

pub struct FeedConfig {
    /// Fallback profile when a caller supplies no options.
    pub default: FetchProfile,
    /// Initial mount load and every Retry press.
    pub initial: FetchProfile,
    /// Manual Refresh button (deliberately flakier and faster).
    pub refresh: FetchProfile,
}

pub const FEED: FeedConfig = FeedConfig {
    default: FetchProfile {
        fail_rate: 0.2,
        latency_ms: 800,
    },
    initial: FetchProfile {
        fail_rate: 0.15,
        latency_ms: 900,
    },
    refresh: FetchProfile {
        fail_rate: 0.25,
        latency_ms: 700,
    },
};

pub struct RefreshConfig {
    /// Seconds between ticks of the relative-time refresh counter.
    pub interval_secs: u64,
}

pub const REFRESH: RefreshConfig = RefreshConfig { interval_secs: 15 };

//! Configuration module for the watchlist application.

// Can all be private now because we have a public re-export.
mod feed;
mod refresh;

// Re-export commonly used items
pub use feed::{FEED, FeedConfig, FetchProfile};
pub use refresh::{REFRESH, RefreshConfig};

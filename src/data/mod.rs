mod feed;
pub mod fixture;

pub use feed::{FailureDice, FeedError, FetchOptions, MockQuoteFeed, QuoteSource, ThreadDice};

#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod loader;
pub mod models;
pub mod refresh;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use data::{FeedError, FetchOptions, MockQuoteFeed, QuoteSource};
pub use loader::{LoadController, LoadState};
pub use models::{Quote, SortDirection, SortKey, derive_view};
pub use refresh::RefreshTicker;
pub use ui::WatchlistApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Probability in [0,1] that a simulated fetch fails
    #[arg(long)]
    pub fail_rate: Option<f64>,

    /// Simulated fetch latency in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Seconds between refresh ticks (keeps "N min ago" labels honest)
    #[arg(long)]
    pub refresh_secs: Option<u64>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> WatchlistApp {
    WatchlistApp::new(cc, args)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One simulated stock's snapshot: two market prices, the day's percentage
/// change, and when the record was last refreshed.
///
/// Field names mirror the upstream JSON keys (camelCase on the wire), so the
/// fixture deserializes without any mapping layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: u32,
    pub trading_symbol: String,
    pub capital_market_last_traded_price: f64,
    pub futures_last_traded_price: f64,
    pub percentage_change: f64,
    pub last_updated_timestamp: DateTime<Utc>,
}

impl Quote {
    /// True if the symbol contains `needle` ignoring case. `needle` must
    /// already be trimmed and lowercased by the caller.
    pub(crate) fn symbol_contains(&self, needle: &str) -> bool {
        self.trading_symbol.to_lowercase().contains(needle)
    }
}

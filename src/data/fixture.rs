//! The canonical mock dataset.
//!
//! Kept verbatim in the upstream JSON shape so `snapshot()` is a plain
//! deserialize - which also makes every snapshot an independent deep copy.

use crate::models::Quote;

const FIXTURE_JSON: &str = r#"[
  {
    "id": 1,
    "tradingSymbol": "RELIANCE",
    "capitalMarketLastTradedPrice": 2915.45,
    "futuresLastTradedPrice": 2921.1,
    "percentageChange": 0.84,
    "lastUpdatedTimestamp": "2025-09-05T06:40:02Z"
  },
  {
    "id": 2,
    "tradingSymbol": "TCS",
    "capitalMarketLastTradedPrice": 3712.2,
    "futuresLastTradedPrice": 3715.75,
    "percentageChange": -0.45,
    "lastUpdatedTimestamp": "2025-09-05T06:42:02Z"
  },
  {
    "id": 3,
    "tradingSymbol": "INFY",
    "capitalMarketLastTradedPrice": 1360.5,
    "futuresLastTradedPrice": 1363.25,
    "percentageChange": 1.12,
    "lastUpdatedTimestamp": "2025-09-05T06:30:02Z"
  },
  {
    "id": 4,
    "tradingSymbol": "HDFC",
    "capitalMarketLastTradedPrice": 2620.3,
    "futuresLastTradedPrice": 2625.0,
    "percentageChange": -0.22,
    "lastUpdatedTimestamp": "2025-09-05T06:44:02Z"
  },
  {
    "id": 5,
    "tradingSymbol": "ICICI",
    "capitalMarketLastTradedPrice": 880.1,
    "futuresLastTradedPrice": 882.6,
    "percentageChange": 0.5,
    "lastUpdatedTimestamp": "2025-09-05T06:38:02Z"
  },
  {
    "id": 6,
    "tradingSymbol": "LT",
    "capitalMarketLastTradedPrice": 2430.8,
    "futuresLastTradedPrice": 2436.4,
    "percentageChange": 0.12,
    "lastUpdatedTimestamp": "2025-09-05T06:36:02Z"
  },
  {
    "id": 7,
    "tradingSymbol": "AXIS",
    "capitalMarketLastTradedPrice": 740.4,
    "futuresLastTradedPrice": 742.0,
    "percentageChange": -0.85,
    "lastUpdatedTimestamp": "2025-09-05T06:20:02Z"
  },
  {
    "id": 8,
    "tradingSymbol": "BHARTI",
    "capitalMarketLastTradedPrice": 780.6,
    "futuresLastTradedPrice": 783.2,
    "percentageChange": 2.5,
    "lastUpdatedTimestamp": "2025-09-05T06:28:02Z"
  },
  {
    "id": 9,
    "tradingSymbol": "HINDUNILVR",
    "capitalMarketLastTradedPrice": 2400.0,
    "futuresLastTradedPrice": 2403.5,
    "percentageChange": 0.0,
    "lastUpdatedTimestamp": "2025-09-05T06:26:02Z"
  },
  {
    "id": 10,
    "tradingSymbol": "WIPRO",
    "capitalMarketLastTradedPrice": 380.2,
    "futuresLastTradedPrice": 381.0,
    "percentageChange": 0.7,
    "lastUpdatedTimestamp": "2025-09-05T06:12:02Z"
  },
  {
    "id": 11,
    "tradingSymbol": "MARUTI",
    "capitalMarketLastTradedPrice": 8600.0,
    "futuresLastTradedPrice": 8610.5,
    "percentageChange": -1.2,
    "lastUpdatedTimestamp": "2025-09-05T06:10:02Z"
  },
  {
    "id": 12,
    "tradingSymbol": "SBIN",
    "capitalMarketLastTradedPrice": 540.5,
    "futuresLastTradedPrice": 542.0,
    "percentageChange": 0.33,
    "lastUpdatedTimestamp": "2025-09-05T06:08:02Z"
  }
]"#;

/// A fresh, independent copy of the canonical dataset.
pub fn snapshot() -> Vec<Quote> {
    serde_json::from_str(FIXTURE_JSON).expect("fixture JSON is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_has_twelve_records_with_unique_ids_and_symbols() {
        let records = snapshot();
        assert_eq!(records.len(), 12);

        let ids: HashSet<u32> = records.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), records.len());

        let symbols: HashSet<&str> = records.iter().map(|q| q.trading_symbol.as_str()).collect();
        assert_eq!(symbols.len(), records.len());
    }

    #[test]
    fn snapshots_are_independent_copies() {
        let mut first = snapshot();
        first[0].trading_symbol = "MUTATED".to_string();
        first[0].capital_market_last_traded_price = -1.0;

        let second = snapshot();
        assert_eq!(second[0].trading_symbol, "RELIANCE");
        assert_eq!(second[0].capital_market_last_traded_price, 2915.45);
    }
}

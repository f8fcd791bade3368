use strum_macros::{Display, EnumIter};

use crate::models::Quote;

/// Numeric field the grid can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum SortKey {
    #[strum(to_string = "Percentage Change")]
    PercentageChange,

    #[strum(to_string = "Capital Market LTP")]
    CapitalMarketLtp,

    #[strum(to_string = "Futures LTP")]
    FuturesLtp,
}

impl SortKey {
    fn value_of(&self, quote: &Quote) -> f64 {
        match self {
            SortKey::PercentageChange => quote.percentage_change,
            SortKey::CapitalMarketLtp => quote.capital_market_last_traded_price,
            SortKey::FuturesLtp => quote.futures_last_traded_price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum SortDirection {
    #[strum(to_string = "Asc")]
    Ascending,

    #[default]
    #[strum(to_string = "Desc")]
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Pure filter/sort pipeline from raw records to the rows the grid renders.
///
/// `tick` is the periodic refresh counter. It never changes filtering or
/// ordering - it is an input solely so callers recompute (and with them the
/// "N min ago" labels) every time it advances.
pub fn derive_view(
    records: &[Quote],
    search_text: &str,
    sort_key: Option<SortKey>,
    sort_dir: SortDirection,
    _tick: u64,
) -> Vec<Quote> {
    let needle = search_text.trim().to_lowercase();

    let mut rows: Vec<Quote> = records
        .iter()
        .filter(|q| needle.is_empty() || q.symbol_contains(&needle))
        .cloned()
        .collect();

    if let Some(key) = sort_key {
        // sort_by is stable, so equal values keep their filtered order.
        rows.sort_by(|a, b| {
            let av = key.value_of(a);
            let bv = key.value_of(b);
            match sort_dir {
                SortDirection::Ascending => av.total_cmp(&bv),
                SortDirection::Descending => bv.total_cmp(&av),
            }
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixture;
    use chrono::Utc;

    fn quote(id: u32, symbol: &str, cm: f64, fut: f64, pct: f64) -> Quote {
        Quote {
            id,
            trading_symbol: symbol.to_string(),
            capital_market_last_traded_price: cm,
            futures_last_traded_price: fut,
            percentage_change: pct,
            last_updated_timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_search_and_no_sort_key_is_identity() {
        let records = fixture::snapshot();
        let view = derive_view(&records, "", None, SortDirection::Descending, 0);
        assert_eq!(view, records);
    }

    #[test]
    fn whitespace_only_search_is_identity() {
        let records = fixture::snapshot();
        let view = derive_view(&records, "   ", None, SortDirection::Descending, 0);
        assert_eq!(view, records);
    }

    #[test]
    fn search_is_case_insensitive_substring_on_symbol() {
        let records = fixture::snapshot();
        let view = derive_view(&records, "tcs", None, SortDirection::Descending, 0);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].trading_symbol, "TCS");

        // Every returned symbol matches; every excluded one does not.
        let view = derive_view(&records, "in", None, SortDirection::Descending, 0);
        for q in &view {
            assert!(q.trading_symbol.to_lowercase().contains("in"));
        }
        let kept: Vec<u32> = view.iter().map(|q| q.id).collect();
        for q in records.iter().filter(|q| !kept.contains(&q.id)) {
            assert!(!q.trading_symbol.to_lowercase().contains("in"));
        }
    }

    #[test]
    fn sort_descending_is_default_and_numeric() {
        let records = fixture::snapshot();
        let view = derive_view(
            &records,
            "",
            Some(SortKey::PercentageChange),
            SortDirection::Descending,
            0,
        );
        for pair in view.windows(2) {
            assert!(pair[0].percentage_change >= pair[1].percentage_change);
        }
    }

    #[test]
    fn sort_ascending_orders_each_numeric_key() {
        let records = fixture::snapshot();
        for key in [
            SortKey::PercentageChange,
            SortKey::CapitalMarketLtp,
            SortKey::FuturesLtp,
        ] {
            let view = derive_view(&records, "", Some(key), SortDirection::Ascending, 0);
            for pair in view.windows(2) {
                assert!(key.value_of(&pair[0]) <= key.value_of(&pair[1]));
            }
        }
    }

    #[test]
    fn equal_sort_values_keep_filtered_order() {
        let records = vec![
            quote(1, "AAA", 100.0, 10.0, 0.5),
            quote(2, "BBB", 100.0, 20.0, 0.5),
            quote(3, "CCC", 100.0, 30.0, 0.5),
        ];
        let view = derive_view(
            &records,
            "",
            Some(SortKey::CapitalMarketLtp),
            SortDirection::Descending,
            0,
        );
        let ids: Vec<u32> = view.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn tick_never_changes_the_result() {
        let records = fixture::snapshot();
        let a = derive_view(
            &records,
            "a",
            Some(SortKey::FuturesLtp),
            SortDirection::Ascending,
            0,
        );
        let b = derive_view(
            &records,
            "a",
            Some(SortKey::FuturesLtp),
            SortDirection::Ascending,
            999,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn input_records_are_never_mutated() {
        let records = fixture::snapshot();
        let before = records.clone();
        let _ = derive_view(
            &records,
            "reli",
            Some(SortKey::PercentageChange),
            SortDirection::Ascending,
            3,
        );
        assert_eq!(records, before);
    }

    #[test]
    fn direction_toggle_round_trips() {
        assert_eq!(
            SortDirection::Descending.toggle(),
            SortDirection::Ascending
        );
        assert_eq!(
            SortDirection::Descending.toggle().toggle(),
            SortDirection::Descending
        );
    }
}

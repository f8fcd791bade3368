/// Every user-facing string in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub search_hint: &'static str,
    pub sort_by: &'static str,
    pub refresh: &'static str,
    pub retry: &'static str,
    pub close: &'static str,
    pub details_suffix: &'static str,
    pub error_generic: &'static str,

    // Detail drawer table
    pub label_capital_market: &'static str,
    pub label_futures: &'static str,
    pub label_change: &'static str,
    pub label_last_updated: &'static str,

    pub footer: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Stock Watchlist Lite",
    search_hint: "Search symbol...",
    sort_by: "Sort by",
    refresh: "Refresh",
    retry: "Retry",
    close: "Close",
    details_suffix: "Details",
    error_generic: "Something went wrong.",

    label_capital_market: "Capital Market LTP",
    label_futures: "Futures LTP",
    label_change: "Change",
    label_last_updated: "Last Updated",

    footer: "Simulated quotes only - no live market data.",
};

use chrono::{DateTime, Utc};

// Time Helper functions

/// Human "how long ago" label for a timestamp.
/// Ladder: "just now" (<10s), "N sec ago", "N min ago", "N hour(s) ago",
/// "N day(s) ago".
pub fn relative_time_from(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    // A timestamp from the future reads as "just now".
    let secs = (now - timestamp).num_seconds().max(0);

    if secs < 10 {
        return "just now".to_string();
    }
    if secs < 60 {
        return format!("{} sec ago", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{} min ago", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{} hour{} ago", hours, plural(hours));
    }
    let days = hours / 24;
    format!("{} day{} ago", days, plural(days))
}

fn plural(n: i64) -> &'static str {
    if n > 1 { "s" } else { "" }
}

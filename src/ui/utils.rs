use eframe::egui::{Color32, Context, Visuals};

use crate::ui::config::UI_CONFIG;

/// Formats a number the way the cards expect: thousands separators, at most
/// two fraction digits, trailing zeros trimmed (2400 -> "2,400",
/// 8610.5 -> "8,610.5").
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;

    let s = format!("{:.2}", rounded.abs());
    let s = s.trim_end_matches('0').trim_end_matches('.');
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };

    // Group the integer digits in threes.
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Signed percentage label, e.g. "+0.84%" / "-0.45%" / "0%".
pub fn format_percentage(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{}%", sign, format_number(value))
}

/// Green for gains, red for losses, neutral otherwise.
pub fn change_color(percentage_change: f64) -> Color32 {
    if percentage_change > 0.0 {
        UI_CONFIG.colors.gain
    } else if percentage_change < 0.0 {
        UI_CONFIG.colors.loss
    } else {
        UI_CONFIG.colors.flat
    }
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    // Customize the dark theme
    visuals.window_fill = UI_CONFIG.colors.page;
    visuals.panel_fill = UI_CONFIG.colors.page;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    // Set the custom visuals
    ctx.set_visuals(visuals);
}

use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::ui::cards::CardFace;

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub page: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub card_stroke: Color32,
    pub skeleton: Color32,

    pub gain: Color32,
    pub loss: Color32,
    pub flat: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub card_width: f32,
    pub card_min_height: f32,
    pub drawer_width: f32,
    pub skeleton_count: usize,
    /// Which price face a freshly shown card starts on.
    pub default_card_face: CardFace,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_gray(200),
        heading: Color32::from_gray(235),
        subdued: Color32::from_gray(130),
        page: Color32::from_rgb(18, 21, 28),
        panel: Color32::from_rgb(24, 28, 36),
        card: Color32::from_rgb(32, 37, 48),
        card_stroke: Color32::from_rgb(52, 58, 72),
        skeleton: Color32::from_rgb(58, 64, 78),

        gain: Color32::from_rgb(80, 200, 120),
        loss: Color32::from_rgb(235, 90, 90),
        flat: Color32::from_gray(180),
    },
    card_width: 180.0,
    card_min_height: 110.0,
    drawer_width: 380.0,
    skeleton_count: 6,
    default_card_face: CardFace::A,
};

impl UiConfig {
    /// Frame for one quote card
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_stroke),
            corner_radius: CornerRadius::same(8),
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    /// Frame for the detail drawer
    pub fn drawer_frame(&self) -> Frame {
        Frame {
            fill: self.colors.panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }
}

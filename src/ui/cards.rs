use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use eframe::egui::{Align, Layout, RichText, Sense, Ui, vec2};

use crate::models::Quote;
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::{change_color, format_number, format_percentage};
use crate::utils::time_utils::relative_time_from;

/// Which price a card leads with. Face A (the default) leads with the
/// futures price; face B swaps the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    A,
    B,
}

impl CardFace {
    pub fn toggle(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

/// Per-card face flags, keyed by quote id. Entries exist only for cards
/// currently on screen: state appears when a card is first shown and is
/// dropped once the card is filtered out, so it resets on remount.
pub struct CardFaces {
    default_face: CardFace,
    faces: HashMap<u32, CardFace>,
}

impl CardFaces {
    pub fn new(default_face: CardFace) -> Self {
        Self {
            default_face,
            faces: HashMap::new(),
        }
    }

    pub fn face_for(&mut self, id: u32) -> CardFace {
        *self.faces.entry(id).or_insert(self.default_face)
    }

    pub fn toggle(&mut self, id: u32) {
        let face = self.faces.entry(id).or_insert(self.default_face);
        *face = face.toggle();
    }

    /// Drop state for every card that is no longer visible.
    pub fn retain_visible(&mut self, visible: &HashSet<u32>) {
        self.faces.retain(|id, _| visible.contains(id));
    }
}

/// What the user did to a card this frame.
#[derive(Debug, Clone)]
pub enum CardAction {
    Toggle(u32),
    Open(Quote),
}

/// One quote card. The toggle button wins over the card-body click.
pub fn render_card(
    ui: &mut Ui,
    quote: &Quote,
    face: CardFace,
    now: DateTime<Utc>,
) -> Option<CardAction> {
    let mut action = None;

    let inner = UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(UI_CONFIG.card_width);
        ui.set_min_height(UI_CONFIG.card_min_height);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&quote.trading_symbol)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.small_button(face.label()).clicked() {
                    action = Some(CardAction::Toggle(quote.id));
                }
            });
        });

        let (primary, secondary) = match face {
            CardFace::A => (
                quote.futures_last_traded_price,
                quote.capital_market_last_traded_price,
            ),
            CardFace::B => (
                quote.capital_market_last_traded_price,
                quote.futures_last_traded_price,
            ),
        };

        ui.add_space(8.0);
        ui.label(RichText::new(format_number(primary)).size(15.0));
        ui.label(
            RichText::new(format_number(secondary))
                .small()
                .color(UI_CONFIG.colors.subdued),
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format_percentage(quote.percentage_change))
                    .color(change_color(quote.percentage_change)),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(relative_time_from(quote.last_updated_timestamp, now))
                        .small()
                        .color(UI_CONFIG.colors.subdued),
                );
            });
        });
    });

    // Card body opens the drawer - unless the toggle already fired.
    if action.is_none() && inner.response.interact(Sense::click()).clicked() {
        action = Some(CardAction::Open(quote.clone()));
    }

    action
}

/// Gray placeholder card shown while a load is in flight.
pub fn render_skeleton_card(ui: &mut Ui) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(UI_CONFIG.card_width);
        ui.set_min_height(UI_CONFIG.card_min_height);

        skeleton_block(ui, 100.0, 20.0);
        ui.add_space(12.0);
        skeleton_block(ui, 70.0, 18.0);
        ui.add_space(8.0);
        skeleton_block(ui, 90.0, 18.0);
        ui.add_space(12.0);
        skeleton_block(ui, 40.0, 14.0);
    });
}

fn skeleton_block(ui: &mut Ui, width: f32, height: f32) {
    let (rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
    ui.painter().rect_filled(rect, 4.0, UI_CONFIG.colors.skeleton);
}

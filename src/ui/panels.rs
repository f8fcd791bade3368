use std::collections::HashSet;

use chrono::Utc;
use eframe::egui::{
    Align, ComboBox, Context, Grid, Layout, RichText, ScrollArea, TextEdit, TopBottomPanel, Ui,
};
use strum::IntoEnumIterator;

use crate::models::{Quote, SortDirection, SortKey, derive_view};
use crate::ui::app::WatchlistApp;
use crate::ui::cards::{render_card, render_skeleton_card};
use crate::ui::{CardAction, UI_CONFIG, UI_TEXT};

/// Horizontal room one card takes up in the grid, spacing included.
const CARD_SLOT_WIDTH: f32 = 220.0;

impl WatchlistApp {
    pub(super) fn render_header(&mut self, ctx: &Context) {
        TopBottomPanel::top("header")
            .frame(UI_CONFIG.top_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(UI_TEXT.app_title).color(UI_CONFIG.colors.heading),
                    );

                    // Right-to-left, so the Refresh button hugs the edge.
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(UI_TEXT.refresh).clicked() {
                            self.controller.load(self.refresh_options);
                        }

                        ComboBox::from_id_salt("sort_dir")
                            .selected_text(self.sort_dir.to_string())
                            .width(70.0)
                            .show_ui(ui, |ui| {
                                for dir in SortDirection::iter() {
                                    ui.selectable_value(&mut self.sort_dir, dir, dir.to_string());
                                }
                            });

                        ComboBox::from_id_salt("sort_key")
                            .selected_text(
                                self.sort_key
                                    .map_or(UI_TEXT.sort_by.to_string(), |k| k.to_string()),
                            )
                            .width(170.0)
                            .show_ui(ui, |ui| {
                                ui.selectable_value(&mut self.sort_key, None, UI_TEXT.sort_by);
                                for key in SortKey::iter() {
                                    ui.selectable_value(
                                        &mut self.sort_key,
                                        Some(key),
                                        key.to_string(),
                                    );
                                }
                            });

                        ui.add(
                            TextEdit::singleline(&mut self.search_text)
                                .hint_text(UI_TEXT.search_hint)
                                .desired_width(160.0),
                        );
                    });
                });
            });
    }

    pub(super) fn render_footer(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("footer")
            .frame(UI_CONFIG.bottom_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(UI_TEXT.footer)
                            .small()
                            .color(UI_CONFIG.colors.subdued),
                    );
                });
            });
    }

    /// Error view replaces the grid entirely while Failed.
    pub(super) fn render_error_view(&mut self, ui: &mut Ui, message: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);

            let text = if message.trim().is_empty() {
                UI_TEXT.error_generic
            } else {
                message
            };
            ui.label(RichText::new(text).color(UI_CONFIG.colors.loss));

            ui.add_space(10.0);
            if ui.button(UI_TEXT.retry).clicked() {
                self.controller.retry();
            }
        });
    }

    pub(super) fn render_skeleton_grid(&mut self, ui: &mut Ui) {
        let cols = column_count(ui.available_width());

        Grid::new("skeleton_grid")
            .spacing([14.0, 14.0])
            .show(ui, |ui| {
                for i in 0..UI_CONFIG.skeleton_count {
                    render_skeleton_card(ui);
                    if (i + 1) % cols == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    pub(super) fn render_loaded_grid(&mut self, ui: &mut Ui, records: &[Quote]) {
        let rows = derive_view(
            records,
            &self.search_text,
            self.sort_key,
            self.sort_dir,
            self.ticker.count(),
        );

        // Card state lives only as long as the card is on screen.
        let visible: HashSet<u32> = rows.iter().map(|q| q.id).collect();
        self.card_faces.retain_visible(&visible);

        let now = Utc::now();
        let cols = column_count(ui.available_width());
        let mut action = None;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Grid::new("cards_grid").spacing([14.0, 14.0]).show(ui, |ui| {
                    for (i, quote) in rows.iter().enumerate() {
                        let face = self.card_faces.face_for(quote.id);
                        if let Some(a) = render_card(ui, quote, face, now) {
                            action = Some(a);
                        }
                        if (i + 1) % cols == 0 {
                            ui.end_row();
                        }
                    }
                });
            });

        match action {
            Some(CardAction::Toggle(id)) => self.card_faces.toggle(id),
            Some(CardAction::Open(quote)) => self.open_detail(quote),
            None => {}
        }
    }
}

fn column_count(available_width: f32) -> usize {
    ((available_width / CARD_SLOT_WIDTH).floor() as usize).max(1)
}

use chrono::Local;
use eframe::egui::{Align, Context, Grid, Layout, RichText, SidePanel};
use egui_plot::{Line, Plot, PlotPoints};
use rand::Rng;

use crate::models::Quote;
use crate::ui::config::UI_CONFIG;
use crate::ui::text::UI_TEXT;
use crate::ui::utils::{format_number, format_percentage};

/// Points in the decorative sparkline.
const SPARK_POINTS: usize = 30;

/// The open detail drawer: the inspected record plus a decorative
/// random-walk sparkline generated once per open.
pub struct DetailView {
    pub quote: Quote,
    spark: Vec<f64>,
}

impl DetailView {
    pub fn open(quote: Quote) -> Self {
        let mut rng = rand::rng();
        let mut spark = Vec::with_capacity(SPARK_POINTS);
        let mut base: f64 = rng.random::<f64>() * 100.0 + 50.0;
        for _ in 0..SPARK_POINTS {
            base += (rng.random::<f64>() - 0.5) * 8.0;
            spark.push(base.max(0.0));
        }
        Self { quote, spark }
    }

    /// Render the right-hand drawer. Returns true when it should close.
    pub fn render(&self, ctx: &Context) -> bool {
        let mut close = false;

        SidePanel::right("detail_drawer")
            .exact_width(UI_CONFIG.drawer_width)
            .resizable(false)
            .frame(UI_CONFIG.drawer_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(format!(
                            "{} — {}",
                            self.quote.trading_symbol, UI_TEXT.details_suffix
                        ))
                        .color(UI_CONFIG.colors.heading),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.small_button(UI_TEXT.close).clicked() {
                            close = true;
                        }
                    });
                });

                ui.add_space(12.0);

                let points =
                    PlotPoints::new(self.spark.iter().enumerate().map(|(i, v)| [i as f64, *v]).collect());
                Plot::new("detail_spark")
                    .height(100.0)
                    .allow_drag(false)
                    .allow_zoom(false)
                    .allow_scroll(false)
                    .show_axes(false)
                    .show_x(false)
                    .show_y(false)
                    .show(ui, |plot_ui| {
                        plot_ui.line(Line::new("", points).color(UI_CONFIG.colors.heading));
                    });

                ui.add_space(12.0);

                Grid::new("detail_table")
                    .num_columns(2)
                    .striped(true)
                    .min_col_width(UI_CONFIG.drawer_width / 2.0 - 20.0)
                    .show(ui, |ui| {
                        let mut row = |label: &str, value: String| {
                            ui.label(label);
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(value);
                            });
                            ui.end_row();
                        };

                        row(
                            UI_TEXT.label_capital_market,
                            format_number(self.quote.capital_market_last_traded_price),
                        );
                        row(
                            UI_TEXT.label_futures,
                            format_number(self.quote.futures_last_traded_price),
                        );
                        row(
                            UI_TEXT.label_change,
                            format_percentage(self.quote.percentage_change),
                        );
                        row(
                            UI_TEXT.label_last_updated,
                            self.quote
                                .last_updated_timestamp
                                .with_timezone(&Local)
                                .format("%Y-%m-%d %H:%M:%S")
                                .to_string(),
                        );
                    });
            });

        close
    }
}

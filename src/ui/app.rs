use std::sync::Arc;
use std::time::Duration;

use eframe::Frame;
use eframe::egui::{CentralPanel, Context, Key};

use crate::Cli;
use crate::config::{FEED, FetchProfile, REFRESH};
use crate::data::{FetchOptions, MockQuoteFeed};
use crate::loader::{LoadController, LoadState};
use crate::models::{Quote, SortDirection, SortKey};
use crate::refresh::RefreshTicker;
use crate::ui::utils::setup_custom_visuals;
use crate::ui::{CardFaces, DetailView, UI_CONFIG};

pub struct WatchlistApp {
    pub(super) controller: LoadController,
    // Keeps "N min ago" labels honest; released (thread joined) on drop.
    pub(super) ticker: RefreshTicker,

    // View parameters
    pub(super) search_text: String,
    pub(super) sort_key: Option<SortKey>,
    pub(super) sort_dir: SortDirection,

    pub(super) card_faces: CardFaces,
    pub(super) detail: Option<DetailView>,

    // Resolved once from config + CLI overrides; Retry reuses the initial
    // options via the controller itself.
    pub(super) refresh_options: FetchOptions,
}

/// Config profile, with any CLI override applied on top.
fn resolve_options(profile: &FetchProfile, args: &Cli) -> FetchOptions {
    let mut options: FetchOptions = profile.into();
    if let Some(rate) = args.fail_rate {
        options.fail_rate = rate.clamp(0.0, 1.0);
    }
    if let Some(ms) = args.latency_ms {
        options.latency = Duration::from_millis(ms);
    }
    options
}

impl WatchlistApp {
    pub fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let initial_options = resolve_options(&FEED.initial, &args);
        let refresh_options = resolve_options(&FEED.refresh, &args);

        let mut controller = LoadController::new(Arc::new(MockQuoteFeed::new()), initial_options);
        // Idle -> Loading straight away; the first frame shows skeletons.
        controller.load(initial_options);

        let interval = Duration::from_secs(args.refresh_secs.unwrap_or(REFRESH.interval_secs));

        Self {
            controller,
            ticker: RefreshTicker::start(interval),
            search_text: String::new(),
            sort_key: None,
            sort_dir: SortDirection::default(),
            card_faces: CardFaces::new(UI_CONFIG.default_card_face),
            detail: None,
            refresh_options,
        }
    }

    pub(super) fn open_detail(&mut self, quote: Quote) {
        self.detail = Some(DetailView::open(quote));
    }

    pub(super) fn close_detail(&mut self) {
        self.detail = None;
    }

    fn handle_global_shortcuts(&mut self, ctx: &Context) {
        // Don't steal keys from the search box.
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(Key::Escape) {
                self.detail = None;
            }
        });
    }
}

impl eframe::App for WatchlistApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.controller.poll();

        self.handle_global_shortcuts(ctx);

        self.render_header(ctx);
        self.render_footer(ctx);

        // Drawer first so the central grid lays out beside it.
        if let Some(detail) = &self.detail {
            if detail.render(ctx) {
                self.close_detail();
            }
        }

        let state = self.controller.state().clone();
        CentralPanel::default().show(ctx, |ui| match &state {
            LoadState::Idle | LoadState::Loading => self.render_skeleton_grid(ui),
            LoadState::Failed(message) => self.render_error_view(ui, message),
            LoadState::Loaded(records) => self.render_loaded_grid(ui, records),
        });

        if state.is_loading() {
            // Keep pumping the event loop so poll() sees the completion.
            ctx.request_repaint();
        } else {
            // A relaxed cadence is enough for relative-time labels.
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}

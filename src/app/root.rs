use {
    chrono::{Locale, NaiveDate},
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, Key, Visuals},
    },
    poll_promise::Promise,
    serde::{Deserialize, Serialize},
    std::{mem, sync::Arc},
};

use crate::{
    Cli,
    analysis::{PeriodResolver, build_grid, compose, parse_locale},
    app::{AppState, DrillDownView, LoadedStats, PendingStats, UiAction},
    config::PERSISTENCE,
    data::{JournalSource, Page, StatsQuery, StatsSource, TradePage, demo_journal},
    domain::{ChartInteraction, DrillDownFilter, PeriodKind, PeriodState},
    ui::{PanelRegion, UI_CONFIG, UI_TEXT, render_empty, render_failed, render_loading},
    utils::local_utc_offset_hours,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// UI preferences that survive restarts. The period is deliberately absent: every session starts at All Time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct UiPrefs {
    pub(crate) show_drill_down: bool,
    pub(crate) show_help: bool,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            show_drill_down: true,
            show_help: false,
        }
    }
}

pub struct App {
    pub(crate) prefs: UiPrefs,
    pub(crate) period: PeriodState,
    pub(crate) resolver: PeriodResolver,
    pub(crate) locale: Locale,
    /// Read once at startup (or from `--utc-offset`) and passed to the binner explicitly.
    pub(crate) offset_hours: f64,
    source: Option<Arc<dyn StatsSource>>,
    /// Newest trade date in the whole dataset, learned from the last successful fetch.
    pub(crate) latest_data_date: Option<NaiveDate>,
    state: AppState,
    pub(crate) drill_down: Option<DrillDownView>,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let prefs: UiPrefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let resolver = PeriodResolver::today_local();
        let offset_hours = args.utc_offset.unwrap_or_else(local_utc_offset_hours);

        let (source, state) = match open_source(&args, &resolver) {
            Ok(source) => (Some(source), AppState::Idle),
            Err(err) => {
                log::error!("Failed to open trade journal: {:#}", err);
                (None, AppState::Failed(format!("{:#}", err)))
            }
        };

        Self {
            prefs,
            period: PeriodState::default(),
            resolver,
            locale: parse_locale(&args.locale),
            offset_hours,
            source,
            latest_data_date: None,
            state,
            drill_down: None,
        }
    }

    /// Kicks off a background fetch for `period`. Any request still in flight is superseded.
    fn request_stats(&self, period: PeriodState) -> AppState {
        let Some(source) = self.source.clone() else {
            return AppState::Failed(UI_TEXT.error_no_source.clone());
        };
        let query = StatsQuery::new(self.resolver.resolve(period));

        #[cfg(debug_assertions)]
        if DF.log_stats_fetch {
            log::info!("Requesting stats for {} with {:?}", period, query.query_params());
        }

        let promise = Promise::spawn_thread("stats_fetch", move || source.fetch_stats(&query));
        AppState::Loading(PendingStats { period, promise })
    }

    pub(crate) fn set_period(&mut self, period: PeriodState) {
        if period == self.period {
            return;
        }
        #[cfg(debug_assertions)]
        if DF.log_period_nav {
            log::info!("PERIOD: {} -> {}", self.period, period);
        }
        self.period = period;
        // Bounds of an open drill-down belong to the old period
        self.drill_down = None;
        self.state = self.request_stats(period);
    }

    pub(crate) fn drill_into(&mut self, interaction: ChartInteraction) {
        let filter = compose(&interaction, self.period, &self.resolver);
        let page = self.fetch_trades(&filter, Page::first(PERSISTENCE.journal.page_size));
        self.drill_down = Some(DrillDownView {
            interaction,
            filter,
            page,
        });
        self.prefs.show_drill_down = true;
    }

    fn change_page(&mut self, index: usize) {
        let Some(view) = self.drill_down.as_ref() else {
            return;
        };
        let page = Page {
            index,
            size: PERSISTENCE.journal.page_size,
        };
        let result = self.fetch_trades(&view.filter, page);
        if let Some(view) = self.drill_down.as_mut() {
            view.page = result;
        }
    }

    fn fetch_trades(&self, filter: &DrillDownFilter, page: Page) -> Result<TradePage, String> {
        let Some(source) = &self.source else {
            return Err(UI_TEXT.error_no_source.clone());
        };
        source.list_trades(filter, page).map_err(|err| {
            log::error!("Failed to list trades for {}: {:#}", filter, err);
            format!("{:#}", err)
        })
    }

    pub(crate) fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::SetPeriod(period) => self.set_period(period),
            UiAction::DrillDown(interaction) => self.drill_into(interaction),
            UiAction::ChangePage(index) => self.change_page(index),
            UiAction::CloseDrillDown => self.drill_down = None,
        }
    }

    pub(crate) fn period_label(&self) -> String {
        self.resolver.label(self.period, self.locale)
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) -> Option<UiAction> {
        if ctx.wants_keyboard_input() {
            return None;
        }

        let mut action = None;
        ctx.input(|i| {
            if i.key_pressed(Key::ArrowLeft) && !self.period.is_all() {
                action = Some(UiAction::SetPeriod(self.period.back()));
            }
            if i.key_pressed(Key::ArrowRight) && self.period.can_go_forward() {
                action = Some(UiAction::SetPeriod(self.period.forward()));
            }
            if i.key_pressed(Key::A) {
                action = Some(UiAction::SetPeriod(PeriodState::default()));
            }
            if i.key_pressed(Key::H) {
                self.prefs.show_help = !self.prefs.show_help;
            }
            if i.key_pressed(Key::D) {
                self.prefs.show_drill_down = !self.prefs.show_drill_down;
            }
            if i.key_pressed(Key::Escape) {
                self.prefs.show_help = false;
                action = Some(UiAction::CloseDrillDown);
            }
        });

        let kind_keys = [
            (Key::W, PeriodKind::Week),
            (Key::M, PeriodKind::Month),
            (Key::Q, PeriodKind::Quarter),
            (Key::Y, PeriodKind::Year),
        ];
        for (key, kind) in kind_keys {
            if ctx.input(|i| i.key_pressed(key)) {
                action = Some(UiAction::SetPeriod(
                    self.resolver.select_kind(kind, self.latest_data_date),
                ));
            }
        }
        action
    }

    fn tick_loading_state(&mut self, ctx: &Context, pending: PendingStats) -> AppState {
        match pending.promise.try_take() {
            Ok(Ok(stats)) => {
                self.latest_data_date = stats.max_date;
                let grid = build_grid(&stats.heatmap, self.offset_hours);
                AppState::Ready(LoadedStats {
                    period: pending.period,
                    stats,
                    grid,
                })
            }
            Ok(Err(err)) => {
                log::error!("Stats fetch for {} failed: {:#}", pending.period, err);
                AppState::Failed(format!("{:#}", err))
            }
            Err(promise) => {
                let label = self.resolver.label(pending.period, self.locale);
                CentralPanel::default()
                    .frame(UI_CONFIG.panel_frame(PanelRegion::Central))
                    .show(ctx, |ui| render_loading(ui, &label));
                ctx.request_repaint();
                AppState::Loading(PendingStats {
                    period: pending.period,
                    promise,
                })
            }
        }
    }

    fn tick_ready_state(&mut self, ctx: &Context, loaded: LoadedStats) -> AppState {
        let mut actions = Vec::new();
        actions.extend(self.render_left_panel(ctx, &loaded));
        if self.prefs.show_drill_down {
            actions.extend(self.render_drill_down_panel(ctx));
        }
        if loaded.stats.is_empty() {
            CentralPanel::default()
                .frame(UI_CONFIG.panel_frame(PanelRegion::Central))
                .show(ctx, |ui| render_empty(ui, &self.period_label()));
        } else {
            actions.extend(self.render_central_panel(ctx, &loaded));
        }

        for action in actions {
            self.apply_action(action);
        }
        // A period change has already queued its own request
        match mem::take(&mut self.state) {
            AppState::Idle => AppState::Ready(loaded),
            requested => requested,
        }
    }

    fn tick_failed_state(&mut self, ctx: &Context, message: String) -> AppState {
        let mut retry = false;
        CentralPanel::default()
            .frame(UI_CONFIG.panel_frame(PanelRegion::Central))
            .show(ctx, |ui| retry = render_failed(ui, &message, self.source.is_some()));
        if retry {
            return self.request_stats(self.period);
        }
        AppState::Failed(message)
    }
}

/// Journal from `--demo` or a JSON file (explicit `--journal`, else the default path).
fn open_source(args: &Cli, resolver: &PeriodResolver) -> anyhow::Result<Arc<dyn StatsSource>> {
    if args.demo {
        return Ok(Arc::new(demo_journal(resolver.today())));
    }
    let path = args
        .journal
        .clone()
        .unwrap_or_else(|| PERSISTENCE.journal.default_path.into());
    Ok(Arc::new(JournalSource::load(path)?))
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        let shortcut = self.handle_global_shortcuts(ctx);
        let toolbar = self.render_top_panel(ctx);
        for action in shortcut.into_iter().chain(toolbar) {
            self.apply_action(action);
        }
        self.render_help_window(ctx);

        if matches!(self.state, AppState::Idle) && self.source.is_some() {
            self.state = self.request_stats(self.period);
        }

        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Idle => AppState::Idle,
            AppState::Loading(pending) => self.tick_loading_state(ctx, pending),
            AppState::Ready(loaded) => self.tick_ready_state(ctx, loaded),
            AppState::Failed(message) => self.tick_failed_state(ctx, message),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_period_nav {
            log::info!("SAVE [App]: {:?}", self.prefs);
        }
        eframe::set_value(storage, eframe::APP_KEY, &self.prefs);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefs_survive_a_json_round_trip_and_tolerate_missing_fields() {
        let prefs: UiPrefs = serde_json::from_str("{\"show_help\":true}").unwrap();
        assert!(prefs.show_help);
        assert!(prefs.show_drill_down);
    }
}

use {
    eframe::egui::{Context, Grid, RichText, ScrollArea, SidePanel, Ui, Vec2b},
    egui_plot::{AxisHints, Bar, BarChart, GridMark, HLine, Plot},
};

use crate::{
    app::{App, LoadedStats, UiAction},
    config::PLOT_CONFIG,
    data::{PeriodTotals, SymbolStat},
    domain::ChartInteraction,
    ui::{PanelRegion, UI_CONFIG, UI_TEXT, UiStyleExt, apply_opacity, get_outcome_color},
    utils::{format_count, format_pct, format_pnl, format_r_multiple},
};

impl App {
    pub(crate) fn render_left_panel(&mut self, ctx: &Context, loaded: &LoadedStats) -> Option<UiAction> {
        let mut action = None;
        let selected_symbol = self.selected_symbol();

        SidePanel::left("summary_panel")
            .frame(UI_CONFIG.panel_frame(PanelRegion::Summary))
            .default_width(UI_CONFIG.left_panel_width)
            .resizable(true)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.heading(
                        RichText::new(&UI_TEXT.sp_heading).color(UI_CONFIG.colors.heading),
                    );
                    ui.label_subdued(self.resolver.label(loaded.period, self.locale));
                    ui.add_space(6.0);
                    render_totals(ui, &loaded.stats.totals);

                    ui.add_space(12.0);
                    ui.label_subheader(UI_TEXT.sp_symbols_heading.as_str());
                    ui.label_subdued(UI_TEXT.sp_symbols_hint.as_str());
                    if let Some(symbol) =
                        render_symbol_chart(ui, &loaded.stats.symbols, selected_symbol.as_deref())
                    {
                        action = Some(UiAction::DrillDown(ChartInteraction::Symbol(symbol)));
                    }
                    ui.add_space(8.0);
                    render_symbol_table(ui, &loaded.stats.symbols);
                });
            });

        action
    }

    fn selected_symbol(&self) -> Option<String> {
        match self.drill_down.as_ref().map(|view| &view.interaction) {
            Some(ChartInteraction::Symbol(symbol)) => Some(symbol.clone()),
            _ => None,
        }
    }
}

fn render_totals(ui: &mut Ui, totals: &PeriodTotals) {
    let none = UI_TEXT.label_none.as_str();
    ui.metric(
        &UI_TEXT.sp_trades,
        &format_count(totals.trades),
        PLOT_CONFIG.color_text_neutral,
    );
    ui.metric(
        &UI_TEXT.sp_win_rate,
        &format_pct(totals.win_rate()),
        PLOT_CONFIG.color_text_neutral,
    );
    ui.metric(
        &UI_TEXT.sp_net_pnl,
        &format_pnl(totals.net_pnl),
        get_outcome_color(totals.net_pnl),
    );
    ui.metric(
        &UI_TEXT.sp_best,
        &totals.best_trade.map(format_pnl).unwrap_or_else(|| none.to_string()),
        PLOT_CONFIG.color_profit,
    );
    ui.metric(
        &UI_TEXT.sp_worst,
        &totals.worst_trade.map(format_pnl).unwrap_or_else(|| none.to_string()),
        PLOT_CONFIG.color_loss,
    );
    ui.metric(
        &UI_TEXT.sp_avg_r,
        &totals
            .avg_r_multiple
            .map(format_r_multiple)
            .unwrap_or_else(|| none.to_string()),
        PLOT_CONFIG.color_info,
    );
}

/// Net pnl bar per symbol. Returns the clicked symbol, if any.
fn render_symbol_chart(ui: &mut Ui, symbols: &[SymbolStat], selected: Option<&str>) -> Option<String> {
    if symbols.is_empty() {
        return None;
    }

    let bars: Vec<Bar> = symbols
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            let color = get_outcome_color(stat.net_pnl);
            let fill = if selected.is_none() || selected == Some(stat.symbol.as_str()) {
                color
            } else {
                apply_opacity(color, 0.35)
            };
            Bar::new(i as f64, stat.net_pnl)
                .width(PLOT_CONFIG.bar_width)
                .fill(fill)
                .name(&stat.symbol)
        })
        .collect();

    let names: Vec<String> = symbols.iter().map(|s| s.symbol.clone()).collect();
    let x_axis = AxisHints::new_x().formatter(move |mark, _range| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
            return String::new();
        }
        names.get(idx as usize).cloned().unwrap_or_default()
    });
    let count = symbols.len();

    let response = Plot::new("symbol_pnl_chart")
        .height(PLOT_CONFIG.bar_chart_height)
        .custom_x_axes(vec![x_axis])
        .x_grid_spacer(move |_input| {
            (0..count)
                .map(|i| GridMark {
                    value: i as f64,
                    step_size: 1.0,
                })
                .collect()
        })
        .y_axis_formatter(|mark, _range| format_pnl(mark.value))
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{}\n{}", name, format_pnl(value.y))
            }
        })
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(Vec2b { x: false, y: false })
        .allow_zoom(Vec2b { x: false, y: false })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("net_pnl", bars));
            plot_ui.hline(HLine::new("", 0.0).color(PLOT_CONFIG.color_text_subdued));
            plot_ui.pointer_coordinate()
        });

    if !response.response.clicked() {
        return None;
    }
    let pointer = response.inner?;
    let idx = pointer.x.round();
    let within_bar = (pointer.x - idx).abs() <= PLOT_CONFIG.bar_width / 2.0;
    if !within_bar || idx < 0.0 {
        return None;
    }
    symbols.get(idx as usize).map(|stat| stat.symbol.clone())
}

fn render_symbol_table(ui: &mut Ui, symbols: &[SymbolStat]) {
    Grid::new("symbol_stats_grid")
        .striped(true)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for stat in symbols {
                ui.label(RichText::new(&stat.symbol).strong());
                ui.label_subdued(format!("{} / {}", stat.wins, stat.trades));
                ui.label_subdued(format_pct(stat.win_rate()));
                ui.label(RichText::new(format_pnl(stat.net_pnl)).color(get_outcome_color(stat.net_pnl)));
                ui.end_row();
            }
        });
}

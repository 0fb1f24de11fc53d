use eframe::egui::{Align, Button, Context, Grid, Layout, RichText, ScrollArea, TopBottomPanel, Ui};

use crate::{
    app::{App, DrillDownView, UiAction},
    config::PLOT_CONFIG,
    data::TradePage,
    ui::{DirectionColor, PanelRegion, UI_CONFIG, UI_TEXT, UiStyleExt, get_outcome_color},
    utils::{format_count, format_duration, format_pnl, format_r_multiple},
};

impl App {
    /// Trades behind the last clicked chart element, with the filter's query string.
    pub(crate) fn render_drill_down_panel(&mut self, ctx: &Context) -> Option<UiAction> {
        let mut action = None;

        TopBottomPanel::bottom("drill_down_panel")
            .frame(UI_CONFIG.panel_frame(PanelRegion::DrillDown))
            .default_height(UI_CONFIG.drill_down_height)
            .resizable(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label_subheader(UI_TEXT.dd_heading.as_str());
                    if let Some(view) = &self.drill_down {
                        ui.label(
                            RichText::new(view.filter.to_string())
                                .color(PLOT_CONFIG.color_text_primary),
                        );
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.button(UI_TEXT.dd_close.as_str()).clicked() {
                                action = Some(UiAction::CloseDrillDown);
                            }
                        });
                    }
                });

                let Some(view) = &self.drill_down else {
                    ui.label_subdued(UI_TEXT.dd_hint.as_str());
                    return;
                };
                ui.label_subdued(format!("{}: ?{}", UI_TEXT.dd_query, view.filter.to_query_string()));
                ui.separator();

                if let Some(next) = render_view(ui, view) {
                    action = Some(next);
                }
            });

        action
    }
}

fn render_view(ui: &mut Ui, view: &DrillDownView) -> Option<UiAction> {
    let page = match &view.page {
        Ok(page) => page,
        Err(message) => {
            ui.label(RichText::new(message).color(PLOT_CONFIG.color_loss));
            return None;
        }
    };
    if page.trades.is_empty() {
        ui.label(RichText::new(&UI_TEXT.dd_no_rows).color(PLOT_CONFIG.color_text_subdued));
        return None;
    }

    let action = render_pager(ui, page);
    ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
        render_trade_table(ui, page);
    });
    action
}

fn render_pager(ui: &mut Ui, page: &TradePage) -> Option<UiAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(page.page.index > 0, Button::new("\u{00ab}"))
            .clicked()
        {
            action = Some(UiAction::ChangePage(page.page.previous().index));
        }
        ui.label_subdued(format!(
            "{} {} / {} ({} trades)",
            UI_TEXT.dd_page,
            page.page.index + 1,
            page.page_count().max(1),
            format_count(page.total)
        ));
        if ui
            .add_enabled(page.has_next(), Button::new("\u{00bb}"))
            .clicked()
        {
            action = Some(UiAction::ChangePage(page.page.next().index));
        }
    });
    action
}

fn render_trade_table(ui: &mut Ui, page: &TradePage) {
    Grid::new("drill_down_grid")
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for header in [
                &UI_TEXT.dd_col_opened,
                &UI_TEXT.dd_col_symbol,
                &UI_TEXT.dd_col_side,
                &UI_TEXT.dd_col_strategy,
                &UI_TEXT.dd_col_grade,
                &UI_TEXT.dd_col_hold,
                &UI_TEXT.dd_col_r,
                &UI_TEXT.dd_col_pnl,
            ] {
                ui.label(RichText::new(header).strong().color(UI_CONFIG.colors.subsection_heading));
            }
            ui.end_row();

            let none = UI_TEXT.label_none.as_str();
            for trade in &page.trades {
                ui.label(trade.opened_at.format("%Y-%m-%d %H:%M").to_string());
                ui.label(RichText::new(&trade.symbol).strong());
                ui.label(RichText::new(trade.direction.as_str()).color(trade.direction.color()));
                ui.label(trade.strategy_type.as_str());
                ui.label(trade.score_grade.as_str());
                ui.label(trade.hold_ms().map(format_duration).unwrap_or_else(|| none.to_string()));
                ui.label(
                    trade
                        .r_multiple
                        .map(format_r_multiple)
                        .unwrap_or_else(|| none.to_string()),
                );
                ui.label(RichText::new(format_pnl(trade.pnl)).color(get_outcome_color(trade.pnl)));
                ui.end_row();
            }
        });
}

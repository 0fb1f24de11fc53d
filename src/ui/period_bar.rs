use {
    eframe::egui::{Align, Button, Context, FontId, Layout, RichText, TopBottomPanel},
    strum::IntoEnumIterator,
};

use crate::{
    app::{App, UiAction},
    config::PLOT_CONFIG,
    domain::{PeriodKind, PeriodState},
    ui::{PanelRegion, UI_CONFIG, UI_TEXT, UiStyleExt},
    utils::{format_iso_date, format_utc_offset},
};

impl App {
    /// Kind selector, older/newer stepping and the resolved period label.
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) -> Option<UiAction> {
        let mut action = None;

        TopBottomPanel::top("period_toolbar")
            .frame(UI_CONFIG.panel_frame(PanelRegion::Top))
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&UI_TEXT.app_title)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();

                    ui.label(UI_TEXT.pb_period.as_str());
                    for kind in PeriodKind::iter() {
                        let selected = self.period.kind() == kind;
                        let response = ui.interactive_label(
                            kind.title(),
                            selected,
                            PLOT_CONFIG.color_text_primary,
                            FontId::proportional(13.0),
                        );
                        if response.clicked() && !selected {
                            let next = match kind {
                                PeriodKind::All => PeriodState::default(),
                                _ => self.resolver.select_kind(kind, self.latest_data_date),
                            };
                            action = Some(UiAction::SetPeriod(next));
                        }
                    }
                    ui.separator();

                    let stepping = !self.period.is_all();
                    if ui
                        .add_enabled(stepping, Button::new(UI_TEXT.pb_older.as_str()))
                        .clicked()
                    {
                        action = Some(UiAction::SetPeriod(self.period.back()));
                    }
                    ui.label(
                        RichText::new(self.period_label())
                            .strong()
                            .color(PLOT_CONFIG.color_text_neutral),
                    );
                    if ui
                        .add_enabled(
                            self.period.can_go_forward(),
                            Button::new(UI_TEXT.pb_newer.as_str()),
                        )
                        .clicked()
                    {
                        action = Some(UiAction::SetPeriod(self.period.forward()));
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued(format!(
                            "{}: {}",
                            UI_TEXT.pb_utc_offset,
                            format_utc_offset(self.offset_hours)
                        ));
                        ui.separator();
                        match self.latest_data_date {
                            Some(date) => ui.label_subdued(format!(
                                "{} {}",
                                UI_TEXT.pb_data_through,
                                format_iso_date(date)
                            )),
                            None => ui.label_subdued(UI_TEXT.pb_no_data_date.as_str()),
                        }
                    });
                });
            });

        action
    }
}

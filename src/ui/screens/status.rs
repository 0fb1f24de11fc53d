use {
    crate::{config::PLOT_CONFIG, ui::UI_TEXT},
    eframe::egui::{RichText, Ui},
};

pub(crate) fn render_loading(ui: &mut Ui, period_label: &str) {
    render_fullscreen_message(
        ui,
        &UI_TEXT.ls_title,
        &format!("{} {}", UI_TEXT.ls_subtitle, period_label),
        false,
    );
}

pub(crate) fn render_empty(ui: &mut Ui, period_label: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(
            RichText::new(period_label)
                .strong()
                .color(PLOT_CONFIG.color_text_neutral),
        );
        ui.add_space(6.0);
        ui.label(RichText::new(&UI_TEXT.empty_title).color(PLOT_CONFIG.color_warning));
        ui.label(RichText::new(&UI_TEXT.empty_hint).color(PLOT_CONFIG.color_text_subdued));
    });
}

/// Error screen. Returns true when the user asks to retry.
pub(crate) fn render_failed(ui: &mut Ui, message: &str, can_retry: bool) -> bool {
    render_fullscreen_message(ui, &UI_TEXT.error_title, message, true);
    let mut retry = false;
    ui.vertical_centered(|ui| {
        ui.add_space(6.0);
        ui.label(RichText::new(&UI_TEXT.error_hint).color(PLOT_CONFIG.color_text_subdued));
        if can_retry {
            ui.add_space(12.0);
            retry = ui.button(UI_TEXT.error_retry.as_str()).clicked();
        }
    });
    retry
}

fn render_fullscreen_message(ui: &mut Ui, title: &str, subtitle: &str, is_error: bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);

        if is_error {
            ui.heading(RichText::new(format!("\u{26a0} {}", title)).color(PLOT_CONFIG.color_warning));
        } else {
            ui.spinner();
            ui.add_space(12.0);
            ui.heading(title);
        }

        ui.add_space(6.0);

        let color = if is_error {
            PLOT_CONFIG.color_loss
        } else {
            PLOT_CONFIG.color_text_neutral
        };

        ui.label(RichText::new(subtitle).color(color));
    });
}

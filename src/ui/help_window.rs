use eframe::egui::{Context, Grid, Order, RichText, Window};

use crate::{app::App, ui::UI_TEXT};

impl App {
    pub(crate) fn render_help_window(&mut self, ctx: &Context) {
        Window::new(UI_TEXT.kbs_name.as_str())
            .open(&mut self.prefs.show_help)
            .resizable(false)
            .order(Order::Tooltip) // Above plot overlays
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                Grid::new("shortcut_grid")
                    .num_columns(2)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        for (key, description) in &UI_TEXT.kbs_rows {
                            ui.label(RichText::new(key).monospace().strong());
                            ui.label(description.as_str());
                            ui.end_row();
                        }
                    });
            });
    }
}

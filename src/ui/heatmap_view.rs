use eframe::egui::{
    Align2, CentralPanel, Context, CornerRadius, FontId, Pos2, Rect, RichText, Sense, Stroke,
    StrokeKind, Ui, Vec2,
};

use crate::{
    analysis::{GridSlot, HeatmapGrid},
    app::{App, LoadedStats, UiAction},
    config::{HEATMAP, PLOT_CONFIG},
    domain::ChartInteraction,
    ui::{PanelRegion, UI_CONFIG, UI_TEXT, UiStyleExt, shade_color},
    utils::{format_count, format_pnl, format_utc_offset},
};

impl App {
    pub(crate) fn render_central_panel(&mut self, ctx: &Context, loaded: &LoadedStats) -> Option<UiAction> {
        let selected_hour = match self.drill_down.as_ref().map(|view| &view.interaction) {
            Some(ChartInteraction::Hour(hour)) => Some(*hour),
            _ => None,
        };

        CentralPanel::default()
            .frame(UI_CONFIG.panel_frame(PanelRegion::Central))
            .show(ctx, |ui| {
                ui.heading(RichText::new(&UI_TEXT.hm_heading).color(UI_CONFIG.colors.heading));
                ui.label_subdued(format!(
                    "{} ({}). {}",
                    UI_TEXT.pb_utc_offset,
                    format_utc_offset(loaded.grid.offset_hours),
                    UI_TEXT.hm_hint
                ));
                ui.add_space(8.0);

                if loaded.grid.is_empty() {
                    ui.label(RichText::new(&UI_TEXT.hm_empty).color(PLOT_CONFIG.color_text_subdued));
                    return None;
                }
                render_heatmap(ui, &loaded.grid, selected_hour)
                    .map(|hour_utc| UiAction::DrillDown(ChartInteraction::Hour(hour_utc)))
            })
            .inner
    }
}

/// Paints the grid and returns the UTC hour of a clicked cell.
fn render_heatmap(ui: &mut Ui, grid: &HeatmapGrid, selected_hour_utc: Option<u8>) -> Option<u8> {
    let cell = PLOT_CONFIG.heatmap_cell_size;
    let gap = PLOT_CONFIG.heatmap_cell_gap;
    let label_w = PLOT_CONFIG.heatmap_label_width;
    let header_h = cell * 0.8;
    let columns = grid.window.len();

    let size = Vec2::new(
        label_w + columns as f32 * (cell + gap),
        header_h + grid.rows.len() as f32 * (cell + gap),
    );
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    let painter = ui.painter_at(rect);
    let origin = rect.left_top();

    let slot_rect = |row: usize, col: usize| -> Rect {
        let min = Pos2::new(
            origin.x + label_w + col as f32 * (cell + gap),
            origin.y + header_h + row as f32 * (cell + gap),
        );
        Rect::from_min_size(min, Vec2::splat(cell))
    };

    // Column headers in local hours
    for (col, hour) in grid.window.hours().enumerate() {
        let center = Pos2::new(
            origin.x + label_w + col as f32 * (cell + gap) + cell / 2.0,
            origin.y + header_h / 2.0,
        );
        painter.text(
            center,
            Align2::CENTER_CENTER,
            format!("{:02}", hour),
            FontId::monospace(10.0),
            PLOT_CONFIG.color_text_subdued,
        );
    }

    let hovered_pos = response.hover_pos();
    let mut hovered: Option<&GridSlot> = None;

    for (row, slots) in grid.rows.iter().enumerate() {
        let day_label = HEATMAP.day_labels.get(row).copied().unwrap_or_default();
        painter.text(
            Pos2::new(origin.x, origin.y + header_h + row as f32 * (cell + gap) + cell / 2.0),
            Align2::LEFT_CENTER,
            day_label,
            FontId::proportional(11.0),
            PLOT_CONFIG.color_text_primary,
        );

        for (col, slot) in slots.iter().enumerate() {
            let r = slot_rect(row, col);
            painter.rect_filled(r, CornerRadius::same(3), shade_color(slot.shade));
            if selected_hour_utc == Some(slot.hour_utc) {
                painter.rect_stroke(
                    r,
                    CornerRadius::same(3),
                    Stroke::new(1.5, PLOT_CONFIG.color_heatmap_selected),
                    StrokeKind::Inside,
                );
            }
            if hovered_pos.is_some_and(|pos| r.contains(pos)) {
                painter.rect_stroke(
                    r,
                    CornerRadius::same(3),
                    Stroke::new(1.0, PLOT_CONFIG.color_text_neutral),
                    StrokeKind::Inside,
                );
                hovered = Some(slot);
            }
        }
    }

    let clicked = if response.clicked() {
        hovered.map(|slot| slot.hour_utc)
    } else {
        None
    };

    if let Some(slot) = hovered {
        response.on_hover_text_at_pointer(slot_tooltip(slot));
    }
    clicked
}

fn slot_tooltip(slot: &GridSlot) -> String {
    let day = HEATMAP
        .day_labels
        .get(slot.day_of_week as usize)
        .copied()
        .unwrap_or_default();
    let header = format!(
        "{} {:02}:00 (UTC {:02}:00)",
        day, slot.local_hour, slot.hour_utc
    );
    match slot.cell {
        Some(cell) if cell.has_data() => format!(
            "{}\n{} trades, avg {}",
            header,
            format_count(cell.sample_count as usize),
            format_pnl(cell.avg_metric)
        ),
        _ => format!("{}\n{}", header, UI_TEXT.hm_no_samples),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analysis::build_grid, domain::HeatmapCell};

    #[test]
    fn tooltip_shows_local_and_utc_hours() {
        let grid = build_grid(&[HeatmapCell::new(1, 14, 42.5, 3)], 2.0);
        let slot = grid.slot(1, 16).unwrap();
        let text = slot_tooltip(slot);
        assert!(text.starts_with("Mon 16:00 (UTC 14:00)"));
        assert!(text.contains("3 trades, avg +$42.50"));
    }

    #[test]
    fn tooltip_for_gap_slot_says_no_samples() {
        let grid = build_grid(&[HeatmapCell::new(1, 14, 42.5, 3)], 0.0);
        let slot = grid.slot(2, 14).unwrap();
        assert!(slot_tooltip(slot).ends_with(&UI_TEXT.hm_no_samples));
    }
}

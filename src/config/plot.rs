//! Chart and heatmap visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_long: Color32,
    pub color_short: Color32,

    pub color_info: Color32,
    pub color_warning: Color32,

    pub color_text_neutral: Color32, // Main values (white)
    pub color_text_primary: Color32, // Light Gray
    pub color_text_subdued: Color32, // Explanations/Context (Darker Gray)

    // HEATMAP
    /// Cell with samples == 0, or hour in the window with no cell at all
    pub color_heatmap_no_data: Color32,
    pub color_heatmap_selected: Color32,
    pub heatmap_cell_size: f32,
    pub heatmap_cell_gap: f32,
    pub heatmap_label_width: f32,

    // BAR CHART
    pub bar_width: f64,
    pub bar_chart_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    color_profit: Color32::from_rgb(38, 166, 91),
    color_loss: Color32::from_rgb(220, 53, 69),
    color_long: Color32::from_rgb(0, 200, 255),
    color_short: Color32::from_rgb(255, 100, 200),

    color_info: Color32::from_rgb(100, 180, 255),
    color_warning: Color32::from_rgb(255, 200, 0),

    color_text_neutral: Color32::WHITE,
    color_text_primary: Color32::from_gray(200),
    color_text_subdued: Color32::from_gray(120),

    color_heatmap_no_data: Color32::from_gray(45),
    color_heatmap_selected: Color32::from_rgb(255, 215, 0), // Gold
    heatmap_cell_size: 28.0,
    heatmap_cell_gap: 2.0,
    heatmap_label_width: 36.0,

    bar_width: 0.6,
    bar_chart_height: 220.0,
};

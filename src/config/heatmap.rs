//! Heatmap binning constants.

pub struct HeatmapConfig {
    /// Floor of the colour intensity so that tiny averages stay visible.
    pub min_alpha: f64,
    /// `min_alpha + alpha_span` is the ceiling (1.0).
    pub alpha_span: f64,
    /// Hours of padding shown either side of the active local hours.
    pub padding_hours: u8,
    pub hours_in_day: u8,
    /// Row labels, indexed by the server's day-of-week (0 = Sunday).
    pub day_labels: [&'static str; 7],
}

pub const HEATMAP: HeatmapConfig = HeatmapConfig {
    min_alpha: 0.2,
    alpha_span: 0.8,
    padding_hours: 1,
    hours_in_day: 24,
    day_labels: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
};

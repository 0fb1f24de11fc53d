//! Pure period, heatmap and drill-down logic. No I/O, no clock reads.
pub mod drill_down;
pub mod heatmap_binner;
pub mod period_resolver;

pub use drill_down::compose;
pub use heatmap_binner::{
    GridSlot, HeatmapGrid, HeatmapLookup, build_grid, build_lookup, compute_window, intensity,
    max_abs_metric, shade, to_local_hour, to_utc_hour,
};
pub use period_resolver::{PeriodResolver, format_range_label, parse_locale};

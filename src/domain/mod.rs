// Domain types and value objects
mod drill_down;
mod heatmap;
mod period;
mod trade;

// Re-export commonly used types to the world
pub use drill_down::{ChartInteraction, DrillDownFilter, FilterKey, FilterValue};
pub use heatmap::{CellShade, HeatmapCell, LocalHourWindow};
pub use period::{DateRange, ParsePeriodKindError, PeriodKind, PeriodOffset, PeriodState};
pub use trade::{TradeDirection, TradeRecord};

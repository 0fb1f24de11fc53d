//! Configuration module for the journal dashboard.

// Can all be private because we have a public re-export.
mod calendar;
mod debug;
mod demo;
mod heatmap;
mod persistence;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use calendar::{CALENDAR, CalendarConfig};
pub use debug::{DF, LogFlags};
pub use demo::{DEMO, DemoConfig};
pub use heatmap::{HEATMAP, HeatmapConfig};
pub use persistence::{PERSISTENCE, PersistenceConfig};
pub use plot::PLOT_CONFIG;

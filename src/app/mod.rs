mod root;
mod state;

pub(crate) use state::{AppState, DrillDownView, LoadedStats, PendingStats, UiAction};

pub use root::App;

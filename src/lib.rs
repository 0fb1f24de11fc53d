#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for period_report.rs)
pub use analysis::{PeriodResolver, parse_locale};
pub use app::App;
pub use config::PERSISTENCE;
pub use data::{JournalSource, StatsQuery, StatsSource, demo_journal};
pub use domain::{DateRange, PeriodKind, PeriodOffset, PeriodState};

// CLI argument parsing
use {clap::Parser, std::path::PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Trade journal (JSON array of trades). Defaults to `journal.json` in the working directory
    #[arg(long)]
    pub journal: Option<PathBuf>,

    /// Use a generated demo journal instead of reading a file
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Override the local UTC offset in hours used to place heatmap columns (e.g. -5, 5.5)
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<f64>,

    /// Locale for period labels, e.g. en_US, fr_FR, de-DE
    #[arg(long, default_value = "en_US")]
    pub locale: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

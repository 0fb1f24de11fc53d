use {
    anyhow::{Context, Result},
    clap::Parser,
    journal_lens::{
        PERSISTENCE, demo_journal,
        utils::{format_iso_date, parse_iso_date, today_local},
    },
    std::path::PathBuf,
};

/// Write the generated demo journal as JSON so the dashboard and `period_report` can read it
/// like a real export.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file (defaults to `journal.json`)
    output: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD); the newest trade lands a few days before it
    #[arg(long)]
    today: Option<String>,
}

impl Args {
    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(PERSISTENCE.journal.default_path))
    }
}

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let output_path = args.output_path();
    let today = match &args.today {
        Some(text) => parse_iso_date(text).context("--today must be YYYY-MM-DD")?,
        None => today_local(),
    };

    // 2. Generate
    let journal = demo_journal(today);
    if journal.is_empty() {
        log::error!("Demo generator produced no trades! Aborting.");
        return Ok(());
    }
    log::info!(
        "Generated {} demo trades through {}",
        journal.len(),
        journal
            .max_date()
            .map(format_iso_date)
            .unwrap_or_else(|| "-".to_string())
    );

    // 3. Save
    log::info!("Serializing to {:?}", output_path);
    journal.save(&output_path)?;
    log::info!("Success! Run `journal-lens --journal {}`", output_path.display());

    Ok(())
}

use {
    anyhow::{Context, Result, bail},
    clap::Parser,
    journal_lens::{
        JournalSource, PERSISTENCE, PeriodKind, PeriodOffset, PeriodResolver, PeriodState,
        StatsQuery, StatsSource, demo_journal, parse_locale,
        utils::{format_count, format_iso_date, format_pct, format_pnl, parse_iso_date},
    },
    std::path::PathBuf,
    tabled::{
        builder::Builder,
        settings::{Color, Style, style::BorderColor},
    },
};

/// Print consecutive periods of one kind with their date ranges, labels and journal totals.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// week, month, quarter or year
    #[arg(long, default_value = "month")]
    kind: PeriodKind,

    /// How many periods to list, newest first
    #[arg(long, default_value_t = 6)]
    count: u32,

    /// Trade journal to aggregate (defaults to `journal.json`)
    #[arg(long)]
    journal: Option<PathBuf>,

    /// Aggregate a generated demo journal instead of a file
    #[arg(long, default_value_t = false)]
    demo: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,

    /// Start from the newest period that contains trades rather than the current one
    #[arg(long, default_value_t = false)]
    align: bool,

    #[arg(long, default_value = "en_US")]
    locale: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if args.kind == PeriodKind::All {
        bail!("--kind all has a single period; use week, month, quarter or year");
    }

    let resolver = match &args.today {
        Some(text) => PeriodResolver::new(parse_iso_date(text).context("Invalid --today")?),
        None => PeriodResolver::today_local(),
    };
    let locale = parse_locale(&args.locale);

    let source = if args.demo {
        demo_journal(resolver.today())
    } else {
        let path = args
            .journal
            .clone()
            .unwrap_or_else(|| PERSISTENCE.journal.default_path.into());
        JournalSource::load(&path)?
    };

    let max_date = source.max_date();
    let first = if args.align {
        resolver.select_kind(args.kind, max_date).offset().value()
    } else {
        0
    };

    let mut builder = Builder::default();
    builder.push_record(["OFFSET", "START", "END", "LABEL", "TRADES", "WIN RATE", "NET P&L"]);
    for offset in first..first.saturating_add(args.count) {
        let state = PeriodState::new(args.kind, PeriodOffset::new(offset));
        let range = resolver.resolve(state);
        let stats = source.fetch_stats(&StatsQuery::new(range))?;
        builder.push_record([
            state.offset().to_string(),
            range.start().map(format_iso_date).unwrap_or_default(),
            range.end().map(format_iso_date).unwrap_or_default(),
            resolver.label(state, locale),
            format_count(stats.totals.trades),
            format_pct(stats.totals.win_rate()),
            format_pnl(stats.totals.net_pnl),
        ]);
    }

    println!(
        "Today {} | {} trades in journal | data through {}",
        format_iso_date(resolver.today()),
        format_count(source.len()),
        max_date.map(format_iso_date).unwrap_or_else(|| "-".to_string())
    );
    println!(
        "{}",
        builder
            .build()
            .with(Style::rounded())
            .with(BorderColor::filled(Color::FG_BLUE))
    );
    Ok(())
}

use {
    anyhow::{Context, Result},
    chrono::{Datelike, NaiveDate, Timelike},
    std::{
        collections::{BTreeMap, HashMap},
        fs::File,
        io::{BufReader, BufWriter},
        path::Path,
    },
};

use crate::{
    data::{DashboardStats, Page, PeriodTotals, StatsQuery, StatsSource, SymbolStat, TradePage},
    domain::{DateRange, DrillDownFilter, FilterKey, FilterValue, HeatmapCell, TradeRecord},
    trace_time,
    utils::mean,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Local stand-in for the statistics API, aggregating an in-memory trade journal.
#[derive(Debug, Clone, Default)]
pub struct JournalSource {
    trades: Vec<TradeRecord>,
}

impl JournalSource {
    pub fn new(trades: Vec<TradeRecord>) -> Self {
        Self { trades }
    }

    /// Reads a JSON array of trade records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open journal {}", path.display()))?;
        let reader = BufReader::new(file);
        let trades: Vec<TradeRecord> = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse journal {}", path.display()))?;

        #[cfg(debug_assertions)]
        if DF.log_journal {
            log::info!("Loaded {} trades from {}", trades.len(), path.display());
        }
        Ok(Self::new(trades))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create journal {}", path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.trades)
            .with_context(|| format!("Failed to write journal {}", path.display()))?;
        Ok(())
    }

    pub fn trades(&self) -> &[TradeRecord] {
        &self.trades
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Newest trade date over the whole journal.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.trades.iter().map(TradeRecord::trade_date).max()
    }

    fn in_range<'a>(&'a self, range: &'a DateRange) -> impl Iterator<Item = &'a TradeRecord> + 'a {
        self.trades
            .iter()
            .filter(move |trade| range.contains(trade.trade_date()))
    }
}

impl StatsSource for JournalSource {
    fn fetch_stats(&self, query: &StatsQuery) -> Result<DashboardStats> {
        trace_time!("Journal fetch_stats", 20_000, {
            let trades: Vec<&TradeRecord> = self.in_range(&query.range).collect();
            let stats = DashboardStats {
                max_date: self.max_date(),
                totals: aggregate_totals(&trades),
                symbols: aggregate_symbols(&trades),
                heatmap: aggregate_heatmap(&trades),
            };

            #[cfg(debug_assertions)]
            if DF.log_stats_fetch {
                log::info!(
                    "STATS: {} -> {} trades, {} symbols, {} heatmap cells",
                    query.range,
                    stats.totals.trades,
                    stats.symbols.len(),
                    stats.heatmap.len()
                );
            }
            Ok(stats)
        })
    }

    fn list_trades(&self, filter: &DrillDownFilter, page: Page) -> Result<TradePage> {
        let mut matching: Vec<&TradeRecord> = self
            .trades
            .iter()
            .filter(|trade| matches_filter(trade, filter))
            .collect();
        matching.sort_by(|a, b| b.opened_at.cmp(&a.opened_at));

        let size = page.size.max(1);
        let trades = matching
            .iter()
            .skip(page.index.saturating_mul(size))
            .take(size)
            .map(|trade| (*trade).clone())
            .collect();

        Ok(TradePage {
            trades,
            total: matching.len(),
            page: Page { index: page.index, size },
        })
    }
}

fn aggregate_totals(trades: &[&TradeRecord]) -> PeriodTotals {
    let r_multiples: Vec<f64> = trades.iter().filter_map(|t| t.r_multiple).collect();
    PeriodTotals {
        trades: trades.len(),
        wins: trades.iter().filter(|t| t.is_win()).count(),
        net_pnl: trades.iter().map(|t| t.pnl).sum(),
        best_trade: trades.iter().map(|t| t.pnl).reduce(f64::max),
        worst_trade: trades.iter().map(|t| t.pnl).reduce(f64::min),
        avg_r_multiple: (!r_multiples.is_empty()).then(|| mean(&r_multiples)),
    }
}

/// Per-symbol stats, biggest net winner first.
fn aggregate_symbols(trades: &[&TradeRecord]) -> Vec<SymbolStat> {
    let mut by_symbol: BTreeMap<&str, SymbolStat> = BTreeMap::new();
    for trade in trades {
        let stat = by_symbol
            .entry(trade.symbol.as_str())
            .or_insert_with(|| SymbolStat {
                symbol: trade.symbol.clone(),
                ..Default::default()
            });
        stat.trades += 1;
        stat.net_pnl += trade.pnl;
        if trade.is_win() {
            stat.wins += 1;
        }
    }
    let mut symbols: Vec<SymbolStat> = by_symbol.into_values().collect();
    symbols.sort_by(|a, b| b.net_pnl.total_cmp(&a.net_pnl));
    symbols
}

/// One cell per populated (weekday from Sunday, UTC hour), averaging pnl.
fn aggregate_heatmap(trades: &[&TradeRecord]) -> Vec<HeatmapCell> {
    let mut buckets: HashMap<(u8, u8), (f64, u32)> = HashMap::new();
    for trade in trades {
        let day = trade.opened_at.weekday().num_days_from_sunday() as u8;
        let hour = trade.opened_at.hour() as u8;
        let bucket = buckets.entry((day, hour)).or_insert((0.0, 0));
        bucket.0 += trade.pnl;
        bucket.1 += 1;
    }
    let mut cells: Vec<HeatmapCell> = buckets
        .into_iter()
        .map(|((day, hour), (sum, count))| HeatmapCell::new(day, hour, sum / count as f64, count))
        .collect();
    cells.sort_by_key(HeatmapCell::key);

    #[cfg(debug_assertions)]
    if DF.log_heatmap {
        log::info!("Aggregated {} heatmap cells", cells.len());
    }
    cells
}

fn matches_filter(trade: &TradeRecord, filter: &DrillDownFilter) -> bool {
    filter.keys().all(|key| {
        let Some(value) = filter.get(key) else {
            return true;
        };
        match (key, value) {
            (FilterKey::Symbol, FilterValue::Text(text)) => trade.symbol == *text,
            (FilterKey::StrategyType, FilterValue::Text(text)) => trade.strategy_type == *text,
            (FilterKey::ScoreGrade, FilterValue::Text(text)) => trade.score_grade == *text,
            (FilterKey::AssetType, FilterValue::Text(text)) => trade.asset_type == *text,
            (FilterKey::Direction, FilterValue::Direction(direction)) => {
                trade.direction == *direction
            }
            (FilterKey::Hour, FilterValue::Hour(hour)) => trade.opened_at.hour() == u32::from(*hour),
            (FilterKey::DateStart, FilterValue::Date(date)) => trade.trade_date() >= *date,
            (FilterKey::DateEnd, FilterValue::Date(date)) => trade.trade_date() <= *date,
            _ => {
                log::warn!("Ignoring mismatched filter entry {}={}", key, value);
                true
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::{PeriodResolver, compose},
        domain::{ChartInteraction, PeriodKind, PeriodOffset, PeriodState, TradeDirection},
    };
    use chrono::{TimeZone, Utc};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trade(id: &str, symbol: &str, direction: TradeDirection, at: (i32, u32, u32, u32), pnl: f64) -> TradeRecord {
        let (y, m, d, h) = at;
        TradeRecord {
            id: id.into(),
            symbol: symbol.into(),
            direction,
            strategy_type: "breakout".into(),
            score_grade: if pnl > 0.0 { "A".into() } else { "C".into() },
            asset_type: "crypto".into(),
            opened_at: Utc.with_ymd_and_hms(y, m, d, h, 15, 0).unwrap(),
            closed_at: Some(Utc.with_ymd_and_hms(y, m, d, h, 45, 0).unwrap()),
            pnl,
            r_multiple: Some(pnl / 100.0),
        }
    }

    fn sample() -> JournalSource {
        JournalSource::new(vec![
            // 2024-02-05 is a Monday, 2024-03-03 a Sunday
            trade("t1", "BTCUSDT", TradeDirection::Long, (2024, 2, 5, 9), 120.0),
            trade("t2", "BTCUSDT", TradeDirection::Short, (2024, 2, 5, 9), -40.0),
            trade("t3", "ETHUSDT", TradeDirection::Long, (2024, 2, 20, 14), 60.0),
            trade("t4", "ETHUSDT", TradeDirection::Short, (2024, 3, 3, 23), -10.0),
            trade("t5", "EURUSD", TradeDirection::Long, (2023, 12, 29, 7), 15.0),
        ])
    }

    fn february() -> StatsQuery {
        StatsQuery::new(DateRange::bounded(ymd(2024, 2, 1), ymd(2024, 2, 29)))
    }

    #[test]
    fn max_date_ignores_the_query_range() {
        let stats = sample().fetch_stats(&february()).unwrap();
        assert_eq!(stats.max_date, Some(ymd(2024, 3, 3)));
        assert_eq!(stats.totals.trades, 3);
    }

    #[test]
    fn totals_cover_only_the_range() {
        let totals = sample().fetch_stats(&february()).unwrap().totals;
        assert_eq!(totals.wins, 2);
        assert!((totals.net_pnl - 140.0).abs() < 1e-9);
        assert_eq!(totals.best_trade, Some(120.0));
        assert_eq!(totals.worst_trade, Some(-40.0));
        assert!((totals.win_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn symbols_sorted_by_net_pnl() {
        let stats = sample().fetch_stats(&StatsQuery::default()).unwrap();
        let names: Vec<&str> = stats.symbols.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(names, vec!["BTCUSDT", "ETHUSDT", "EURUSD"]);
        assert_eq!(stats.symbols[0].trades, 2);
        assert_eq!(stats.symbols[0].wins, 1);
        assert!((stats.symbols[0].win_rate() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn heatmap_has_one_cell_per_populated_slot() {
        let stats = sample().fetch_stats(&StatsQuery::default()).unwrap();
        assert_eq!(stats.heatmap.len(), 4);

        let monday_nine = stats.heatmap.iter().find(|c| c.key() == (1, 9)).unwrap();
        assert_eq!(monday_nine.sample_count, 2);
        assert!((monday_nine.avg_metric - 40.0).abs() < 1e-9);

        assert!(stats.heatmap.iter().any(|c| c.key() == (0, 23)));
    }

    #[test]
    fn empty_journal_yields_empty_stats() {
        let stats = JournalSource::default().fetch_stats(&StatsQuery::default()).unwrap();
        assert!(stats.is_empty());
        assert_eq!(stats.max_date, None);
        assert!(stats.heatmap.is_empty());
        assert_eq!(stats.totals.avg_r_multiple, None);
    }

    #[test]
    fn list_trades_honours_each_filter_key() {
        let source = sample();
        let resolver = PeriodResolver::new(ymd(2024, 3, 15));
        let last_month = PeriodState::new(PeriodKind::Month, PeriodOffset::new(1));
        let page = Page::first(10);

        let ids = |interaction: ChartInteraction, period: PeriodState| -> Vec<String> {
            let filter = compose(&interaction, period, &resolver);
            source
                .list_trades(&filter, page)
                .unwrap()
                .trades
                .into_iter()
                .map(|t| t.id)
                .collect()
        };

        assert_eq!(ids(ChartInteraction::Symbol("ETHUSDT".into()), last_month), vec!["t3"]);
        assert_eq!(
            ids(ChartInteraction::Symbol("ETHUSDT".into()), PeriodState::default()),
            vec!["t4", "t3"]
        );
        assert_eq!(
            ids(ChartInteraction::Direction(TradeDirection::Short), PeriodState::default()),
            vec!["t4", "t2"]
        );
        assert_eq!(ids(ChartInteraction::Hour(9), PeriodState::default()), vec!["t1", "t2"]);
        assert_eq!(ids(ChartInteraction::Grade("C".into()), last_month), vec!["t2"]);
        assert_eq!(ids(ChartInteraction::AssetType("forex".into()), PeriodState::default()).len(), 0);
        assert_eq!(ids(ChartInteraction::Strategy("breakout".into()), last_month).len(), 3);
        assert_eq!(
            ids(
                ChartInteraction::Span {
                    start: ymd(2023, 12, 1),
                    end: ymd(2024, 2, 5)
                },
                last_month
            ),
            vec!["t1", "t2", "t5"]
        );
        assert_eq!(ids(ChartInteraction::Unidentified, last_month).len(), 5);
    }

    #[test]
    fn list_trades_paginates() {
        let source = sample();
        let first = source.list_trades(&DrillDownFilter::default(), Page::first(2)).unwrap();
        assert_eq!(first.total, 5);
        assert_eq!(first.trades.len(), 2);
        assert_eq!(first.page_count(), 3);
        assert!(first.has_next());

        let last = source
            .list_trades(&DrillDownFilter::default(), Page::first(2).next().next())
            .unwrap();
        assert_eq!(last.trades.len(), 1);
        assert_eq!(last.trades[0].id, "t5");
        assert!(!last.has_next());
    }

    #[test]
    fn save_then_load_keeps_trades() {
        let path = std::env::temp_dir().join(format!("journal_lens_test_{}.json", std::process::id()));
        let source = sample();
        source.save(&path).unwrap();
        let loaded = JournalSource::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.trades(), source.trades());
    }

    #[test]
    fn missing_journal_is_an_error_with_context() {
        let err = JournalSource::load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to open journal"));
    }
}

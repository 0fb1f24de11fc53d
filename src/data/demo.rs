use {
    chrono::{Days, NaiveDate, TimeDelta},
    rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom},
};

use crate::{
    config::DEMO,
    data::JournalSource,
    domain::{TradeDirection, TradeRecord},
};

const DEMO_SEED: u64 = 0x5EED_1A7E;

/// Deterministic sample journal ending `DEMO.idle_days` before `today`.
///
/// The gap means a freshly selected period kind has to align itself to the data
/// instead of landing on an empty current period.
pub fn demo_journal(today: NaiveDate) -> JournalSource {
    let mut rng = StdRng::seed_from_u64(DEMO_SEED);
    let res = &DEMO.resources;

    let newest = today
        .checked_sub_days(Days::new(DEMO.idle_days.max(0) as u64))
        .unwrap_or(today);
    let mut trades = Vec::new();

    for days_back in (0..DEMO.history_days.max(1)).rev() {
        let Some(date) = newest.checked_sub_days(Days::new(days_back as u64)) else {
            continue;
        };
        let count = rng.gen_range(0..=DEMO.trades_per_day);
        for _ in 0..count {
            let (Some(&(symbol, asset_type)), Some(&strategy), Some(&hour)) = (
                res.symbols.choose(&mut rng),
                res.strategies.choose(&mut rng),
                res.session_hours_utc.choose(&mut rng),
            ) else {
                continue;
            };
            let minute = rng.gen_range(0..60);
            let Some(opened_at) = date.and_hms_opt(hour, minute, 0).map(|dt| dt.and_utc()) else {
                continue;
            };

            // Morning-session bias so the heatmap has visible structure.
            let edge = if hour < 12 { 25.0 } else { -5.0 };
            let pnl: f64 = (rng.gen_range(-150.0f64..150.0) + edge).round();
            let risk = rng.gen_range(40.0..80.0);
            let grade_index = if pnl > 50.0 { 0 } else { rng.gen_range(1..res.grades.len()) };

            trades.push(TradeRecord {
                id: format!("demo-{:05}", trades.len() + 1),
                symbol: symbol.to_string(),
                direction: if rng.gen_bool(0.55) {
                    TradeDirection::Long
                } else {
                    TradeDirection::Short
                },
                strategy_type: strategy.to_string(),
                score_grade: res.grades[grade_index].to_string(),
                asset_type: asset_type.to_string(),
                opened_at,
                closed_at: Some(opened_at + TimeDelta::minutes(rng.gen_range(5..240))),
                pnl,
                r_multiple: Some((pnl / risk * 100.0).round() / 100.0),
            });
        }
    }

    JournalSource::new(trades)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{StatsQuery, StatsSource};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn demo_journal_is_deterministic() {
        assert_eq!(demo_journal(today()).trades(), demo_journal(today()).trades());
    }

    #[test]
    fn newest_trade_sits_idle_days_before_today() {
        let journal = demo_journal(today());
        let max = journal.max_date().unwrap();
        assert!(max <= today() - Days::new(DEMO.idle_days as u64));
        assert!(max >= today() - Days::new(DEMO.idle_days as u64 + 7));
    }

    #[test]
    fn demo_trades_use_configured_vocabulary() {
        let journal = demo_journal(today());
        assert!(!journal.is_empty());
        for trade in journal.trades() {
            assert!(DEMO.resources.symbols.iter().any(|(s, _)| *s == trade.symbol));
            assert!(DEMO.resources.grades.contains(&trade.score_grade.as_str()));
            assert!(trade.hold_ms().unwrap() > 0);
        }
        let stats = journal.fetch_stats(&StatsQuery::default()).unwrap();
        assert!(stats.heatmap.len() <= 7 * DEMO.resources.session_hours_utc.len());
    }
}

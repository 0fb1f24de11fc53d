use anyhow::Result;

use crate::{
    data::{DashboardStats, Page, StatsQuery, TradePage},
    domain::DrillDownFilter,
};

/// Abstract interface over wherever the journal lives (a local file, a demo set, a remote API).
///
/// Calls are blocking; the app runs them on a background thread.
pub trait StatsSource: Send + Sync {
    /// Aggregates for one date range, plus the dataset-wide newest trade date.
    fn fetch_stats(&self, query: &StatsQuery) -> Result<DashboardStats>;

    /// One page of the trades matching a drill-down filter, newest first.
    fn list_trades(&self, filter: &DrillDownFilter, page: Page) -> Result<TradePage>;
}

use {
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

use crate::{
    domain::{DateRange, HeatmapCell, TradeRecord},
    utils::safe_ratio,
};

/// Request for the aggregation endpoint. Only the date range varies per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsQuery {
    pub range: DateRange,
}

impl StatsQuery {
    pub fn new(range: DateRange) -> Self {
        Self { range }
    }

    /// `date_start` / `date_end`, absent for all-time queries.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        self.range.query_params()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SymbolStat {
    pub symbol: String,
    pub trades: usize,
    pub wins: usize,
    pub net_pnl: f64,
}

impl SymbolStat {
    pub fn win_rate(&self) -> f64 {
        safe_ratio(self.wins as f64, self.trades as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub trades: usize,
    pub wins: usize,
    pub net_pnl: f64,
    pub best_trade: Option<f64>,
    pub worst_trade: Option<f64>,
    pub avg_r_multiple: Option<f64>,
}

impl PeriodTotals {
    pub fn win_rate(&self) -> f64 {
        safe_ratio(self.wins as f64, self.trades as f64)
    }
}

/// Everything one dashboard render needs, pre-aggregated for the queried range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Newest trade date across the whole dataset, independent of the queried range.
    pub max_date: Option<NaiveDate>,
    pub totals: PeriodTotals,
    pub symbols: Vec<SymbolStat>,
    pub heatmap: Vec<HeatmapCell>,
}

impl DashboardStats {
    pub fn is_empty(&self) -> bool {
        self.totals.trades == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub size: usize,
}

impl Page {
    pub fn first(size: usize) -> Self {
        Self {
            index: 0,
            size: size.max(1),
        }
    }

    pub fn next(self) -> Self {
        Self {
            index: self.index + 1,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradePage {
    pub trades: Vec<TradeRecord>,
    pub total: usize,
    pub page: Page,
}

impl TradePage {
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page.size.max(1))
    }

    pub fn has_next(&self) -> bool {
        self.page.index + 1 < self.page_count()
    }
}

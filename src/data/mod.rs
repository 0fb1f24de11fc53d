mod demo;
mod journal;
mod provider;
mod stats;

pub use {
    demo::demo_journal,
    journal::JournalSource,
    provider::StatsSource,
    stats::{DashboardStats, Page, PeriodTotals, StatsQuery, SymbolStat, TradePage},
};

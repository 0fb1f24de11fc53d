use {anyhow::Result, poll_promise::Promise};

use crate::{
    analysis::HeatmapGrid,
    data::{DashboardStats, TradePage},
    domain::{ChartInteraction, DrillDownFilter, PeriodState},
};

/// An in-flight stats request. Dropping it discards whatever the worker returns.
pub(crate) struct PendingStats {
    pub(crate) period: PeriodState,
    pub(crate) promise: Promise<Result<DashboardStats>>,
}

pub(crate) struct LoadedStats {
    pub(crate) period: PeriodState,
    pub(crate) stats: DashboardStats,
    pub(crate) grid: HeatmapGrid,
}

pub(crate) struct DrillDownView {
    pub(crate) interaction: ChartInteraction,
    pub(crate) filter: DrillDownFilter,
    pub(crate) page: Result<TradePage, String>,
}

#[derive(Default)]
pub(crate) enum AppState {
    /// Nothing requested yet (first frame, before the source is queried)
    #[default]
    Idle,
    Loading(PendingStats),
    Ready(LoadedStats),
    Failed(String),
}

/// What the user did this frame that needs the controller's attention.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UiAction {
    SetPeriod(PeriodState),
    DrillDown(ChartInteraction),
    ChangePage(usize),
    CloseDrillDown,
}

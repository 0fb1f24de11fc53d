//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Period kind changes and back/forward navigation.
    pub log_period_nav: bool,

    /// Every stats request sent to the journal source (range + timing).
    pub log_stats_fetch: bool,

    /// Filters produced by chart clicks.
    pub log_drill_down: bool,

    /// Window and max-metric for each freshly built heatmap grid.
    pub log_heatmap: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Journal loading and demo generation.
    pub log_journal: bool,
}

pub const DF: LogFlags = LogFlags {
    log_period_nav: true,
    log_drill_down: true,

    log_stats_fetch: false,
    log_heatmap: false,
    log_performance: false,
    log_journal: false,
};

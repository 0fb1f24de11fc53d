use std::sync::LazyLock;

pub const ICON_OLDER: &str = "\u{00ab}"; // «
pub const ICON_NEWER: &str = "\u{00bb}"; // »
pub const ICON_CLOSE: &str = "\u{00d7}"; // ×
pub const ICON_BULLET: &str = "\u{2022}";

pub struct UiText {
    pub app_title: String,

    // Period toolbar
    pub pb_period: String,
    pub pb_older: String,
    pub pb_newer: String,
    pub pb_data_through: String,
    pub pb_no_data_date: String,
    pub pb_utc_offset: String,

    // Loading / empty / failure screens
    pub ls_title: String,
    pub ls_subtitle: String,
    pub empty_title: String,
    pub empty_hint: String,
    pub error_title: String,
    pub error_hint: String,
    pub error_no_source: String,
    pub error_retry: String,

    // Summary panel
    pub sp_heading: String,
    pub sp_trades: String,
    pub sp_win_rate: String,
    pub sp_net_pnl: String,
    pub sp_best: String,
    pub sp_worst: String,
    pub sp_avg_r: String,
    pub sp_symbols_heading: String,
    pub sp_symbols_hint: String,

    // Heatmap
    pub hm_heading: String,
    pub hm_hint: String,
    pub hm_empty: String,
    pub hm_no_samples: String,

    // Drill-down table
    pub dd_heading: String,
    pub dd_hint: String,
    pub dd_query: String,
    pub dd_no_rows: String,
    pub dd_col_opened: String,
    pub dd_col_symbol: String,
    pub dd_col_side: String,
    pub dd_col_strategy: String,
    pub dd_col_grade: String,
    pub dd_col_hold: String,
    pub dd_col_r: String,
    pub dd_col_pnl: String,
    pub dd_page: String,
    pub dd_close: String,

    // Keyboard Shortcuts Pane
    pub kbs_name: String,
    pub kbs_rows: Vec<(String, String)>,

    pub label_none: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Journal Lens".to_string(),

    pb_period: "Period:".to_string(),
    pb_older: format!("{} Older", ICON_OLDER),
    pb_newer: format!("Newer {}", ICON_NEWER),
    pb_data_through: "Data through".to_string(),
    pb_no_data_date: "No trades yet".to_string(),
    pb_utc_offset: "Local time".to_string(),

    ls_title: "Loading statistics".to_string(),
    ls_subtitle: "Aggregating trades for".to_string(),
    empty_title: "No trades in this period".to_string(),
    empty_hint: "Step back to an earlier period or switch to All Time.".to_string(),
    error_title: "Could not load the journal".to_string(),
    error_hint: "Run with --demo to explore sample data, or pass --journal <path>.".to_string(),
    error_no_source: "No journal is open".to_string(),
    error_retry: "Retry".to_string(),

    sp_heading: "Summary".to_string(),
    sp_trades: "Trades".to_string(),
    sp_win_rate: "Win rate".to_string(),
    sp_net_pnl: "Net P&L".to_string(),
    sp_best: "Best".to_string(),
    sp_worst: "Worst".to_string(),
    sp_avg_r: "Avg R".to_string(),
    sp_symbols_heading: "Net P&L by Symbol".to_string(),
    sp_symbols_hint: "Click a bar to list its trades".to_string(),

    hm_heading: "Average P&L by Weekday and Hour".to_string(),
    hm_hint: "Click a cell to list trades opened in that hour".to_string(),
    hm_empty: "No heatmap data for this period".to_string(),
    hm_no_samples: "no samples".to_string(),

    dd_heading: "Trades".to_string(),
    dd_hint: "Click a chart element to list its trades.".to_string(),
    dd_query: "Query".to_string(),
    dd_no_rows: "No trades match this selection".to_string(),
    dd_col_opened: "Opened (UTC)".to_string(),
    dd_col_symbol: "Symbol".to_string(),
    dd_col_side: "Side".to_string(),
    dd_col_strategy: "Strategy".to_string(),
    dd_col_grade: "Grade".to_string(),
    dd_col_hold: "Hold".to_string(),
    dd_col_r: "R".to_string(),
    dd_col_pnl: "P&L".to_string(),
    dd_page: "Page".to_string(),
    dd_close: format!("{} Close", ICON_CLOSE),

    kbs_name: "Keyboard Shortcuts".to_string(),
    kbs_rows: [
        ("A", "All Time"),
        ("W / M / Q / Y", "Week / Month / Quarter / Year (aligned to latest data)"),
        ("Left", "Older period"),
        ("Right", "Newer period"),
        ("D", "Toggle the trades table"),
        ("H", "Toggle this help panel"),
        ("ESC", "Close help and clear the drill-down"),
    ]
    .iter()
    .map(|(key, text)| (key.to_string(), format!("{} {}", ICON_BULLET, text)))
    .collect(),

    label_none: "-".to_string(),
});

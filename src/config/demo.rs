pub struct DemoResources {
    pub symbols: &'static [(&'static str, &'static str)], // (symbol, asset type)
    pub strategies: &'static [&'static str],
    pub grades: &'static [&'static str],
    /// UTC hours the demo trader is active in
    pub session_hours_utc: &'static [u32],
}

pub struct DemoConfig {
    /// How far back the generated journal reaches
    pub history_days: i64,
    /// Days between the newest demo trade and "today", so the dashboard has to auto-align
    pub idle_days: i64,
    pub trades_per_day: usize,
    pub resources: DemoResources,
}

pub const DEMO: DemoConfig = DemoConfig {
    history_days: 400,
    idle_days: 45,
    trades_per_day: 3,
    resources: DemoResources {
        symbols: &[
            ("BTCUSDT", "crypto"),
            ("ETHUSDT", "crypto"),
            ("EURUSD", "forex"),
            ("NQ", "futures"),
            ("AAPL", "stock"),
        ],
        strategies: &["breakout", "pullback", "reversal", "range"],
        grades: &["A", "B", "C", "D"],
        session_hours_utc: &[7, 8, 9, 13, 14, 15, 20],
    },
};

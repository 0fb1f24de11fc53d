//! File persistence configuration

/// Configuration for the trade journal file
pub struct JournalPersistenceConfig {
    /// Default journal location when `--journal` is not given
    pub default_path: &'static str,
    /// Rows per page in the drill-down list
    pub page_size: usize,
}

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub journal: JournalPersistenceConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    journal: JournalPersistenceConfig {
        default_path: "journal.json",
        page_size: 25,
    },
    app: AppPersistenceConfig {
        state_path: ".journal_lens_state.json",
    },
};

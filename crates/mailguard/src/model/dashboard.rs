//! Dashboard state.

use mailguard_core::HistoryEntry;

/// State of the results and history screen.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Prior scans, in the order the backend returned them.
    pub history: Vec<HistoryEntry>,
    /// Whether a history request is in flight.
    pub is_loading: bool,
    /// Error from the last history load.
    pub error: Option<String>,
}

impl DashboardState {
    /// State for a freshly entered dashboard, with the history load
    /// already marked as started.
    #[must_use]
    pub fn entered() -> Self {
        Self {
            history: Vec::new(),
            is_loading: true,
            error: None,
        }
    }
}

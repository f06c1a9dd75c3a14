//! On-disk session shape.

use serde::{Deserialize, Serialize};

use crate::api::ScanRecord;

/// The screen the application is showing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// Token entry screen.
    #[default]
    Auth,
    /// Email submission form.
    Scan,
    /// Latest result and scan history.
    Dashboard,
}

/// Everything persisted between runs, minus the credential.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    /// Last active view.
    pub view: ViewState,
    /// Most recent scan result, shown on the dashboard.
    #[serde(default)]
    pub scan: Option<ScanRecord>,
}

impl PersistedSession {
    /// A session positioned on the given view with no scan attached.
    #[must_use]
    pub fn at(view: ViewState) -> Self {
        Self { view, scan: None }
    }
}

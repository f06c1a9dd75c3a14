//! Per-screen state for the application.

mod auth;
mod dashboard;
mod scan;

pub use auth::AuthState;
pub use dashboard::DashboardState;
pub use scan::{Readiness, ScanState};

//! View components for the application.

mod auth;
mod dashboard;
mod scan;
mod verifying;

pub use auth::view_auth;
pub use dashboard::view_dashboard;
pub use scan::view_scan;
pub use verifying::view_verifying;

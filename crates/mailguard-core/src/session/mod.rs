//! Session persistence across application restarts.
//!
//! The view and latest scan go to a JSON file under the platform data
//! directory; the session JWT goes to the platform keyring.

pub mod credentials;
mod model;
mod repository;

pub use model::{PersistedSession, ViewState};
pub use repository::SessionRepository;

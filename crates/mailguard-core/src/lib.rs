//! # mailguard-core
//!
//! Core logic for `MailGuard`, a desktop client for an email-security
//! analysis backend.
//!
//! This crate provides:
//! - Backend API client (authentication, scanning, history, readiness)
//! - Error taxonomy shared between the client and the interface
//! - View coordination (which screen is active, stale-result handling)
//! - Session persistence (JSON file plus keyring-held credential)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod api;
pub mod coordinator;
mod error;
pub mod session;

pub use api::{
    ApiClient, ApiConfig, ApiError, ApiResult, Decision, EngineStatus, HistoryEntry, ModelVerdict,
    ScanRecord, MAX_EMAIL_CHARS,
};
pub use coordinator::{Coordinator, PersistEffect};
pub use error::{Error, Result};
pub use session::{credentials, PersistedSession, SessionRepository, ViewState};

//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use mailguard_core::{ApiError, EngineStatus, HistoryEntry, PersistedSession, ScanRecord};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Startup
    /// Saved session and stored credential loaded from disk.
    SessionRestored {
        /// Persisted view and scan, if a session file existed.
        saved: Option<PersistedSession>,
        /// Session JWT from the keyring, if one was stored.
        jwt: Option<String>,
    },
    /// Backend liveness check for a restored session completed.
    LivenessChecked(Result<(), ApiError>),

    // Screens
    /// Authentication screen messages.
    Auth(AuthMessage),
    /// Scan form messages.
    Scan(ScanMessage),
    /// Dashboard messages.
    Dashboard(DashboardMessage),

    // Session
    /// The user pressed logout.
    LogoutRequested,
    /// The backend logout call finished (result ignored).
    LogoutCompleted,
    /// Session persistence finished.
    SessionPersisted(Result<(), String>),
}

/// Messages for the authentication screen.
#[derive(Debug, Clone)]
pub enum AuthMessage {
    /// Token input changed.
    TokenChanged(String),
    /// Submit the token.
    Submit,
    /// Authentication completed; `Ok` carries the session JWT.
    Completed(Result<String, ApiError>),
}

/// Messages for the scan form.
#[derive(Debug, Clone)]
pub enum ScanMessage {
    /// Email text changed.
    EmailTextChanged(String),
    /// Load one of the sample emails into the form.
    LoadSample(SampleEmail),
    /// Periodic readiness poll fired.
    ProbeTick,
    /// The user pressed retry on the not-ready banner.
    ProbeRequested,
    /// Readiness probe completed.
    ProbeCompleted(Result<EngineStatus, ApiError>),
    /// Submit the email for analysis.
    Submit,
    /// Scan completed.
    Completed(Result<ScanRecord, ApiError>),
}

/// Messages for the dashboard.
#[derive(Debug, Clone)]
pub enum DashboardMessage {
    /// Start a new scan.
    NewScan,
    /// Scan history loaded from the backend.
    HistoryLoaded(Result<Vec<HistoryEntry>, ApiError>),
}

/// Built-in example emails for trying out the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleEmail {
    /// Credential-phishing example.
    Phishing,
    /// Bulk-offer spam example.
    Spam,
    /// Ordinary work email.
    Safe,
}

impl SampleEmail {
    /// The email body loaded into the form.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Phishing => {
                "Dear Customer,\n\nYour account has been suspended due to suspicious activity detected on your account. \nThis is URGENT and requires immediate attention.\n\nPlease click here to verify your identity and restore access:\nhttp://secure-bank-verify.tk/account/verify\n\nIf you don't verify within 24 hours, your account will be permanently locked.\n\nBest regards,\nBank Security Team"
            }
            Self::Spam => {
                "CONGRATULATIONS! You've been selected for a LIMITED TIME OFFER!\n\nGet 90% OFF on amazing products! \nAct now before this offer expires!\n\nClick here to claim your discount:\nhttp://amazing-offers.ga/discount\n\nDon't miss this incredible opportunity!\nLimited time only!"
            }
            Self::Safe => {
                "Hi John,\n\nThanks for your email regarding the project update. I've reviewed the documents you sent and everything looks good.\n\nLet's schedule a meeting next week to discuss the next steps. I'm available on Tuesday or Thursday afternoon.\n\nBest regards,\nSarah"
            }
        }
    }

    /// Button label on the scan form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Phishing => "Phishing Sample",
            Self::Spam => "Spam Sample",
            Self::Safe => "Safe Sample",
        }
    }
}

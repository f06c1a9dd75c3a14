//! Error taxonomy for backend API calls.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by the analysis backend client.
///
/// Every transport or backend failure is converted into exactly one of
/// these variants at the client boundary; raw `reqwest` errors never
/// escape. Variants carry only display data, so results can cross task
/// boundaries by clone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend no longer recognizes the session.
    #[error("Authentication required. Please log in again.")]
    Unauthorized,

    /// Too many authentication attempts within the cooldown window.
    #[error(
        "Too many authentication attempts. Please wait {} minutes before trying again.",
        .cooldown.as_secs() / 60
    )]
    RateLimited {
        /// How long the backend expects the client to wait.
        cooldown: Duration,
    },

    /// The submitted access token was rejected as unrecognized.
    #[error("Invalid token. Please check your token and try again.")]
    InvalidCredential,

    /// The request was rejected client-side, before any network call.
    #[error("{0}")]
    InvalidInput(String),

    /// The analysis engine reports it is not ready to scan.
    #[error("The analysis engine is not ready yet. Please try again shortly.")]
    ServiceNotReady,

    /// The request timed out. Retryable, distinct from a hard failure.
    #[error("The analysis request timed out. Please try again.")]
    Timeout,

    /// Any other backend or transport failure.
    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    /// Cooldown window the backend enforces on authentication attempts.
    pub(crate) const AUTH_COOLDOWN: Duration = Duration::from_secs(7 * 60);

    /// Rate-limit error carrying the backend's cooldown window.
    #[must_use]
    pub const fn rate_limited() -> Self {
        Self::RateLimited {
            cooldown: Self::AUTH_COOLDOWN,
        }
    }

    /// Whether this error means the session is invalid and the client
    /// must drop back to authentication.
    #[must_use]
    pub const fn is_session_invalid(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Whether retrying the same request can reasonably succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::ServiceNotReady | Self::RateLimited { .. }
        )
    }

    /// Converts a transport-level failure, keeping timeouts distinct.
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Unknown(format!("Request failed: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_message_names_the_wait() {
        let message = ApiError::rate_limited().to_string();
        assert!(message.contains("7 minutes"), "got: {message}");
    }

    #[test]
    fn only_unauthorized_invalidates_the_session() {
        assert!(ApiError::Unauthorized.is_session_invalid());
        assert!(!ApiError::Timeout.is_session_invalid());
        assert!(!ApiError::ServiceNotReady.is_session_invalid());
        assert!(!ApiError::InvalidCredential.is_session_invalid());
    }

    #[test]
    fn retryable_classification() {
        assert!(ApiError::Timeout.is_retryable());
        assert!(ApiError::ServiceNotReady.is_retryable());
        assert!(ApiError::rate_limited().is_retryable());
        assert!(!ApiError::Unauthorized.is_retryable());
        assert!(!ApiError::InvalidCredential.is_retryable());
    }
}

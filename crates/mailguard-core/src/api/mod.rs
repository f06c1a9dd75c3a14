//! Async HTTP client for the email-security analysis backend.
//!
//! All calls return [`ApiError`] taxonomy values; raw transport faults
//! are mapped at this boundary and never propagate to callers.

mod error;
mod model;

pub use error::{ApiError, ApiResult};
pub use model::{Decision, EngineStatus, HistoryEntry, ModelVerdict, ScanRecord};

use std::time::Duration;

use reqwest::{Method, StatusCode, header};
use tracing::{debug, warn};
use url::Url;

use model::{EngineStatusResponse, ErrorDetail, HistoryResponse};

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "MAILGUARD_API_URL";

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:9080";

/// Maximum accepted email size, in characters.
pub const MAX_EMAIL_CHARS: usize = 10_000;

/// Cookie carrying the backend session JWT.
const SESSION_COOKIE: &str = "auth_token";

/// Timeout for short control-plane requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Extended submission timeout tolerating analysis-engine cold starts.
const SCAN_TIMEOUT: Duration = Duration::from_secs(300);

/// Backend connection settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the analysis backend.
    pub base_url: Url,
}

impl ApiConfig {
    /// Reads the base URL from [`API_URL_ENV`], falling back to
    /// [`DEFAULT_API_URL`] when unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(API_URL_ENV).map_or_else(
            |_| Self::default(),
            |raw| match Url::parse(&raw) {
                Ok(base_url) => Self { base_url },
                Err(e) => {
                    warn!("ignoring invalid {API_URL_ENV}={raw}: {e}");
                    Self::default()
                }
            },
        )
    }
}

impl Default for ApiConfig {
    // The compiled-in default is a valid URL.
    #[allow(clippy::unwrap_used)]
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).unwrap(),
        }
    }
}

/// Client for the analysis backend.
///
/// Cheap to clone; clones share the underlying connection pool. The
/// session JWT is attached as the `auth_token` cookie on every request
/// once [`ApiClient::with_session`] has been applied.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Option<String>,
}

impl ApiClient {
    /// Creates a client with no active session.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            session: None,
        }
    }

    /// Returns a copy of this client carrying the given session JWT.
    #[must_use]
    pub fn with_session(&self, jwt: impl Into<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            session: Some(jwt.into()),
        }
    }

    /// The active session JWT, if any.
    #[must_use]
    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    fn endpoint(&self, path: &str) -> Url {
        self.base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .request(method, self.endpoint(path))
            .timeout(REQUEST_TIMEOUT);
        if let Some(jwt) = &self.session {
            request = request.header(header::COOKIE, format!("{SESSION_COOKIE}={jwt}"));
        }
        request
    }

    /// Verifies that the backend still honors the current session.
    ///
    /// Any failure, transport or HTTP, means the session cannot be
    /// trusted and the caller must fall back to authentication.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] on every failure.
    pub async fn check_health(&self) -> ApiResult<()> {
        let response = self
            .request(Method::GET, "/health")
            .send()
            .await
            .map_err(|e| {
                debug!("health check transport failure: {e}");
                ApiError::Unauthorized
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            debug!("health check returned status {}", response.status());
            Err(ApiError::Unauthorized)
        }
    }

    /// Submits an access token. One attempt per call; no client-side
    /// retry or backoff.
    ///
    /// On success, returns the session JWT issued by the backend via the
    /// `auth_token` cookie.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredential`] for a rejected token,
    /// [`ApiError::RateLimited`] when the cooldown window is active, and
    /// [`ApiError::Unknown`] for everything else.
    pub async fn authenticate(&self, token: &str) -> ApiResult<String> {
        let response = self
            .request(Method::POST, "/auth/token")
            .json(&serde_json::json!({ "token": token }))
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_auth_failure(status));
        }

        response
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| ApiError::Unknown("Backend did not issue a session cookie.".to_string()))
    }

    /// Ends the backend session. Failures are logged and ignored; the
    /// caller clears its local state regardless.
    pub async fn logout(&self) {
        match self.request(Method::POST, "/auth/logout").send().await {
            Ok(response) if response.status().is_success() => debug!("logout acknowledged"),
            Ok(response) => debug!("logout returned status {}", response.status()),
            Err(e) => debug!("logout request failed: {e}"),
        }
    }

    /// Probes analysis-engine readiness.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unknown`] for transport failures or a
    /// malformed response. Callers treat a probe error as not-ready.
    pub async fn engine_status(&self) -> ApiResult<EngineStatus> {
        let response = self
            .request(Method::GET, "/models/status")
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Unknown(format!(
                "Status probe failed (status {status})."
            )));
        }

        let body: EngineStatusResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Unknown(format!("Malformed status response: {e}")))?;
        Ok(body.status)
    }

    /// Submits email text for analysis.
    ///
    /// Input is validated locally first; empty or oversized text never
    /// reaches the backend. The request uses an extended timeout so a
    /// cold-starting engine still gets a chance to answer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] for rejected input,
    /// [`ApiError::Unauthorized`] when the session is no longer valid,
    /// [`ApiError::ServiceNotReady`] when the engine refuses, and
    /// [`ApiError::Timeout`] for gateway or transport timeouts.
    pub async fn scan_email(&self, email_text: &str) -> ApiResult<ScanRecord> {
        validate_email_text(email_text)?;

        let response = self
            .request(Method::POST, "/scan/email")
            .timeout(SCAN_TIMEOUT)
            .json(&serde_json::json!({ "email_text": email_text }))
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Unknown(format!("Malformed scan response: {e}")));
        }

        let detail = read_detail(response).await;
        Err(map_scan_failure(status, detail))
    }

    /// Fetches prior scans for the authenticated user, in backend order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when the session is no longer
    /// valid, [`ApiError::Unknown`] otherwise.
    pub async fn fetch_history(&self) -> ApiResult<Vec<HistoryEntry>> {
        let response = self
            .request(Method::GET, "/history")
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Unknown(format!(
                "Failed to load history (status {status})."
            )));
        }

        let body: HistoryResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Unknown(format!("Malformed history response: {e}")))?;
        Ok(body.history)
    }
}

/// Rejects email text the backend would refuse anyway.
fn validate_email_text(email_text: &str) -> ApiResult<()> {
    if email_text.trim().is_empty() {
        return Err(ApiError::InvalidInput(
            "Email text is empty. Paste the email content to analyze.".to_string(),
        ));
    }
    let length = email_text.chars().count();
    if length > MAX_EMAIL_CHARS {
        return Err(ApiError::InvalidInput(format!(
            "Email text is too long ({length} characters, limit {MAX_EMAIL_CHARS})."
        )));
    }
    Ok(())
}

/// Maps a failed `POST /auth/token` status to the error taxonomy.
fn map_auth_failure(status: StatusCode) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::InvalidCredential,
        StatusCode::TOO_MANY_REQUESTS => ApiError::rate_limited(),
        _ => ApiError::Unknown(format!("Authentication failed (status {status}).")),
    }
}

/// Maps a failed `POST /scan/email` status to the error taxonomy,
/// surfacing the backend's explanatory message when one was supplied.
fn map_scan_failure(status: StatusCode, detail: Option<String>) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::SERVICE_UNAVAILABLE => ApiError::ServiceNotReady,
        StatusCode::GATEWAY_TIMEOUT => ApiError::Timeout,
        _ => ApiError::Unknown(
            detail.unwrap_or_else(|| format!("Scan failed (status {status}). Please try again.")),
        ),
    }
}

/// Reads the FastAPI-style `detail` message from an error body, if any.
async fn read_detail(response: reqwest::Response) -> Option<String> {
    response
        .json::<ErrorDetail>()
        .await
        .ok()
        .and_then(|body| body.detail)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn auth_failure_mapping() {
        assert_eq!(
            map_auth_failure(StatusCode::UNAUTHORIZED),
            ApiError::InvalidCredential
        );
        assert_eq!(
            map_auth_failure(StatusCode::TOO_MANY_REQUESTS),
            ApiError::rate_limited()
        );
        assert!(matches!(
            map_auth_failure(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Unknown(_)
        ));
    }

    #[test]
    fn scan_failure_mapping() {
        assert_eq!(
            map_scan_failure(StatusCode::UNAUTHORIZED, None),
            ApiError::Unauthorized
        );
        assert_eq!(
            map_scan_failure(StatusCode::SERVICE_UNAVAILABLE, None),
            ApiError::ServiceNotReady
        );
        assert_eq!(
            map_scan_failure(StatusCode::GATEWAY_TIMEOUT, None),
            ApiError::Timeout
        );
    }

    #[test]
    fn scan_failure_surfaces_backend_detail() {
        let err = map_scan_failure(
            StatusCode::BAD_REQUEST,
            Some("Input contains disallowed content".to_string()),
        );
        assert_eq!(
            err,
            ApiError::Unknown("Input contains disallowed content".to_string())
        );
    }

    #[test]
    fn empty_email_rejected_before_any_network_call() {
        assert!(matches!(
            validate_email_text("   \n"),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn oversized_email_rejected_before_any_network_call() {
        let text = "a".repeat(MAX_EMAIL_CHARS + 1);
        assert!(matches!(
            validate_email_text(&text),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn email_at_the_limit_is_accepted() {
        let text = "a".repeat(MAX_EMAIL_CHARS);
        assert!(validate_email_text(&text).is_ok());
    }

    #[test]
    fn config_default_points_at_localhost() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:9080/");
    }

    #[test]
    fn with_session_keeps_the_jwt() {
        let client = ApiClient::new(&ApiConfig::default());
        assert!(client.session().is_none());

        let authed = client.with_session("jwt-value");
        assert_eq!(authed.session(), Some("jwt-value"));
    }
}

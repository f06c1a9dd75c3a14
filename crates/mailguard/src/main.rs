//! `MailGuard` - Desktop client for an email-security analysis backend
//!
//! Built with Rust and the iced GUI framework.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::time::Duration;

use iced::{Element, Subscription, Task};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mailguard_core::{
    ApiClient, ApiConfig, ApiError, Coordinator, EngineStatus, HistoryEntry, PersistEffect,
    PersistedSession, ScanRecord, SessionRepository, ViewState, credentials,
};

use message::{AuthMessage, DashboardMessage, Message, ScanMessage};
use model::{AuthState, DashboardState, Readiness, ScanState};

/// How often to re-probe engine readiness while it is not ready.
const PROBE_INTERVAL: Duration = Duration::from_secs(10);

/// Error shown when a restored or active session stops being honored.
const SESSION_EXPIRED_NOTICE: &str = "Authentication required. Please log in again.";

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailguard=debug,mailguard_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MailGuard");

    iced::application(MailGuard::new, MailGuard::update, MailGuard::view)
        .title("MailGuard")
        .subscription(MailGuard::subscription)
        .run()
}

/// Main application state.
struct MailGuard {
    /// Backend connection settings.
    config: ApiConfig,
    /// Backend client; replaced whenever the session changes.
    api: ApiClient,
    /// Session file store.
    repository: SessionRepository,
    /// View coordination and persistence decisions.
    coordinator: Coordinator,
    /// Authentication screen state.
    auth: AuthState,
    /// Scan form state.
    scan: ScanState,
    /// Dashboard state.
    dashboard: DashboardState,
}

impl MailGuard {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let config = ApiConfig::from_env();
        let repository = SessionRepository::new(session_path());

        let app = Self {
            api: ApiClient::new(&config),
            config,
            repository: repository.clone(),
            coordinator: Coordinator::starting(),
            auth: AuthState::new(),
            scan: ScanState::new(),
            dashboard: DashboardState::default(),
        };

        let restore_task = Task::perform(restore_session(repository), |(saved, jwt)| {
            Message::SessionRestored { saved, jwt }
        });
        (app, restore_task)
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SessionRestored { saved, jwt } => {
                self.coordinator = Coordinator::restore(saved);
                if !self.coordinator.is_verifying() {
                    if credential_is_orphaned(&self.coordinator, jwt.as_deref()) {
                        // A credential with no session behind it would
                        // otherwise linger in the keyring forever.
                        info!("removing stored credential with no saved session");
                        if let Err(e) = credentials::delete_session_jwt() {
                            warn!("failed to delete stale session credential: {e}");
                        }
                    }
                    return Task::none();
                }
                match jwt {
                    Some(jwt) => {
                        self.api = self.api.with_session(jwt);
                        Task::perform(check_liveness(self.api.clone()), Message::LivenessChecked)
                    }
                    None => {
                        // A restored view without a stored credential
                        // cannot be verified.
                        info!("restored session has no stored credential");
                        self.handle_invalidation()
                    }
                }
            }
            Message::LivenessChecked(result) => match result {
                Ok(()) => {
                    self.coordinator.verified_ok();
                    info!("restored session verified");
                    self.enter_current_view()
                }
                Err(e) => {
                    info!("restored session rejected: {e}");
                    self.handle_invalidation()
                }
            },
            Message::Auth(msg) => self.handle_auth(msg),
            Message::Scan(msg) => self.handle_scan(msg),
            Message::Dashboard(msg) => self.handle_dashboard(msg),
            Message::LogoutRequested => {
                let old_api = self.api.clone();
                let effect = self.coordinator.logged_out();
                self.api = ApiClient::new(&self.config);
                self.auth = AuthState::new();
                self.scan = ScanState::new();
                self.dashboard = DashboardState::default();
                Task::batch([
                    self.apply_effect(effect),
                    Task::perform(run_logout(old_api), |()| Message::LogoutCompleted),
                ])
            }
            Message::LogoutCompleted => Task::none(),
            Message::SessionPersisted(result) => {
                if let Err(e) = result {
                    warn!("failed to persist session: {e}");
                }
                Task::none()
            }
        }
    }

    /// Handle authentication screen messages.
    fn handle_auth(&mut self, msg: AuthMessage) -> Task<Message> {
        match msg {
            AuthMessage::TokenChanged(token) => {
                self.auth.token = token;
            }
            AuthMessage::Submit => {
                if self.auth.can_submit() {
                    self.auth.is_authenticating = true;
                    self.auth.error = None;
                    let token = self.auth.token.clone();
                    return Task::perform(authenticate(self.api.clone(), token), |result| {
                        Message::Auth(AuthMessage::Completed(result))
                    });
                }
            }
            AuthMessage::Completed(result) => {
                self.auth.is_authenticating = false;
                match result {
                    Ok(jwt) => {
                        if let Err(e) = credentials::store_session_jwt(&jwt) {
                            warn!("failed to store session credential: {e}");
                        }
                        self.api = self.api.with_session(jwt);
                        let effect = self.coordinator.auth_succeeded();
                        if effect == PersistEffect::None {
                            return Task::none();
                        }
                        self.auth = AuthState::new();
                        self.scan = ScanState::new();
                        return Task::batch([self.apply_effect(effect), self.start_probe()]);
                    }
                    Err(e) => {
                        self.auth.error = Some(e.to_string());
                    }
                }
            }
        }
        Task::none()
    }

    /// Handle scan form messages.
    fn handle_scan(&mut self, msg: ScanMessage) -> Task<Message> {
        match msg {
            ScanMessage::EmailTextChanged(email_text) => {
                self.scan.email_text = email_text;
            }
            ScanMessage::LoadSample(sample) => {
                if !self.scan.is_scanning {
                    self.scan.email_text = sample.text().to_string();
                    self.scan.error = None;
                }
            }
            ScanMessage::ProbeTick => {
                if self.coordinator.view() == ViewState::Scan
                    && !self.coordinator.is_verifying()
                    && self.scan.readiness.needs_polling()
                {
                    return self.start_probe();
                }
            }
            ScanMessage::ProbeRequested => {
                return self.start_probe();
            }
            ScanMessage::ProbeCompleted(result) => {
                self.scan.is_probing = false;
                match result {
                    Ok(status) => {
                        self.scan.readiness = Readiness::Known(status);
                    }
                    Err(e) => {
                        // An unreachable status endpoint means the
                        // engine cannot accept submissions either.
                        info!("readiness probe failed: {e}");
                        self.scan.readiness = Readiness::Known(EngineStatus::NotReady);
                    }
                }
            }
            ScanMessage::Submit => {
                if self.scan.can_submit() {
                    self.scan.is_scanning = true;
                    self.scan.error = None;
                    let email_text = self.scan.email_text.clone();
                    return Task::perform(submit_scan(self.api.clone(), email_text), |result| {
                        Message::Scan(ScanMessage::Completed(result))
                    });
                }
            }
            ScanMessage::Completed(result) => {
                self.scan.is_scanning = false;
                match result {
                    Ok(record) => {
                        let effect = self.coordinator.scan_completed(record);
                        if effect == PersistEffect::None {
                            // Result arrived after the user left the
                            // scan view.
                            return Task::none();
                        }
                        self.dashboard = DashboardState::entered();
                        return Task::batch([
                            self.apply_effect(effect),
                            Task::perform(load_history(self.api.clone()), |result| {
                                Message::Dashboard(DashboardMessage::HistoryLoaded(result))
                            }),
                        ]);
                    }
                    Err(e) if e.is_session_invalid() => {
                        return self.handle_invalidation();
                    }
                    Err(e) => {
                        self.scan.error = Some(e.to_string());
                    }
                }
            }
        }
        Task::none()
    }

    /// Handle dashboard messages.
    fn handle_dashboard(&mut self, msg: DashboardMessage) -> Task<Message> {
        match msg {
            DashboardMessage::NewScan => {
                let effect = self.coordinator.new_scan_requested();
                if effect == PersistEffect::None {
                    return Task::none();
                }
                self.scan = ScanState::new();
                return Task::batch([self.apply_effect(effect), self.start_probe()]);
            }
            DashboardMessage::HistoryLoaded(result) => {
                if self.coordinator.view() != ViewState::Dashboard {
                    // The user left the dashboard before the load
                    // finished.
                    return Task::none();
                }
                self.dashboard.is_loading = false;
                match result {
                    Ok(history) => {
                        info!("loaded {} history entries", history.len());
                        self.dashboard.history = history;
                    }
                    Err(e) if e.is_session_invalid() => {
                        return self.handle_invalidation();
                    }
                    Err(e) => {
                        self.dashboard.error = Some(e.to_string());
                    }
                }
            }
        }
        Task::none()
    }

    /// Kicks off the task matching the restored view.
    fn enter_current_view(&mut self) -> Task<Message> {
        match self.coordinator.view() {
            ViewState::Auth => Task::none(),
            ViewState::Scan => {
                self.scan = ScanState::new();
                self.start_probe()
            }
            ViewState::Dashboard => {
                self.dashboard = DashboardState::entered();
                Task::perform(load_history(self.api.clone()), |result| {
                    Message::Dashboard(DashboardMessage::HistoryLoaded(result))
                })
            }
        }
    }

    /// Starts a readiness probe unless one is already in flight.
    fn start_probe(&mut self) -> Task<Message> {
        if self.scan.is_probing {
            return Task::none();
        }
        self.scan.is_probing = true;
        Task::perform(probe_engine(self.api.clone()), |result| {
            Message::Scan(ScanMessage::ProbeCompleted(result))
        })
    }

    /// Drops the session everywhere and returns to authentication.
    fn handle_invalidation(&mut self) -> Task<Message> {
        let effect = self.coordinator.session_invalidated();
        self.api = ApiClient::new(&self.config);
        self.auth = AuthState::new();
        self.auth.error = Some(SESSION_EXPIRED_NOTICE.to_string());
        self.scan = ScanState::new();
        self.dashboard = DashboardState::default();
        self.apply_effect(effect)
    }

    /// Turns a coordinator persistence effect into a task.
    fn apply_effect(&self, effect: PersistEffect) -> Task<Message> {
        match effect {
            PersistEffect::Save(session) => Task::perform(
                persist_session(self.repository.clone(), session),
                Message::SessionPersisted,
            ),
            PersistEffect::Clear => Task::perform(
                clear_session(self.repository.clone()),
                Message::SessionPersisted,
            ),
            PersistEffect::None => Task::none(),
        }
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        if self.coordinator.is_verifying() {
            return view::view_verifying();
        }
        match self.coordinator.view() {
            ViewState::Auth => view::view_auth(&self.auth),
            ViewState::Scan => view::view_scan(&self.scan),
            ViewState::Dashboard => view::view_dashboard(&self.dashboard, self.coordinator.scan()),
        }
    }

    /// Poll engine readiness while the scan form cannot accept
    /// submissions.
    fn subscription(&self) -> Subscription<Message> {
        if self.coordinator.view() == ViewState::Scan
            && !self.coordinator.is_verifying()
            && self.scan.readiness.needs_polling()
        {
            iced::time::every(PROBE_INTERVAL).map(|_| Message::Scan(ScanMessage::ProbeTick))
        } else {
            Subscription::none()
        }
    }
}

/// Whether a stored credential has no restored session to back it and
/// should be removed from the keyring.
fn credential_is_orphaned(coordinator: &Coordinator, jwt: Option<&str>) -> bool {
    !coordinator.is_verifying() && jwt.is_some()
}

/// Path of the session file under the platform data directory.
fn session_path() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("mailguard")
        .join("session.json")
}

/// Load the saved session and stored credential.
async fn restore_session(
    repository: SessionRepository,
) -> (Option<PersistedSession>, Option<String>) {
    let saved = repository.load().await;
    let jwt = credentials::get_session_jwt().unwrap_or_else(|e| {
        warn!("failed to read session credential: {e}");
        None
    });
    (saved, jwt)
}

/// Check whether the backend still honors the restored session.
async fn check_liveness(api: ApiClient) -> Result<(), ApiError> {
    api.check_health().await
}

/// Exchange an access token for a session JWT.
async fn authenticate(api: ApiClient, token: String) -> Result<String, ApiError> {
    api.authenticate(&token).await
}

/// Probe analysis-engine readiness.
async fn probe_engine(api: ApiClient) -> Result<EngineStatus, ApiError> {
    api.engine_status().await
}

/// Submit email text for analysis.
async fn submit_scan(api: ApiClient, email_text: String) -> Result<ScanRecord, ApiError> {
    api.scan_email(&email_text).await
}

/// Load the scan history.
async fn load_history(api: ApiClient) -> Result<Vec<HistoryEntry>, ApiError> {
    api.fetch_history().await
}

/// Tell the backend to end the session. Local state is already gone.
async fn run_logout(api: ApiClient) {
    api.logout().await;
}

/// Write the session snapshot to disk.
async fn persist_session(
    repository: SessionRepository,
    session: PersistedSession,
) -> Result<(), String> {
    repository.save(&session).await.map_err(|e| e.to_string())
}

/// Remove the session file and the stored credential.
async fn clear_session(repository: SessionRepository) -> Result<(), String> {
    if let Err(e) = credentials::delete_session_jwt() {
        warn!("failed to delete session credential: {e}");
    }
    repository.clear().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_without_a_saved_session_is_orphaned() {
        let coordinator = Coordinator::restore(None);
        assert!(credential_is_orphaned(&coordinator, Some("jwt")));
        assert!(!credential_is_orphaned(&coordinator, None));
    }

    #[test]
    fn credential_backing_a_restored_session_is_kept() {
        let coordinator = Coordinator::restore(Some(PersistedSession::at(ViewState::Scan)));
        assert!(coordinator.is_verifying());
        assert!(!credential_is_orphaned(&coordinator, Some("jwt")));
    }

    #[test]
    fn saved_auth_view_also_orphans_the_credential() {
        let coordinator = Coordinator::restore(Some(PersistedSession::at(ViewState::Auth)));
        assert!(credential_is_orphaned(&coordinator, Some("jwt")));
    }
}

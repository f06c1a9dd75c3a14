//! Pure view-coordinator state machine.
//!
//! Owns which screen is active and which scan result is current, and
//! tells callers what to persist after each transition. All I/O
//! (network, disk, keyring) stays in the caller; this type only applies
//! the transition rules, which keeps every rule unit-testable.

use crate::api::ScanRecord;
use crate::session::{PersistedSession, ViewState};

/// What the caller must do to the session store after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistEffect {
    /// Write this snapshot to the session store.
    Save(PersistedSession),
    /// Remove the session store entry and the stored credential.
    Clear,
    /// Nothing changed; skip the store.
    None,
}

/// The view-coordinator.
///
/// Transitions that depend on backend outcomes are requested through
/// the dedicated methods; each returns the persistence effect the
/// caller must apply. While a restored session is being verified
/// against the backend, the coordinator is in a blocking verifying
/// state and user-driven transitions are rejected.
#[derive(Debug, Default)]
pub struct Coordinator {
    view: ViewState,
    scan: Option<ScanRecord>,
    verifying: bool,
}

impl Coordinator {
    /// A coordinator still waiting for the saved session to load.
    ///
    /// Blocks all transitions, like a restore under verification, so
    /// nothing the user does before [`Coordinator::restore`] replaces
    /// it can race the startup checks.
    #[must_use]
    pub fn starting() -> Self {
        Self {
            view: ViewState::Auth,
            scan: None,
            verifying: true,
        }
    }

    /// Positions the coordinator from a saved session, if any.
    ///
    /// A saved non-auth view is restored optimistically but flagged as
    /// verifying; the caller must confirm the backend still honors the
    /// session and then report via [`Coordinator::verified_ok`] or
    /// [`Coordinator::session_invalidated`]. No saved session, or a
    /// saved auth view, starts at authentication with nothing to
    /// verify.
    #[must_use]
    pub fn restore(saved: Option<PersistedSession>) -> Self {
        match saved {
            Some(session) if session.view != ViewState::Auth => Self {
                view: session.view,
                scan: session.scan,
                verifying: true,
            },
            _ => Self::default(),
        }
    }

    /// The active view.
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// The current scan result, shown on the dashboard.
    #[must_use]
    pub fn scan(&self) -> Option<&ScanRecord> {
        self.scan.as_ref()
    }

    /// Whether a restored session is still awaiting backend
    /// confirmation.
    #[must_use]
    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    /// The backend confirmed the restored session; unblock the view.
    pub fn verified_ok(&mut self) {
        self.verifying = false;
    }

    /// The backend no longer honors the session. Drops all state and
    /// returns to authentication, regardless of which view was active.
    pub fn session_invalidated(&mut self) -> PersistEffect {
        self.view = ViewState::Auth;
        self.scan = None;
        self.verifying = false;
        PersistEffect::Clear
    }

    /// The user logged out. Same reset as an invalidation.
    pub fn logged_out(&mut self) -> PersistEffect {
        self.session_invalidated()
    }

    /// Authentication succeeded; move to the scan form.
    ///
    /// Ignored unless the auth view is active and no verification is
    /// pending, so a stale completion cannot yank the user around.
    pub fn auth_succeeded(&mut self) -> PersistEffect {
        if self.verifying || self.view != ViewState::Auth {
            return PersistEffect::None;
        }
        self.view = ViewState::Scan;
        self.persist_current()
    }

    /// A scan finished; record the result and move to the dashboard.
    ///
    /// Ignored unless the scan view is active, which discards results
    /// arriving after the user already left the view.
    pub fn scan_completed(&mut self, record: ScanRecord) -> PersistEffect {
        if self.verifying || self.view != ViewState::Scan {
            return PersistEffect::None;
        }
        self.view = ViewState::Dashboard;
        self.scan = Some(record);
        self.persist_current()
    }

    /// The user asked for another scan from the dashboard. The previous
    /// result is superseded and dropped.
    pub fn new_scan_requested(&mut self) -> PersistEffect {
        if self.verifying || self.view != ViewState::Dashboard {
            return PersistEffect::None;
        }
        self.view = ViewState::Scan;
        self.scan = None;
        self.persist_current()
    }

    fn persist_current(&self) -> PersistEffect {
        PersistEffect::Save(PersistedSession {
            view: self.view,
            scan: self.scan.clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::{Decision, ModelVerdict};

    fn record(snippet: &str) -> ScanRecord {
        ScanRecord {
            results: vec![ModelVerdict {
                model_source: "test".into(),
                model_name: "unit".into(),
                decision: Decision::Safe,
                confidence: 0.9,
                description: "clean".into(),
            }],
            timestamp: "2026-08-29T12:00:00".into(),
            email_snippet: snippet.into(),
        }
    }

    #[test]
    fn startup_blocks_transitions_until_restore() {
        let mut coordinator = Coordinator::starting();
        assert!(coordinator.is_verifying());
        assert_eq!(coordinator.view(), ViewState::Auth);

        // Nothing the user triggers before restore may move the view.
        assert_eq!(coordinator.auth_succeeded(), PersistEffect::None);
        assert_eq!(coordinator.scan_completed(record("early")), PersistEffect::None);
        assert_eq!(coordinator.new_scan_requested(), PersistEffect::None);
        assert_eq!(coordinator.view(), ViewState::Auth);
    }

    #[test]
    fn fresh_start_lands_on_auth() {
        let coordinator = Coordinator::restore(None);
        assert_eq!(coordinator.view(), ViewState::Auth);
        assert!(!coordinator.is_verifying());
        assert!(coordinator.scan().is_none());
    }

    #[test]
    fn saved_auth_view_needs_no_verification() {
        let coordinator = Coordinator::restore(Some(PersistedSession::at(ViewState::Auth)));
        assert_eq!(coordinator.view(), ViewState::Auth);
        assert!(!coordinator.is_verifying());
    }

    #[test]
    fn saved_dashboard_restores_verifying_with_its_scan() {
        let coordinator = Coordinator::restore(Some(PersistedSession {
            view: ViewState::Dashboard,
            scan: Some(record("hello")),
        }));
        assert_eq!(coordinator.view(), ViewState::Dashboard);
        assert!(coordinator.is_verifying());
        assert_eq!(coordinator.scan().unwrap().email_snippet, "hello");
    }

    #[test]
    fn verification_success_unblocks_the_view() {
        let mut coordinator = Coordinator::restore(Some(PersistedSession::at(ViewState::Scan)));
        assert!(coordinator.is_verifying());

        coordinator.verified_ok();
        assert!(!coordinator.is_verifying());
        assert_eq!(coordinator.view(), ViewState::Scan);
    }

    #[test]
    fn verification_failure_resets_to_auth() {
        let mut coordinator = Coordinator::restore(Some(PersistedSession {
            view: ViewState::Dashboard,
            scan: Some(record("stale")),
        }));

        let effect = coordinator.session_invalidated();
        assert_eq!(effect, PersistEffect::Clear);
        assert_eq!(coordinator.view(), ViewState::Auth);
        assert!(coordinator.scan().is_none());
        assert!(!coordinator.is_verifying());
    }

    #[test]
    fn auth_success_moves_to_scan_and_saves() {
        let mut coordinator = Coordinator::restore(None);

        let effect = coordinator.auth_succeeded();
        assert_eq!(coordinator.view(), ViewState::Scan);
        assert_eq!(
            effect,
            PersistEffect::Save(PersistedSession::at(ViewState::Scan))
        );
    }

    #[test]
    fn auth_success_while_verifying_is_ignored() {
        let mut coordinator = Coordinator::restore(Some(PersistedSession::at(ViewState::Scan)));

        assert_eq!(coordinator.auth_succeeded(), PersistEffect::None);
        assert_eq!(coordinator.view(), ViewState::Scan);
    }

    #[test]
    fn scan_completion_moves_to_dashboard_with_the_result() {
        let mut coordinator = Coordinator::restore(None);
        coordinator.auth_succeeded();

        let effect = coordinator.scan_completed(record("phish"));
        assert_eq!(coordinator.view(), ViewState::Dashboard);
        assert_eq!(coordinator.scan().unwrap().email_snippet, "phish");
        assert!(matches!(effect, PersistEffect::Save(_)));
    }

    #[test]
    fn scan_completion_off_the_scan_view_is_discarded() {
        let mut coordinator = Coordinator::restore(None);

        assert_eq!(coordinator.scan_completed(record("late")), PersistEffect::None);
        assert_eq!(coordinator.view(), ViewState::Auth);
        assert!(coordinator.scan().is_none());
    }

    #[test]
    fn new_scan_drops_the_previous_result() {
        let mut coordinator = Coordinator::restore(None);
        coordinator.auth_succeeded();
        coordinator.scan_completed(record("first"));

        let effect = coordinator.new_scan_requested();
        assert_eq!(coordinator.view(), ViewState::Scan);
        assert!(coordinator.scan().is_none());
        assert_eq!(
            effect,
            PersistEffect::Save(PersistedSession::at(ViewState::Scan))
        );
    }

    #[test]
    fn new_scan_outside_the_dashboard_is_ignored() {
        let mut coordinator = Coordinator::restore(None);
        assert_eq!(coordinator.new_scan_requested(), PersistEffect::None);
    }

    #[test]
    fn logout_clears_everything() {
        let mut coordinator = Coordinator::restore(None);
        coordinator.auth_succeeded();
        coordinator.scan_completed(record("gone"));

        assert_eq!(coordinator.logged_out(), PersistEffect::Clear);
        assert_eq!(coordinator.view(), ViewState::Auth);
        assert!(coordinator.scan().is_none());
    }
}

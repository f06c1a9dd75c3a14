//! Scan form state.

use mailguard_core::{EngineStatus, MAX_EMAIL_CHARS};

/// What the client currently knows about analysis-engine readiness.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// No probe has completed yet.
    #[default]
    Unknown,
    /// Last probe result.
    Known(EngineStatus),
}

impl Readiness {
    /// Whether submissions are allowed right now.
    #[must_use]
    pub fn allows_submission(self) -> bool {
        matches!(self, Self::Known(status) if status.allows_submission())
    }

    /// Whether the periodic probe should keep running.
    #[must_use]
    pub fn needs_polling(self) -> bool {
        !self.allows_submission()
    }
}

/// State of the email submission form.
#[derive(Debug, Default)]
pub struct ScanState {
    /// The email text as typed or loaded from a sample.
    pub email_text: String,
    /// Latest readiness knowledge.
    pub readiness: Readiness,
    /// Whether a readiness probe is in flight.
    pub is_probing: bool,
    /// Whether a scan request is in flight.
    pub is_scanning: bool,
    /// Error from the last submission, shown above the form.
    pub error: Option<String>,
}

impl ScanState {
    /// Fresh, empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters currently in the form.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.email_text.chars().count()
    }

    /// The `n/10,000 characters` counter under the text area.
    #[must_use]
    pub fn char_counter(&self) -> String {
        format!("{}/10,000 characters", self.char_count())
    }

    /// Whether the analyze button should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_scanning
            && self.readiness.allows_submission()
            && !self.email_text.trim().is_empty()
            && self.char_count() <= MAX_EMAIL_CHARS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_state(email_text: &str) -> ScanState {
        ScanState {
            email_text: email_text.to_string(),
            readiness: Readiness::Known(EngineStatus::Ready),
            ..ScanState::new()
        }
    }

    #[test]
    fn submission_requires_known_readiness() {
        let mut state = ScanState::new();
        state.email_text = "hello".to_string();
        assert!(!state.can_submit());

        state.readiness = Readiness::Known(EngineStatus::NotReady);
        assert!(!state.can_submit());

        state.readiness = Readiness::Known(EngineStatus::Partial);
        assert!(state.can_submit());
    }

    #[test]
    fn oversized_text_blocks_submit() {
        let state = ready_state(&"a".repeat(MAX_EMAIL_CHARS + 1));
        assert!(!state.can_submit());

        let state = ready_state(&"a".repeat(MAX_EMAIL_CHARS));
        assert!(state.can_submit());
    }

    #[test]
    fn polling_stops_once_submittable() {
        assert!(Readiness::Unknown.needs_polling());
        assert!(Readiness::Known(EngineStatus::NotReady).needs_polling());
        assert!(!Readiness::Known(EngineStatus::Partial).needs_polling());
        assert!(!Readiness::Known(EngineStatus::Ready).needs_polling());
    }

    #[test]
    fn char_counter_format() {
        let state = ready_state("abcde");
        assert_eq!(state.char_counter(), "5/10,000 characters");
    }
}

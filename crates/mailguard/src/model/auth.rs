//! Authentication screen state.

/// State of the token-entry form.
#[derive(Debug, Default)]
pub struct AuthState {
    /// The token as typed.
    pub token: String,
    /// Whether an authentication request is in flight.
    pub is_authenticating: bool,
    /// Error from the last attempt, shown above the form.
    pub error: Option<String>,
}

impl AuthState {
    /// Fresh, empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit button should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_authenticating && !self.token.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_cannot_submit() {
        let mut state = AuthState::new();
        assert!(!state.can_submit());

        state.token = "  ".to_string();
        assert!(!state.can_submit());

        state.token = "secret".to_string();
        assert!(state.can_submit());
    }

    #[test]
    fn in_flight_request_blocks_submit() {
        let state = AuthState {
            token: "secret".to_string(),
            is_authenticating: true,
            error: None,
        };
        assert!(!state.can_submit());
    }
}

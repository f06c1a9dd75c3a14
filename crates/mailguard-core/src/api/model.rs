//! Wire types exchanged with the analysis backend.

use serde::{Deserialize, Serialize};

/// Backend-reported availability of the analysis capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineStatus {
    /// All analysis models are loaded.
    Ready,
    /// Only the reduced, rule-based analysis is available.
    Partial,
    /// No analysis is possible right now.
    NotReady,
}

impl EngineStatus {
    /// Whether scan submission is permitted under this status.
    #[must_use]
    pub const fn allows_submission(self) -> bool {
        matches!(self, Self::Ready | Self::Partial)
    }
}

/// Envelope of `GET /models/status`.
#[derive(Debug, Deserialize)]
pub(crate) struct EngineStatusResponse {
    pub status: EngineStatus,
}

/// Classification tag assigned by one analysis model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Credential-stealing or impersonation attempt.
    Phishing,
    /// Unsolicited bulk mail.
    Spam,
    /// Nothing suspicious found.
    Safe,
    /// The model failed to produce a verdict.
    Error,
    /// Any decision string this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl Decision {
    /// Uppercase label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Phishing => "PHISHING",
            Self::Spam => "SPAM",
            Self::Safe => "SAFE",
            Self::Error => "ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// One analysis engine's classification output for a submitted email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelVerdict {
    /// Where the model runs (e.g. `huggingface`, `rules`).
    pub model_source: String,
    /// Human-readable model name.
    pub model_name: String,
    /// The classification tag.
    pub decision: Decision,
    /// Model confidence, nominally in `[0, 1]`.
    pub confidence: f64,
    /// Free-text rationale supplied by the model.
    pub description: String,
}

impl ModelVerdict {
    /// Confidence as a display percentage, clamped to `[0, 100]` and
    /// rounded to one decimal place.
    #[must_use]
    pub fn confidence_percent(&self) -> f64 {
        (self.confidence.clamp(0.0, 1.0) * 1000.0).round() / 10.0
    }
}

/// The bundled result of one analysis submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// One verdict per analysis model.
    pub results: Vec<ModelVerdict>,
    /// Backend-assigned completion time, ISO 8601.
    pub timestamp: String,
    /// Leading excerpt of the analyzed email.
    pub email_snippet: String,
}

/// One prior scan fetched from the backend history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    /// Backend-assigned record id.
    pub id: String,
    /// Owning user reference.
    pub user_id: String,
    /// When the scan completed, ISO 8601.
    pub timestamp: String,
    /// Leading excerpt of the analyzed email.
    pub email_snippet: String,
    /// One verdict per analysis model.
    pub results: Vec<ModelVerdict>,
}

/// Envelope of `GET /history`.
#[derive(Debug, Deserialize)]
pub(crate) struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// FastAPI-style error body carrying an explanatory message.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unknown_decision_strings_decode_without_error() {
        let verdict: ModelVerdict = serde_json::from_str(
            r#"{
                "model_source": "huggingface",
                "model_name": "future-model",
                "decision": "quarantine",
                "confidence": 0.5,
                "description": "new taxonomy"
            }"#,
        )
        .unwrap();
        assert_eq!(verdict.decision, Decision::Unknown);
    }

    #[test]
    fn engine_status_decodes_snake_case() {
        let ready: EngineStatusResponse = serde_json::from_str(r#"{"status":"ready"}"#).unwrap();
        let partial: EngineStatusResponse =
            serde_json::from_str(r#"{"status":"partial"}"#).unwrap();
        let not_ready: EngineStatusResponse =
            serde_json::from_str(r#"{"status":"not_ready"}"#).unwrap();

        assert_eq!(ready.status, EngineStatus::Ready);
        assert_eq!(partial.status, EngineStatus::Partial);
        assert_eq!(not_ready.status, EngineStatus::NotReady);
        assert!(ready.status.allows_submission());
        assert!(partial.status.allows_submission());
        assert!(!not_ready.status.allows_submission());
    }

    #[test]
    fn confidence_percent_clamps_out_of_range_values() {
        let mut verdict = ModelVerdict {
            model_source: "rules".to_string(),
            model_name: "heuristics".to_string(),
            decision: Decision::Safe,
            confidence: 1.7,
            description: String::new(),
        };
        assert!((verdict.confidence_percent() - 100.0).abs() < f64::EPSILON);

        verdict.confidence = -0.2;
        assert!(verdict.confidence_percent().abs() < f64::EPSILON);

        verdict.confidence = 0.824;
        assert!((verdict.confidence_percent() - 82.4).abs() < f64::EPSILON);
    }

    #[test]
    fn history_envelope_tolerates_missing_list() {
        let empty: HistoryResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.history.is_empty());

        let populated: HistoryResponse = serde_json::from_str(
            r#"{
                "history": [{
                    "id": "scan-1",
                    "user_id": "user-1",
                    "timestamp": "2025-06-01T12:00:00",
                    "email_snippet": "Dear Customer...",
                    "results": [{
                        "model_source": "rules",
                        "model_name": "heuristics",
                        "decision": "phishing",
                        "confidence": 0.97,
                        "description": "urgent language, suspicious link"
                    }]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(populated.history.len(), 1);
        assert_eq!(populated.history[0].results[0].decision, Decision::Phishing);
    }
}

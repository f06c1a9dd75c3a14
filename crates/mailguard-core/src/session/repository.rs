//! JSON-file store for the persisted session.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::Result;
use crate::session::model::PersistedSession;

/// Reads and writes the session file.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    path: PathBuf,
}

impl SessionRepository {
    /// Creates a repository backed by the given file path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Writes the session atomically enough for a single-process app.
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or the
    /// file cannot be written.
    pub async fn save(&self, session: &PersistedSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(session)?;
        tokio::fs::write(&self.path, json).await?;
        debug!("session saved to {}", self.path.display());
        Ok(())
    }

    /// Loads the persisted session.
    ///
    /// A missing file means a fresh start and yields `None`. Unreadable
    /// or corrupt content is logged and also yields `None` rather than
    /// failing startup.
    pub async fn load(&self) -> Option<PersistedSession> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("failed to read session file: {e}");
                return None;
            }
        };
        decode(&raw)
    }

    /// Removes the session file. Already-absent files are fine.
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than the file not
    /// existing.
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Decodes a session, salvaging the view when the scan payload is the
/// only broken part. Wire formats for scan results have changed before;
/// losing the cached result is acceptable, losing the user's place is
/// not.
fn decode(raw: &str) -> Option<PersistedSession> {
    match serde_json::from_str::<PersistedSession>(raw) {
        Ok(session) => Some(session),
        Err(full_error) => {
            let value: serde_json::Value = serde_json::from_str(raw).ok()?;
            let view = serde_json::from_value(value.get("view")?.clone()).ok()?;
            if value.get("scan").is_some_and(|scan| !scan.is_null()) {
                warn!("discarding unreadable scan payload from session file: {full_error}");
            }
            Some(PersistedSession { view, scan: None })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::model::ViewState;

    use proptest::prelude::*;
    use tempfile::TempDir;

    fn repository(dir: &TempDir) -> SessionRepository {
        SessionRepository::new(dir.path().join("nested").join("session.json"))
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);

        let session = PersistedSession::at(ViewState::Scan);
        repo.save(&session).await.unwrap();

        assert_eq!(repo.load().await, Some(session));
    }

    #[tokio::test]
    async fn load_of_missing_file_is_a_fresh_start() {
        let dir = TempDir::new().unwrap();
        assert_eq!(repository(&dir).load().await, None);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_fresh_start() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);

        tokio::fs::create_dir_all(dir.path().join("nested"))
            .await
            .unwrap();
        tokio::fs::write(dir.path().join("nested").join("session.json"), "{not json")
            .await
            .unwrap();

        assert_eq!(repo.load().await, None);
    }

    #[tokio::test]
    async fn corrupt_scan_payload_preserves_the_view() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);

        tokio::fs::create_dir_all(dir.path().join("nested"))
            .await
            .unwrap();
        tokio::fs::write(
            dir.path().join("nested").join("session.json"),
            r#"{"view":"dashboard","scan":{"results":"not-an-array"}}"#,
        )
        .await
        .unwrap();

        assert_eq!(
            repo.load().await,
            Some(PersistedSession::at(ViewState::Dashboard))
        );
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);

        repo.save(&PersistedSession::default()).await.unwrap();
        repo.clear().await.unwrap();
        repo.clear().await.unwrap();
        assert_eq!(repo.load().await, None);
    }

    proptest! {
        #[test]
        fn decode_never_panics(raw in "\\PC*") {
            let _ = decode(&raw);
        }
    }
}

//! Secure session-credential storage using the system keyring.
//!
//! Stores the backend session JWT in the platform's native credential
//! storage:
//! - Linux: Secret Service (GNOME Keyring, `KWallet`)
//! - macOS: Keychain
//! - Windows: Credential Manager

use keyring::Entry;
use tracing::debug;

use crate::error::Result;

/// Service name used for keyring entries.
const SERVICE_NAME: &str = "mailguard";

/// Entry name for the backend session JWT.
const SESSION_CREDENTIAL: &str = "session_jwt";

/// Stores the session JWT in the system keyring.
///
/// # Errors
///
/// Returns an error if the keyring operation fails.
pub fn store_session_jwt(jwt: &str) -> Result<()> {
    let entry = Entry::new(SERVICE_NAME, SESSION_CREDENTIAL)?;
    entry.set_password(jwt)?;
    debug!("stored session credential");
    Ok(())
}

/// Retrieves the session JWT from the system keyring.
///
/// # Errors
///
/// Returns an error if the keyring operation fails. A missing entry is
/// `Ok(None)`, not an error.
pub fn get_session_jwt() -> Result<Option<String>> {
    let entry = Entry::new(SERVICE_NAME, SESSION_CREDENTIAL)?;
    match entry.get_password() {
        Ok(jwt) => Ok(Some(jwt)),
        Err(keyring::Error::NoEntry) => {
            debug!("no session credential stored");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Deletes the session JWT from the system keyring.
///
/// # Errors
///
/// Returns an error if the keyring operation fails (except for a
/// missing entry).
pub fn delete_session_jwt() -> Result<()> {
    let entry = Entry::new(SERVICE_NAME, SESSION_CREDENTIAL)?;
    match entry.delete_credential() {
        Ok(()) => {
            debug!("deleted session credential");
            Ok(())
        }
        Err(keyring::Error::NoEntry) => {
            debug!("no session credential to delete");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    // Note: These tests interact with the actual system keyring.
    // They are marked as ignored by default to avoid polluting the keyring
    // during automated testing. Run manually with `cargo test -- --ignored`

    use super::*;

    #[test]
    #[ignore = "Interacts with system keyring"]
    fn store_retrieve_and_delete_session_jwt() {
        store_session_jwt("test_jwt_value").unwrap();
        assert_eq!(get_session_jwt().unwrap(), Some("test_jwt_value".into()));

        delete_session_jwt().unwrap();
        assert_eq!(get_session_jwt().unwrap(), None);
    }

    #[test]
    #[ignore = "Interacts with system keyring"]
    fn delete_of_missing_entry_is_ok() {
        delete_session_jwt().unwrap();
        delete_session_jwt().unwrap();
    }
}

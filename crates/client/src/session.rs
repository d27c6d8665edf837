//! Session state: the signed-in identity and its on-disk persistence.
//!
//! A session is an opaque bearer token plus a minimal profile. It is created
//! by a successful login or signup and cleared by logout; there is no expiry
//! or refresh handling. Persistence uses two named slots under a state
//! directory - `admin_token` for the raw token and `admin_data.json` for the
//! profile - read once at startup to decide whether the client starts out
//! authenticated.
//!
//! # Environment Variables
//!
//! - `TASKDESK_STATE_DIR` - Session state directory (default: `$HOME/.taskdesk`)

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the bearer token slot.
const TOKEN_SLOT: &str = "admin_token";

/// File name of the profile slot.
const PROFILE_SLOT: &str = "admin_data.json";

/// Errors that can occur while persisting or loading a session.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Neither `TASKDESK_STATE_DIR` nor `HOME` is set.
    #[error("Cannot locate state directory: set TASKDESK_STATE_DIR or HOME")]
    MissingStateDir,

    /// Reading or writing a slot failed.
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The profile slot holds something that is not a profile.
    #[error("Corrupt profile slot: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Minimal signed-in identity, shown in the console header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// First name.
    #[serde(default)]
    pub firstname: String,
    /// Last name.
    #[serde(default)]
    pub lastname: String,
}

impl Profile {
    /// Display name in "first last" form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_owned()
    }
}

/// An active session: bearer token plus profile.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct Session {
    /// Opaque bearer token issued by the login/signup endpoint.
    pub token: SecretString,
    /// Profile returned alongside the token.
    pub profile: Profile,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("profile", &self.profile)
            .finish()
    }
}

/// File-backed session storage with two named slots.
///
/// At most one session is held per store; an absent token slot means
/// anonymous.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created lazily on the first `save`.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Create a store at the directory named by the environment.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::MissingStateDir` if neither
    /// `TASKDESK_STATE_DIR` nor `HOME` is set.
    pub fn from_env() -> Result<Self, SessionStoreError> {
        if let Ok(dir) = std::env::var("TASKDESK_STATE_DIR") {
            return Ok(Self::new(PathBuf::from(dir)));
        }
        let home = std::env::var("HOME").map_err(|_| SessionStoreError::MissingStateDir)?;
        Ok(Self::new(Path::new(&home).join(".taskdesk")))
    }

    /// Read the persisted session, if any.
    ///
    /// An absent token slot means no session. A missing profile slot is
    /// tolerated and yields an empty profile.
    ///
    /// # Errors
    ///
    /// Returns an error if a slot exists but cannot be read or decoded.
    pub fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let token = match std::fs::read_to_string(self.dir.join(TOKEN_SLOT)) {
            Ok(raw) => raw.trim().to_owned(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let profile = match std::fs::read_to_string(self.dir.join(PROFILE_SLOT)) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Profile::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(Session {
            token: SecretString::from(token),
            profile,
        }))
    }

    /// Persist a session into both slots.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or a slot cannot
    /// be written.
    pub fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(TOKEN_SLOT), session.token.expose_secret())?;
        std::fs::write(
            self.dir.join(PROFILE_SLOT),
            serde_json::to_string(&session.profile)?,
        )?;
        Ok(())
    }

    /// Remove both slots. Already-absent slots are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing slot cannot be removed.
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        for slot in [TOKEN_SLOT, PROFILE_SLOT] {
            match std::fs::remove_file(self.dir.join(slot)) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn temp_store() -> SessionStore {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "taskdesk-session-test-{}-{n}",
            std::process::id()
        ));
        SessionStore::new(dir)
    }

    fn sample_session() -> Session {
        Session {
            token: SecretString::from("tok-123"),
            profile: Profile {
                firstname: "Ada".to_owned(),
                lastname: "Lovelace".to_owned(),
            },
        }
    }

    #[test]
    fn test_load_empty_store_is_anonymous() {
        let store = temp_store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = temp_store();
        store.save(&sample_session()).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.token.expose_secret(), "tok-123");
        assert_eq!(loaded.profile.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_clear_returns_to_anonymous() {
        let store = temp_store();
        store.save(&sample_session()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing an already-empty store is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_missing_profile_slot_yields_empty_profile() {
        let store = temp_store();
        store.save(&sample_session()).unwrap();
        std::fs::remove_file(store.dir.join(PROFILE_SLOT)).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.profile, Profile::default());
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let debug_output = format!("{:?}", sample_session());
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("tok-123"));
        assert!(debug_output.contains("Ada"));
    }

    #[test]
    fn test_full_name_with_missing_parts() {
        let profile = Profile {
            firstname: "Ada".to_owned(),
            lastname: String::new(),
        };
        assert_eq!(profile.full_name(), "Ada");
        assert_eq!(Profile::default().full_name(), "");
    }
}

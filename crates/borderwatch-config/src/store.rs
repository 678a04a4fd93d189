// JSON-file session store
//
// Durable implementation of the core crate's `SessionStore`. The session
// is cached in memory behind an RwLock so `get` stays synchronous (the
// request interceptor reads it on every call) and written through to a
// JSON file on every mutation. Persistence failures are logged, never
// surfaced -- the in-memory session remains correct either way, and the
// worst case (a stale file) self-corrects on the next 401.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use tracing::warn;

use borderwatch_api::models::UserProfile;
use borderwatch_api::session::{Session, SessionStore};

use crate::ConfigError;

/// [`SessionStore`] backed by a JSON file.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    cached: RwLock<Session>,
}

impl FileSessionStore {
    /// Open (or create) a store at the given path. An existing file is
    /// loaded so the session survives restarts; a missing file starts
    /// the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let cached = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Session::default(),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        Ok(Self {
            path,
            cached: RwLock::new(cached),
        })
    }

    /// Open a store at the platform-conventional path
    /// (see [`session_path`](crate::session_path)).
    pub fn open_default() -> Result<Self, ConfigError> {
        Self::open(crate::session_path())
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, session: &Session) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("failed to create session directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(session) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(&self.path, raw) {
                    warn!("failed to persist session: {e}");
                }
            }
            Err(e) => warn!("failed to serialize session: {e}"),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Session {
        self.cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: String, user: UserProfile) {
        let mut guard = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Session {
            token: Some(token),
            user: Some(user),
        };
        self.persist(&guard);
    }

    fn clear(&self) -> bool {
        let mut guard = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        let had_session = guard.token.is_some() || guard.user.is_some();
        *guard = Session::default();
        if had_session {
            self.persist(&guard);
        }
        had_session
    }
}

#[cfg(test)]
mod tests {
    use borderwatch_api::models::UserProfile;
    use borderwatch_api::session::SessionStore;

    use super::FileSessionStore;

    fn profile(name: &str) -> UserProfile {
        UserProfile {
            full_name: Some(name.to_owned()),
            ..UserProfile::default()
        }
    }

    #[test]
    fn session_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path).expect("open");
        store.set("tok-9".into(), profile("Ana"));
        drop(store);

        let reopened = FileSessionStore::open(&path).expect("reopen");
        let session = reopened.get();
        assert_eq!(session.token.as_deref(), Some("tok-9"));
        assert_eq!(
            session.user.and_then(|u| u.full_name).as_deref(),
            Some("Ana")
        );
    }

    #[test]
    fn clear_empties_both_memory_and_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path).expect("open");
        store.set("tok-9".into(), profile("Ana"));
        assert!(store.clear());
        assert!(!store.get().is_authenticated());

        let reopened = FileSessionStore::open(&path).expect("reopen");
        assert!(!reopened.get().is_authenticated());
        assert!(!reopened.clear(), "nothing left to clear");
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSessionStore::open(dir.path().join("absent.json")).expect("open");
        assert!(!store.get().is_authenticated());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").expect("write");
        assert!(FileSessionStore::open(&path).is_err());
    }
}

// Session state and its storage seam
//
// The session (bearer token + user profile) is the only durable state in
// this crate. Storage is behind a trait so hosts can plug in any key/value
// backend; the one hard requirement is that `get` is synchronous, because
// the request interceptor reads it on every outbound call.

use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::models::UserProfile;

/// The client-held authentication state.
///
/// Token and user are set and cleared together. The token may briefly
/// exist without a profile between login and the first profile fetch,
/// but an authorization failure clears both atomically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl Session {
    /// Returns `true` if a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Storage for the current [`Session`].
///
/// Last write wins; no transactional semantics are required because the
/// session has exactly one writer at a time in practice (login, logout,
/// or the 401 recovery path), and a lost race self-corrects on the next
/// authorization failure.
pub trait SessionStore: Send + Sync {
    /// The current session. Must be cheap and synchronous -- it runs
    /// before every outbound request.
    fn get(&self) -> Session;

    /// Replace the session with the given token and profile.
    fn set(&self, token: String, user: UserProfile);

    /// Drop the session. Returns `true` if there was anything to drop,
    /// so the 401 recovery can fire its side effect exactly once even
    /// when several concurrent calls expire together. Clearing an
    /// already-empty store is a harmless no-op returning `false`.
    fn clear(&self) -> bool;
}

/// In-memory [`SessionStore`] for hosts that don't need persistence
/// (and for tests).
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Session {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: String, user: UserProfile) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Session {
            token: Some(token),
            user: Some(user),
        };
    }

    fn clear(&self) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let had_session = guard.token.is_some() || guard.user.is_some();
        *guard = Session::default();
        had_session
    }
}

/// Invoked when the backend rejects the session (HTTP 401), after the
/// store has been cleared. Hosts wire this to their navigation layer to
/// redirect to the login entry point; the client itself has no notion
/// of navigation.
pub trait UnauthorizedHook: Send + Sync {
    fn on_unauthorized(&self);
}

/// Hook that does nothing, for hosts with no navigation to perform.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;

impl UnauthorizedHook for NoopHook {
    fn on_unauthorized(&self) {}
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{MemorySessionStore, SessionStore, UnauthorizedHook};
    use crate::models::UserProfile;

    fn profile(name: &str) -> UserProfile {
        UserProfile {
            full_name: Some(name.to_owned()),
            ..UserProfile::default()
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = MemorySessionStore::new();
        assert!(!store.get().is_authenticated());

        store.set("tok-1".into(), profile("A"));
        let session = store.get();
        assert_eq!(session.token.as_deref(), Some("tok-1"));
        assert_eq!(
            session.user.and_then(|u| u.full_name).as_deref(),
            Some("A")
        );
    }

    #[test]
    fn clear_reports_whether_anything_was_dropped() {
        let store = MemorySessionStore::new();
        assert!(!store.clear());

        store.set("tok-1".into(), profile("A"));
        assert!(store.clear());
        assert!(!store.clear());
        assert!(!store.get().is_authenticated());
    }

    #[test]
    fn concurrent_clears_succeed_exactly_once() {
        let store = Arc::new(MemorySessionStore::new());
        store.set("tok-1".into(), profile("A"));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.clear())
            })
            .collect();

        let cleared = handles
            .into_iter()
            .map(|h| h.join().unwrap_or(false))
            .filter(|dropped| *dropped)
            .count();
        assert_eq!(cleared, 1);
    }

    #[test]
    fn hooks_observe_each_invocation() {
        struct Recorder(AtomicUsize);
        impl UnauthorizedHook for Recorder {
            fn on_unauthorized(&self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let hook = Recorder(AtomicUsize::new(0));
        hook.on_unauthorized();
        hook.on_unauthorized();
        assert_eq!(hook.0.load(Ordering::SeqCst), 2);
    }
}

//! Session state store - the single source of truth for the bearer token
//! and the fetched user profile.
//!
//! Authorization is token-based: a session with a token is authenticated
//! even while its profile is absent or stale. The tagged state makes the
//! inverse (a profile without a token) unrepresentable.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

/// Opaque profile payload returned by the profile endpoint.
/// The session core passes it through without interpreting its shape.
pub type Profile = serde_json::Value;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("profile cannot be stored without a bearer token")]
    ProfileWithoutToken,
}

#[derive(Debug, Clone, Default)]
enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated {
        token: String,
        profile: Option<Profile>,
        authenticated_at: DateTime<Utc>,
    },
}

/// Shared handle to the session state.
/// Clone is cheap - handles share one state behind an Arc, so the
/// controller and the route guard read the same snapshot. The lock is
/// never held across an await point.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    /// Create an empty (unauthenticated) store
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or replace the bearer token.
    ///
    /// No token validation is performed and no profile fetch is triggered.
    /// A previously fetched profile is kept; it is stale until the next
    /// successful `set_profile`.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let mut state = self.inner.write();
        let profile = match std::mem::take(&mut *state) {
            SessionState::Authenticated { profile, .. } => profile,
            SessionState::Unauthenticated => None,
        };
        *state = SessionState::Authenticated {
            token,
            profile,
            authenticated_at: Utc::now(),
        };
    }

    /// Replace the stored profile.
    ///
    /// Fails when no token is present; profile data must never outlive
    /// the credential it was fetched with.
    pub fn set_profile(&self, profile: Profile) -> Result<(), SessionError> {
        let mut state = self.inner.write();
        match &mut *state {
            SessionState::Authenticated { profile: slot, .. } => {
                *slot = Some(profile);
                Ok(())
            }
            SessionState::Unauthenticated => Err(SessionError::ProfileWithoutToken),
        }
    }

    /// Drop the token and the profile in one state transition.
    /// This is the only way back to the unauthenticated state.
    pub fn clear(&self) {
        *self.inner.write() = SessionState::Unauthenticated;
        debug!("session cleared");
    }

    /// Whether a bearer token is present. Independent of the profile.
    pub fn is_authenticated(&self) -> bool {
        matches!(*self.inner.read(), SessionState::Authenticated { .. })
    }

    /// Current bearer token, if any
    pub fn token(&self) -> Option<String> {
        match &*self.inner.read() {
            SessionState::Authenticated { token, .. } => Some(token.clone()),
            SessionState::Unauthenticated => None,
        }
    }

    /// Last successfully fetched profile, if any
    pub fn profile(&self) -> Option<Profile> {
        match &*self.inner.read() {
            SessionState::Authenticated { profile, .. } => profile.clone(),
            SessionState::Unauthenticated => None,
        }
    }

    /// When the current token was installed (for diagnostics)
    pub fn authenticated_at(&self) -> Option<DateTime<Utc>> {
        match &*self.inner.read() {
            SessionState::Authenticated {
                authenticated_at, ..
            } => Some(*authenticated_at),
            SessionState::Unauthenticated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_store_is_unauthenticated() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.profile().is_none());
        assert!(store.authenticated_at().is_none());
    }

    #[test]
    fn test_set_token_authenticates() {
        let store = SessionStore::new();
        store.set_token("tok1");
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok1"));
        // Authorization never depends on a loaded profile
        assert!(store.profile().is_none());
    }

    #[test]
    fn test_clear_drops_token_and_profile_together() {
        let store = SessionStore::new();
        store.set_token("tok1");
        store
            .set_profile(json!({"id": 1}))
            .expect("profile set with token present");

        store.clear();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.profile().is_none());
    }

    #[test]
    fn test_set_profile_without_token_is_rejected() {
        let store = SessionStore::new();
        let err = store.set_profile(json!({"id": 1})).unwrap_err();
        assert_eq!(err, SessionError::ProfileWithoutToken);
        assert!(store.profile().is_none());
    }

    #[test]
    fn test_set_profile_is_passthrough() {
        let store = SessionStore::new();
        store.set_token("tok1");
        let payload = json!({"id": 1, "name": "A", "nested": {"k": [1, 2]}});
        store.set_profile(payload.clone()).unwrap();
        assert_eq!(store.profile(), Some(payload));
    }

    #[test]
    fn test_token_replacement_keeps_stale_profile() {
        let store = SessionStore::new();
        store.set_token("tok1");
        store.set_profile(json!({"id": 1})).unwrap();

        store.set_token("tok2");
        assert_eq!(store.token().as_deref(), Some("tok2"));
        // Stale until the caller refetches
        assert_eq!(store.profile(), Some(json!({"id": 1})));
    }

    #[test]
    fn test_handles_share_state() {
        let store = SessionStore::new();
        let other = store.clone();
        store.set_token("tok1");
        assert!(other.is_authenticated());
        other.clear();
        assert!(!store.is_authenticated());
    }
}

//! Route guard gating access to protected views.
//!
//! Evaluated synchronously before each route transition against the
//! store's current snapshot. The guard performs no network calls and
//! never waits for an in-flight profile fetch: a session that has a
//! token but no profile yet is already authorized.

use tracing::debug;

use crate::session::SessionStore;

/// The route metadata the guard consumes. Everything else about the
/// route table belongs to the navigation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub requires_auth: bool,
}

impl Route {
    pub fn new(path: impl Into<String>, requires_auth: bool) -> Self {
        Self {
            path: path.into(),
            requires_auth,
        }
    }
}

/// Outcome of a guard check. Guard decisions never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation continues to the target route
    Proceed,
    /// Navigation is diverted to the given route instead
    Redirect(String),
}

/// Navigation interceptor enforcing that protected routes are reachable
/// only with a bearer token present.
#[derive(Debug, Clone)]
pub struct AuthGuard {
    store: SessionStore,
    login_route: String,
}

impl AuthGuard {
    /// Create a guard over a shared store handle
    pub fn new(store: SessionStore, login_route: impl Into<String>) -> Self {
        Self {
            store,
            login_route: login_route.into(),
        }
    }

    /// Decide whether navigation to `target` may proceed
    pub fn check(&self, target: &Route) -> GuardDecision {
        if target.requires_auth && !self.store.is_authenticated() {
            debug!(path = %target.path, "unauthenticated navigation to protected route");
            GuardDecision::Redirect(self.login_route.clone())
        } else {
            GuardDecision::Proceed
        }
    }
}

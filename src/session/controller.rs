//! Session controller - the only session surface the rest of the
//! application invokes.
//!
//! Orchestrates the store and the profile fetcher: `login` installs the
//! token, `fetch_profile` is the separate explicit step that loads the
//! profile, `logout` clears the store and signals the navigation layer.
//! Fetch outcomes are returned to the caller as typed results, never
//! swallowed.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::{FetchError, FetchProfile, ProfileFetcher};
use crate::router::NavEvent;

use super::{Profile, SessionStore};

/// In-flight profile request, shareable across concurrent callers
type SharedFetch = Shared<BoxFuture<'static, Result<Profile, FetchError>>>;

/// Client-facing session API.
///
/// Generic over the fetch transport so orchestration can be tested
/// without a network; applications use the default `ProfileFetcher`.
pub struct SessionController<F: FetchProfile = ProfileFetcher> {
    store: SessionStore,
    fetcher: Arc<F>,
    login_route: String,
    nav_tx: mpsc::UnboundedSender<NavEvent>,
    in_flight: Arc<Mutex<Option<SharedFetch>>>,
}

impl<F: FetchProfile> SessionController<F> {
    /// Create a controller over an existing store.
    ///
    /// The store handle is shared with the route guard by the application
    /// root; `nav_tx` is the channel the navigation layer listens on.
    pub fn new(
        store: SessionStore,
        fetcher: F,
        login_route: impl Into<String>,
        nav_tx: mpsc::UnboundedSender<NavEvent>,
    ) -> Self {
        Self {
            store,
            fetcher: Arc::new(fetcher),
            login_route: login_route.into(),
            nav_tx,
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    /// Install the bearer token.
    ///
    /// Does not fetch the profile; callers stay on a stale or absent
    /// profile until they invoke `fetch_profile`.
    pub fn login(&self, token: impl Into<String>) {
        self.store.set_token(token);
        info!("session authenticated");
    }

    /// Clear the session and redirect to the login route.
    /// The only operation with a navigation side effect.
    pub fn logout(&self) {
        self.store.clear();
        info!("session logged out");
        if self
            .nav_tx
            .send(NavEvent::Redirect(self.login_route.clone()))
            .is_err()
        {
            warn!("navigation channel closed, logout redirect dropped");
        }
    }

    /// Fetch the profile authorized by the current token and store it.
    ///
    /// Returns the fetched payload, or a typed error when no token is
    /// present, the request is rejected, or transport fails. On failure
    /// the stored profile is left unchanged.
    ///
    /// At most one fetch is in flight per session: concurrent calls join
    /// the pending request and observe its outcome instead of racing a
    /// second request against it.
    pub async fn fetch_profile(&self) -> Result<Profile, FetchError> {
        let Some(token) = self.store.token() else {
            return Err(FetchError::NotAuthenticated);
        };

        let shared = {
            let mut slot = self.in_flight.lock();
            if let Some(pending) = slot.as_ref() {
                debug!("joining in-flight profile fetch");
                pending.clone()
            } else {
                let fetcher = Arc::clone(&self.fetcher);
                let store = self.store.clone();
                let in_flight = Arc::clone(&self.in_flight);
                let fut = async move {
                    let result = fetcher.fetch(&token).await;
                    // Free the slot before applying the outcome so a
                    // follow-up call starts a fresh request
                    *in_flight.lock() = None;
                    match result {
                        Ok(profile) => match store.set_profile(profile.clone()) {
                            Ok(()) => Ok(profile),
                            Err(_) => {
                                debug!("session cleared mid-fetch, discarding profile payload");
                                Err(FetchError::NotAuthenticated)
                            }
                        },
                        Err(err) => {
                            warn!(error = %err, "profile fetch failed");
                            Err(err)
                        }
                    }
                }
                .boxed()
                .shared();
                *slot = Some(fut.clone());
                fut
            }
        };

        shared.await
    }

    /// Whether a bearer token is present
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Last successfully fetched profile, if any
    pub fn profile(&self) -> Option<Profile> {
        self.store.profile()
    }
}

/// Clone is cheap - clones share the store and the in-flight fetch slot,
/// so coalescing holds across handles.
impl<F: FetchProfile> Clone for SessionController<F> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            fetcher: Arc::clone(&self.fetcher),
            login_route: self.login_route.clone(),
            nav_tx: self.nav_tx.clone(),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

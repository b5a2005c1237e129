//! Client-side authentication session core for the web front-end.
//!
//! Holds the bearer token and the authenticated user's profile, keeps
//! that state consistent between the session surface and the route
//! guard, and gates access to protected views.
//!
//! The application root wires the pieces together: one `SessionStore`
//! shared by a `SessionController` and an `AuthGuard`, a `ProfileFetcher`
//! for the profile endpoint, and an mpsc channel the navigation layer
//! drains for redirect events.

pub mod api;
pub mod config;
pub mod router;
pub mod session;

pub use api::{FetchError, FetchProfile, ProfileFetcher};
pub use config::Config;
pub use router::{AuthGuard, GuardDecision, NavEvent, Route};
pub use session::{Profile, SessionController, SessionError, SessionStore};

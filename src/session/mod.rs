//! Session module for managing the authenticated-user state.
//!
//! This module provides:
//! - `SessionStore`: the single source of truth for the bearer token and
//!   the fetched user profile
//! - `SessionController`: the login/logout/fetch-profile surface the rest
//!   of the application calls
//!
//! Authorization is token-based; the profile can lag or fail to load
//! without revoking it. Nothing here is persisted across restarts.

pub mod controller;
pub mod store;

pub use controller::SessionController;
pub use store::{Profile, SessionError, SessionStore};

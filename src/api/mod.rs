//! HTTP client module for the profile endpoint.
//!
//! This module provides the `ProfileFetcher` for retrieving the
//! authenticated user's profile, authorized with the session's bearer
//! token, and the `FetchError` taxonomy for everything that can go wrong
//! on that path.

pub mod client;
pub mod error;

pub use client::{FetchProfile, ProfileFetcher};
pub use error::FetchError;

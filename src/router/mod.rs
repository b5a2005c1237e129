//! Navigation boundary: the route guard and the events this crate emits
//! toward the navigation layer.
//!
//! The guard decides proceed-or-redirect for each route transition; the
//! navigation layer owning the route table enacts the decision and
//! listens for `NavEvent`s (currently only the logout redirect).

pub mod guard;

pub use guard::{AuthGuard, GuardDecision, Route};

/// Request from the session core to the navigation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Transition to the given route path
    Redirect(String),
}

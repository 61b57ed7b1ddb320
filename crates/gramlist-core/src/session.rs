//! Session lifecycle state.

use crate::models::SessionUser;

/// The lifecycle of a client session.
///
/// A freshly constructed session is `Uninitialized`; rehydration moves it
/// through `Loading` into either `Authenticated` or `Anonymous`. An
/// authenticated user implies a token pair was obtained at some point; the
/// reverse does not hold — a persisted pair may be stale until rehydration
/// confirms it.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No rehydration attempt has been made yet.
    Uninitialized,
    /// Rehydration is in flight.
    Loading,
    /// A confirmed session with its user.
    Authenticated(SessionUser),
    /// No session; the token store holds nothing usable.
    Anonymous,
}

impl SessionState {
    /// Returns the session user when authenticated.
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Returns true once rehydration has resolved either way.
    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            SessionState::Authenticated(_) | SessionState::Anonymous
        )
    }
}

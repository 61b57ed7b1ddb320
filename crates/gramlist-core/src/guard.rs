//! Route guard over the session state.

use crate::session::SessionState;

/// What a guarded surface should do for the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session confirmed; render the guarded surface.
    Allow,
    /// Rehydration still in flight; show a placeholder and make no
    /// navigation decision yet (avoids a flash-redirect on startup).
    Placeholder,
    /// No session; send the caller to login.
    RedirectToLogin,
}

/// Pure derived-state guard for session-protected surfaces.
///
/// Holds no state of its own; it only observes [`SessionState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    pub fn evaluate(state: &SessionState) -> GuardOutcome {
        match state {
            SessionState::Uninitialized | SessionState::Loading => GuardOutcome::Placeholder,
            SessionState::Authenticated(_) => GuardOutcome::Allow,
            SessionState::Anonymous => GuardOutcome::RedirectToLogin,
        }
    }
}

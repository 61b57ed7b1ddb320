//! Session construction and guarding for CLI commands.

pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result, bail};

use gramlist_core::{ApiUrl, GuardOutcome, RouteGuard};
use gramlist_rest::{ApiClient, SessionManager};

use storage::FileTokenStore;

/// Build a session manager over the persisted token store.
pub fn manager(server: &str) -> Result<SessionManager> {
    let base = ApiUrl::new(server).context("Invalid server URL")?;
    let store = Arc::new(FileTokenStore::open_default()?);
    Ok(SessionManager::new(ApiClient::new(base, store)))
}

/// Rehydrate and guard: returns the manager only for a confirmed session.
///
/// The CLI analog of the product's protected routes — anonymous callers are
/// sent to login instead of the guarded surface.
pub async fn require_session(server: &str) -> Result<SessionManager> {
    let session = manager(server)?;
    let state = session.rehydrate().await;

    match RouteGuard::evaluate(&state) {
        GuardOutcome::Allow => Ok(session),
        GuardOutcome::RedirectToLogin => {
            bail!("No active session. Run 'gramlist auth login' first.")
        }
        GuardOutcome::Placeholder => bail!("Session is still resolving, try again"),
    }
}

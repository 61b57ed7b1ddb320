//! Session lifecycle manager.
//!
//! Owns the one live session per client: rehydration from a persisted token
//! pair, login/register, logout, and the in-memory session user. Explicitly
//! constructed around an [`ApiClient`] so each test case can hold an
//! isolated instance.

use std::fmt;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use gramlist_core::{
    AccessToken, Credentials, RefreshToken, Registration, Result, SessionState, SessionUser,
};

use crate::client::ApiClient;
use crate::endpoints;

/// The server payload returned by login and register.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub access_token: String,
    pub refresh_token: String,
    pub user: SessionUser,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: SessionUser,
}

/// Manager for the client session lifecycle.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    client: ApiClient,
    state: RwLock<SessionState>,
    // Bumped by logout; in-flight continuations started under an older
    // epoch discard their result instead of resurrecting a dead session.
    epoch: AtomicU64,
}

impl SessionManager {
    /// Create a manager in the `Uninitialized` state.
    pub fn new(client: ApiClient) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                client,
                state: RwLock::new(SessionState::Uninitialized),
                epoch: AtomicU64::new(0),
            }),
        }
    }

    /// Returns the client this manager was built around.
    pub fn client(&self) -> &ApiClient {
        &self.inner.client
    }

    /// Returns a snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.inner.state.read().unwrap().clone()
    }

    /// Returns the session user when authenticated.
    pub fn user(&self) -> Option<SessionUser> {
        self.state().user().cloned()
    }

    /// Reconstruct the session from a persisted token, if one exists.
    ///
    /// With no stored token this resolves to `Anonymous` immediately and
    /// issues no network call. With a token it asks the backend who the
    /// token belongs to; any failure clears the store so a stale token is
    /// never left behind.
    #[instrument(skip(self))]
    pub async fn rehydrate(&self) -> SessionState {
        let store = self.inner.client.store();
        if store.access_token().is_none() {
            self.set_state(SessionState::Anonymous);
            return self.state();
        }

        let epoch = self.inner.epoch.load(Ordering::Acquire);
        self.set_state(SessionState::Loading);

        match self.inner.client.get::<UserEnvelope>(endpoints::AUTH_USER).await {
            Ok(envelope) => {
                debug!(user = %envelope.user.id, "session rehydrated");
                self.apply(epoch, SessionState::Authenticated(envelope.user));
            }
            Err(e) => {
                // A 401 already cleared the store inside the wrapper; any
                // other failure clears it here so the outcome is the same.
                if let Err(err) = store.clear() {
                    warn!(error = %err, "failed to clear token store");
                }
                debug!(error = %e, "rehydration failed, session is anonymous");
                self.apply(epoch, SessionState::Anonymous);
            }
        }

        self.state()
    }

    /// Exchange credentials for a token pair and a session user.
    ///
    /// Errors propagate untouched; there is no retry.
    #[instrument(skip(self, credentials), fields(email = credentials.email()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthPayload> {
        let epoch = self.inner.epoch.load(Ordering::Acquire);
        let payload: AuthPayload = self
            .inner
            .client
            .post(endpoints::AUTH_LOGIN, credentials)
            .await?;

        self.adopt(epoch, &payload)?;
        info!(user = %payload.user.id, "logged in");
        Ok(payload)
    }

    /// Create an account; the backend logs the new account straight in.
    #[instrument(skip(self, registration), fields(email = registration.email()))]
    pub async fn register(&self, registration: &Registration) -> Result<AuthPayload> {
        let epoch = self.inner.epoch.load(Ordering::Acquire);
        let payload: AuthPayload = self
            .inner
            .client
            .post(endpoints::AUTH_REGISTER, registration)
            .await?;

        self.adopt(epoch, &payload)?;
        info!(user = %payload.user.id, "registered");
        Ok(payload)
    }

    /// Drop the session locally: clear the token store and forget the user.
    ///
    /// Synchronous; no network call is involved in the local transition.
    pub fn logout(&self) -> Result<()> {
        self.inner.epoch.fetch_add(1, Ordering::AcqRel);
        self.inner.client.store().clear()?;
        self.set_state(SessionState::Anonymous);
        info!("logged out");
        Ok(())
    }

    /// Replace the in-memory session user with the supplied value.
    ///
    /// Callers construct the merged object; nothing is persisted.
    pub fn update_user(&self, user: SessionUser) {
        self.set_state(SessionState::Authenticated(user));
    }

    /// Persist the token pair and adopt the user, unless the session was
    /// invalidated while the request was in flight.
    fn adopt(&self, epoch: u64, payload: &AuthPayload) -> Result<()> {
        if self.inner.epoch.load(Ordering::Acquire) != epoch {
            debug!("session invalidated mid-flight, discarding auth result");
            return Ok(());
        }

        self.inner.client.store().set_tokens(
            &AccessToken::new(&payload.access_token),
            &RefreshToken::new(&payload.refresh_token),
        )?;
        self.set_state(SessionState::Authenticated(payload.user.clone()));
        Ok(())
    }

    /// Apply a rehydration outcome unless the epoch moved mid-flight.
    fn apply(&self, epoch: u64, state: SessionState) {
        if self.inner.epoch.load(Ordering::Acquire) == epoch {
            self.set_state(state);
        } else {
            debug!("session invalidated mid-flight, discarding state update");
        }
    }

    fn set_state(&self, state: SessionState) {
        *self.inner.state.write().unwrap() = state;
    }
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("client", &self.inner.client)
            .field("state", &self.state())
            .finish()
    }
}

//! Instagram connect and media gallery operations.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use gramlist_core::{MediaFeed, Result};

use crate::client::ApiClient;
use crate::endpoints;

use super::StatusMessage;

/// The OAuth authorization URL to send the user to.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizationUrl {
    pub authorization_url: String,
}

/// Outcome of completing the OAuth handshake.
#[derive(Debug, Clone, Deserialize)]
pub struct InstagramLink {
    pub message: String,
    #[serde(default)]
    pub instagram_username: Option<String>,
    #[serde(default)]
    pub expires_in_days: Option<i64>,
}

/// Instagram account linking and media listing.
#[derive(Debug)]
pub struct InstagramService<'a> {
    client: &'a ApiClient,
}

impl<'a> InstagramService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Ask the backend for the OAuth authorization URL.
    #[instrument(skip(self))]
    pub async fn initiate(&self) -> Result<AuthorizationUrl> {
        self.client.get(endpoints::INSTAGRAM_INITIATE).await
    }

    /// Finalize the OAuth handshake with the provider's code and state.
    #[instrument(skip(self, code))]
    pub async fn complete_callback(&self, code: &str, state: &str) -> Result<InstagramLink> {
        #[derive(Serialize)]
        struct Query<'b> {
            code: &'b str,
            state: &'b str,
        }

        self.client
            .get_query(endpoints::INSTAGRAM_CALLBACK, &Query { code, state })
            .await
    }

    /// Revoke the Instagram link.
    #[instrument(skip(self))]
    pub async fn disconnect(&self) -> Result<StatusMessage> {
        self.client.post_empty(endpoints::INSTAGRAM_DISCONNECT).await
    }

    /// List the connected account's media.
    #[instrument(skip(self))]
    pub async fn media(&self) -> Result<MediaFeed> {
        self.client.get(endpoints::INSTAGRAM_MEDIA).await
    }
}

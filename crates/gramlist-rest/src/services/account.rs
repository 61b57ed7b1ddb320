//! Profile and password operations for the settings surface.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use gramlist_core::{Result, SessionUser};

use crate::client::ApiClient;
use crate::endpoints;

use super::StatusMessage;

/// Partial profile update. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Account settings operations.
#[derive(Debug)]
pub struct AccountService<'a> {
    client: &'a ApiClient,
}

impl<'a> AccountService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Update the profile; returns the fresh user object for callers to
    /// hand to `SessionManager::update_user`.
    #[instrument(skip(self, update))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<SessionUser> {
        #[derive(Deserialize)]
        struct Envelope {
            user: SessionUser,
        }

        let envelope: Envelope = self.client.put(endpoints::AUTH_PROFILE, update).await?;
        Ok(envelope.user)
    }

    /// Change the account password.
    #[instrument(skip(self, current_password, new_password))]
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<StatusMessage> {
        #[derive(Serialize)]
        struct Body<'b> {
            current_password: &'b str,
            new_password: &'b str,
        }

        self.client
            .put(
                endpoints::AUTH_PASSWORD,
                &Body {
                    current_password,
                    new_password,
                },
            )
            .await
    }
}

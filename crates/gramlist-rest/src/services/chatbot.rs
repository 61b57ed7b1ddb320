//! Assistant chat endpoint.

use serde::Serialize;
use tracing::instrument;

use gramlist_core::{ChatReply, Result};

use crate::client::ApiClient;
use crate::endpoints;

/// Send messages to the product assistant.
#[derive(Debug)]
pub struct ChatbotService<'a> {
    client: &'a ApiClient,
}

impl<'a> ChatbotService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self, message))]
    pub async fn send(&self, message: &str) -> Result<ChatReply> {
        #[derive(Serialize)]
        struct Body<'b> {
            message: &'b str,
        }

        self.client.post(endpoints::CHATBOT, &Body { message }).await
    }
}

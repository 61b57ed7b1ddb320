//! Chatbot models.

use serde::{Deserialize, Serialize};

/// The assistant's reply to a chat message.
///
/// The backend answers errors on this endpoint with a `reply` body too, so
/// this is the only shape the chat surface ever renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

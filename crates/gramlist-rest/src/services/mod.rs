//! One thin service per feature area.
//!
//! Each service borrows the shared [`ApiClient`](crate::ApiClient) and owns
//! nothing else; feature surfaces fetch independently and share no state
//! beyond the session.

mod account;
mod amazon;
mod analytics;
mod chatbot;
mod instagram;
mod products;

pub use account::{AccountService, ProfileUpdate};
pub use amazon::AmazonService;
pub use analytics::AnalyticsService;
pub use chatbot::ChatbotService;
pub use instagram::{AuthorizationUrl, InstagramLink, InstagramService};
pub use products::ProductsService;

use serde::Deserialize;

/// Plain `{ message }` acknowledgement body.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

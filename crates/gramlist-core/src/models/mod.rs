//! Wire types per feature area.

mod analytics;
mod chat;
mod listing;
mod media;
mod product;
mod user;

pub use analytics::{DailySales, DashboardSummary, SalesReport};
pub use chat::ChatReply;
pub use listing::{AmazonCredentials, Listing, ListingUpdate};
pub use media::{MediaFeed, MediaItem};
pub use product::{NewProduct, Product, ProductUpdate};
pub use user::SessionUser;

pub(crate) mod de {
    use serde::{Deserialize, Deserializer};

    /// Accept an id as either a JSON string or a number.
    ///
    /// The backend has shipped on two stores (document and relational) that
    /// disagree on id types; tolerate both.
    pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Id {
            Text(String),
            Number(i64),
        }

        Ok(match Id::deserialize(deserializer)? {
            Id::Text(s) => s,
            Id::Number(n) => n.to_string(),
        })
    }
}

//! gramlist-core - Core types and contracts for the gramlist client toolkit.

pub mod credentials;
pub mod error;
pub mod guard;
pub mod models;
pub mod session;
pub mod store;
pub mod tokens;
pub mod types;

pub use credentials::{Credentials, Registration};
pub use error::Error;
pub use guard::{GuardOutcome, RouteGuard};
pub use models::{
    AmazonCredentials, ChatReply, DailySales, DashboardSummary, Listing, ListingUpdate, MediaFeed,
    MediaItem, NewProduct, Product, ProductUpdate, SalesReport, SessionUser,
};
pub use session::SessionState;
pub use store::{MemoryTokenStore, TokenStore};
pub use tokens::{AccessToken, RefreshToken};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

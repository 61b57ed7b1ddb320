//! gramlist-rest - REST-backed client implementation.
//!
//! Everything flows through one shared [`ApiClient`]; the
//! [`SessionManager`] owns the session lifecycle on top of it, and the
//! [`services`] expose one thin surface per feature area.

mod client;
pub mod endpoints;
mod session;
pub mod services;

pub use client::ApiClient;
pub use session::{AuthPayload, SessionManager};

//! Subcommand group implementations.

pub mod amazon;
pub mod analytics;
pub mod auth;
pub mod chat;
pub mod instagram;
pub mod products;

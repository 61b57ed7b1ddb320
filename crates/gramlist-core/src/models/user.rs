//! Session user model.

use serde::{Deserialize, Serialize};

use super::de;

/// The in-memory representation of the currently authenticated account.
///
/// Held exclusively by the session manager; callers read it and hand a
/// replacement back through `update_user` rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(deserialize_with = "de::id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub instagram_connected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_username: Option<String>,
    #[serde(default)]
    pub amazon_connected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amazon_seller_id: Option<String>,
}

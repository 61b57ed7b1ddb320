//! Amazon marketplace models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::de;

/// Seller credentials for connecting an Amazon account.
///
/// # Security
///
/// The key pair is never exposed in Debug output.
#[derive(Clone, Serialize)]
pub struct AmazonCredentials {
    pub seller_id: String,
    pub access_key: String,
    pub secret_key: String,
}

impl AmazonCredentials {
    pub fn new(
        seller_id: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            seller_id: seller_id.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for AmazonCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmazonCredentials")
            .field("seller_id", &self.seller_id)
            .field("access_key", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// A marketplace listing created from a catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    #[serde(deserialize_with = "de::id_string")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Partial update for an existing listing. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amazon_credentials_hide_keys_in_debug() {
        let creds = AmazonCredentials::new("A2SELLER", "AKIA123", "wJalrXUtnFEMI");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("A2SELLER"));
        assert!(!debug.contains("AKIA123"));
        assert!(!debug.contains("wJalrXUtnFEMI"));
    }

    #[test]
    fn listing_update_serializes_only_set_fields() {
        let update = ListingUpdate {
            quantity: Some(4),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"quantity": 4})
        );
    }
}

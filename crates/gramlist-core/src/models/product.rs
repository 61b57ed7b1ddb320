//! Product catalog models.

use serde::{Deserialize, Serialize};

use super::de;

/// A product in the user's catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "de::id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    pub sku: String,
}

/// Fields required to create a product.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

/// Partial update for an existing product. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_omits_unset_fields() {
        let update = ProductUpdate {
            price: Some(24.5),
            ..Default::default()
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({"price": 24.5}));
    }

    #[test]
    fn deserializes_relational_product() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Stoneware mug",
            "price": 18.0,
            "sku": "MUG-007",
            "stock": 12
        }))
        .unwrap();
        assert_eq!(product.id, "7");
        assert_eq!(product.description, "");
    }
}

//! Product catalog CRUD.

use serde::Deserialize;
use tracing::instrument;

use gramlist_core::{NewProduct, Product, ProductUpdate, Result};

use crate::client::ApiClient;
use crate::endpoints;

use super::StatusMessage;

#[derive(Deserialize)]
struct ProductEnvelope {
    product: Product,
}

#[derive(Deserialize)]
struct ProductsEnvelope {
    products: Vec<Product>,
}

/// Product catalog operations.
#[derive(Debug)]
pub struct ProductsService<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>> {
        let envelope: ProductsEnvelope = self.client.get(endpoints::PRODUCTS).await?;
        Ok(envelope.products)
    }

    #[instrument(skip(self, product), fields(sku = %product.sku))]
    pub async fn create(&self, product: &NewProduct) -> Result<Product> {
        let envelope: ProductEnvelope = self.client.post(endpoints::PRODUCTS, product).await?;
        Ok(envelope.product)
    }

    #[instrument(skip(self, update))]
    pub async fn update(&self, id: &str, update: &ProductUpdate) -> Result<Product> {
        let path = format!("{}/{}", endpoints::PRODUCTS, id);
        let envelope: ProductEnvelope = self.client.put(&path, update).await?;
        Ok(envelope.product)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<StatusMessage> {
        let path = format!("{}/{}", endpoints::PRODUCTS, id);
        self.client.delete(&path).await
    }
}

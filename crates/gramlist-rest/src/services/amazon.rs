//! Amazon marketplace credential and listing operations.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use gramlist_core::{AmazonCredentials, Listing, ListingUpdate, Result};

use crate::client::ApiClient;
use crate::endpoints;

use super::StatusMessage;

#[derive(Deserialize)]
struct ListingEnvelope {
    listing: Listing,
}

#[derive(Deserialize)]
struct ListingsEnvelope {
    listings: Vec<Listing>,
}

/// Marketplace operations.
#[derive(Debug)]
pub struct AmazonService<'a> {
    client: &'a ApiClient,
}

impl<'a> AmazonService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Store seller credentials and mark the account connected.
    #[instrument(skip(self, credentials))]
    pub async fn connect(&self, credentials: &AmazonCredentials) -> Result<StatusMessage> {
        self.client.post(endpoints::AMAZON_CONNECT, credentials).await
    }

    /// List the seller's marketplace listings.
    #[instrument(skip(self))]
    pub async fn listings(&self) -> Result<Vec<Listing>> {
        let envelope: ListingsEnvelope = self.client.get(endpoints::AMAZON_LISTINGS).await?;
        Ok(envelope.listings)
    }

    /// Publish a catalog product as a new listing.
    #[instrument(skip(self))]
    pub async fn publish(&self, product_id: &str) -> Result<Listing> {
        #[derive(Serialize)]
        struct Body<'b> {
            product_id: &'b str,
        }

        let envelope: ListingEnvelope = self
            .client
            .post(endpoints::AMAZON_LISTINGS, &Body { product_id })
            .await?;
        Ok(envelope.listing)
    }

    /// Update price, quantity, or status on an existing listing.
    #[instrument(skip(self, update))]
    pub async fn update_listing(&self, id: &str, update: &ListingUpdate) -> Result<Listing> {
        let path = format!("{}/{}", endpoints::AMAZON_LISTINGS, id);
        let envelope: ListingEnvelope = self.client.put(&path, update).await?;
        Ok(envelope.listing)
    }
}

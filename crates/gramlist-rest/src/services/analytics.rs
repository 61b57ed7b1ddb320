//! Dashboard and sales analytics fetches.

use tracing::instrument;

use gramlist_core::{DashboardSummary, Result, SalesReport};

use crate::client::ApiClient;
use crate::endpoints;

/// Aggregate metrics for the dashboard and analytics surfaces.
#[derive(Debug)]
pub struct AnalyticsService<'a> {
    client: &'a ApiClient,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> Result<DashboardSummary> {
        self.client.get(endpoints::ANALYTICS_DASHBOARD).await
    }

    #[instrument(skip(self))]
    pub async fn sales(&self) -> Result<SalesReport> {
        self.client.get(endpoints::ANALYTICS_SALES).await
    }
}

//! Dashboard command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_rest::services::AnalyticsService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct DashboardArgs {}

pub async fn run(_args: DashboardArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let summary = AnalyticsService::new(manager.client())
        .dashboard()
        .await
        .context("Failed to fetch dashboard metrics")?;

    output::field("Products", &summary.total_products.to_string());
    output::field("Orders", &summary.total_orders.to_string());
    output::field("Sales", &format!("{:.2}", summary.total_sales));
    output::field(
        "Products with posts",
        &summary.products_with_posts.to_string(),
    );
    output::field(
        "Instagram",
        if summary.instagram_connected {
            "connected"
        } else {
            "not connected"
        },
    );
    output::field(
        "Amazon",
        if summary.amazon_connected {
            "connected"
        } else {
            "not connected"
        },
    );

    Ok(())
}

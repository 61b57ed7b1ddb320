//! Listing publish command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_rest::services::AmazonService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Catalog product id to publish
    #[arg(long)]
    pub product_id: String,
}

pub async fn run(args: PublishArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let listing = AmazonService::new(manager.client())
        .publish(&args.product_id)
        .await
        .context("Failed to publish listing")?;

    output::success("Listing created");
    output::field("Id", &listing.id);
    if let Some(asin) = &listing.asin {
        output::field("ASIN", asin);
    }
    output::field("Title", &listing.title);

    Ok(())
}

//! Listing update command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use gramlist_core::ListingUpdate;
use gramlist_rest::services::AmazonService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UpdateListingArgs {
    /// Listing id
    #[arg(long)]
    pub id: String,

    /// New price
    #[arg(long)]
    pub price: Option<f64>,

    /// New quantity
    #[arg(long)]
    pub quantity: Option<u32>,

    /// New status
    #[arg(long)]
    pub status: Option<String>,
}

pub async fn run(args: UpdateListingArgs, server: &str) -> Result<()> {
    if args.price.is_none() && args.quantity.is_none() && args.status.is_none() {
        bail!("Nothing to update; pass --price, --quantity, and/or --status");
    }

    let manager = session::require_session(server).await?;

    let update = ListingUpdate {
        price: args.price,
        quantity: args.quantity,
        status: args.status,
    };

    let listing = AmazonService::new(manager.client())
        .update_listing(&args.id, &update)
        .await
        .context("Failed to update listing")?;

    output::success("Listing updated");
    output::field("Title", &listing.title);
    output::field("Price", &format!("{:.2}", listing.price));
    if let Some(quantity) = listing.quantity {
        output::field("Quantity", &quantity.to_string());
    }

    Ok(())
}

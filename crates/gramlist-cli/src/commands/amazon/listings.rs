//! Listings command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_rest::services::AmazonService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ListingsArgs {
    /// Print the listings as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListingsArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let listings = AmazonService::new(manager.client())
        .listings()
        .await
        .context("Failed to list marketplace listings")?;

    if args.json {
        return output::json_pretty(&listings);
    }

    for listing in &listings {
        let status = listing.status.as_deref().unwrap_or("unknown");
        output::field(
            &format!("{} [{}]", listing.title, status),
            &format!("{:.2}", listing.price),
        );
    }
    println!();
    output::field("Total", &listings.len().to_string());

    Ok(())
}

//! Product list command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_rest::services::ProductsService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let products = ProductsService::new(manager.client())
        .list()
        .await
        .context("Failed to list products")?;

    if args.json {
        return output::json_pretty(&products);
    }

    for product in &products {
        output::field(
            &format!("{} ({})", product.name, product.sku),
            &format!("{:.2}, {} in stock", product.price, product.stock),
        );
    }
    println!();
    output::field("Total", &products.len().to_string());

    Ok(())
}

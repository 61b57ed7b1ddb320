//! Product update command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use gramlist_core::ProductUpdate;
use gramlist_rest::services::ProductsService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Product id
    #[arg(long)]
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New unit price
    #[arg(long)]
    pub price: Option<f64>,

    /// New stock level
    #[arg(long)]
    pub stock: Option<u32>,

    /// New SKU
    #[arg(long)]
    pub sku: Option<String>,
}

pub async fn run(args: UpdateArgs, server: &str) -> Result<()> {
    let update = ProductUpdate {
        name: args.name,
        description: args.description,
        price: args.price,
        stock: args.stock,
        sku: args.sku,
    };

    if serde_json::to_value(&update)? == serde_json::json!({}) {
        bail!("Nothing to update; pass at least one field");
    }

    let manager = session::require_session(server).await?;

    let product = ProductsService::new(manager.client())
        .update(&args.id, &update)
        .await
        .context("Failed to update product")?;

    output::success("Product updated");
    output::field("Name", &product.name);
    output::field("Price", &format!("{:.2}", product.price));
    output::field("Stock", &product.stock.to_string());

    Ok(())
}

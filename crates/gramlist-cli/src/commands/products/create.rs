//! Product create command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_core::NewProduct;
use gramlist_rest::services::ProductsService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Unit price
    #[arg(long)]
    pub price: f64,

    /// Stock-keeping unit
    #[arg(long)]
    pub sku: String,

    /// Product description
    #[arg(long)]
    pub description: Option<String>,

    /// Initial stock
    #[arg(long)]
    pub stock: Option<u32>,
}

pub async fn run(args: CreateArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let product = ProductsService::new(manager.client())
        .create(&NewProduct {
            name: args.name,
            price: args.price,
            sku: args.sku,
            description: args.description,
            stock: args.stock,
        })
        .await
        .context("Failed to create product")?;

    output::success("Product created");
    output::field("Id", &product.id);
    output::field("Name", &product.name);

    Ok(())
}

//! Product delete command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_rest::services::ProductsService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Product id
    #[arg(long)]
    pub id: String,
}

pub async fn run(args: DeleteArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let ack = ProductsService::new(manager.client())
        .delete(&args.id)
        .await
        .context("Failed to delete product")?;

    output::success(&ack.message);
    Ok(())
}

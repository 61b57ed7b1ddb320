//! Amazon connect command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_core::AmazonCredentials;
use gramlist_rest::services::AmazonService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Seller account id
    #[arg(long)]
    pub seller_id: String,

    /// Marketplace API access key
    #[arg(long)]
    pub access_key: String,

    /// Marketplace API secret key
    #[arg(long)]
    pub secret_key: String,
}

pub async fn run(args: ConnectArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let credentials = AmazonCredentials::new(args.seller_id, args.access_key, args.secret_key);
    let ack = AmazonService::new(manager.client())
        .connect(&credentials)
        .await
        .context("Failed to connect Amazon account")?;

    output::success(&ack.message);
    Ok(())
}

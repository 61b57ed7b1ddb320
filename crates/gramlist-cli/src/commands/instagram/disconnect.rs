//! Instagram disconnect command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_rest::services::InstagramService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct DisconnectArgs {}

pub async fn run(_args: DisconnectArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let ack = InstagramService::new(manager.client())
        .disconnect()
        .await
        .context("Failed to disconnect Instagram")?;

    output::success(&ack.message);
    Ok(())
}

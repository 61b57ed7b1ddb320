//! Chat command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_rest::services::ChatbotService;

use crate::session;

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// The message to send
    pub message: String,
}

pub async fn run(args: ChatArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let reply = ChatbotService::new(manager.client())
        .send(&args.message)
        .await
        .context("Failed to reach the assistant")?;

    println!("{}", reply.reply);
    Ok(())
}

//! Instagram callback command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_rest::services::InstagramService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct CallbackArgs {
    /// OAuth code from the provider redirect
    #[arg(long)]
    pub code: String,

    /// Opaque state from the provider redirect
    #[arg(long)]
    pub state: String,
}

pub async fn run(args: CallbackArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let link = InstagramService::new(manager.client())
        .complete_callback(&args.code, &args.state)
        .await
        .context("Failed to finalize Instagram connection")?;

    output::success(&link.message);
    if let Some(username) = &link.instagram_username {
        output::field("Instagram", username);
    }
    if let Some(days) = link.expires_in_days {
        output::field("Token expires in", &format!("{} days", days));
    }

    Ok(())
}

//! Password change command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_rest::services::AccountService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ChangePasswordArgs {
    /// Current password
    #[arg(long)]
    pub current: String,

    /// New password
    #[arg(long)]
    pub new: String,
}

pub async fn run(args: ChangePasswordArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let ack = AccountService::new(manager.client())
        .change_password(&args.current, &args.new)
        .await
        .context("Failed to change password")?;

    output::success(&ack.message);
    Ok(())
}

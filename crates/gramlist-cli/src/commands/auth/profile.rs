//! Profile update command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use gramlist_rest::services::{AccountService, ProfileUpdate};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UpdateProfileArgs {
    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New email address
    #[arg(long)]
    pub email: Option<String>,
}

pub async fn run(args: UpdateProfileArgs, server: &str) -> Result<()> {
    if args.name.is_none() && args.email.is_none() {
        bail!("Nothing to update; pass --name and/or --email");
    }

    let manager = session::require_session(server).await?;

    let update = ProfileUpdate {
        name: args.name,
        email: args.email,
    };

    let user = AccountService::new(manager.client())
        .update_profile(&update)
        .await
        .context("Failed to update profile")?;

    // Keep the in-memory session in step with the backend.
    manager.update_user(user.clone());

    output::success("Profile updated");
    println!();
    output::field("User", &user.name);
    output::field("Email", &user.email);

    Ok(())
}

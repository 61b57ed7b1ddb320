//! Instagram connect command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_rest::services::InstagramService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ConnectArgs {}

pub async fn run(_args: ConnectArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let auth = InstagramService::new(manager.client())
        .initiate()
        .await
        .context("Failed to start Instagram connection")?;

    output::field("Authorization URL", &auth.authorization_url);
    println!();
    println!("Open the URL in a browser, authorize the app, then run");
    println!("'gramlist instagram callback --code <code> --state <state>'");
    println!("with the values from the redirect.");

    Ok(())
}

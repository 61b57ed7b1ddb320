//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, server: &str) -> Result<()> {
    // Purely local: the session transition never needs the network.
    let manager = session::manager(server)?;
    manager.logout().context("Failed to clear session")?;

    output::success("Logged out");
    Ok(())
}

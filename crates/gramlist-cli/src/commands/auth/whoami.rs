//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    if let Some(user) = manager.user() {
        output::field("User", &user.name);
        output::field("Email", &user.email);
        output::field(
            "Instagram",
            user.instagram_username.as_deref().unwrap_or(if user.instagram_connected {
                "connected"
            } else {
                "not connected"
            }),
        );
        output::field(
            "Amazon",
            if user.amazon_connected {
                user.amazon_seller_id.as_deref().unwrap_or("connected")
            } else {
                "not connected"
            },
        );
    }

    Ok(())
}

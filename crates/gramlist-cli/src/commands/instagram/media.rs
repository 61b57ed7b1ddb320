//! Media listing command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_rest::services::InstagramService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct MediaArgs {
    /// Print the raw feed as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: MediaArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let feed = InstagramService::new(manager.client())
        .media()
        .await
        .context("Failed to fetch media")?;

    if args.json {
        return output::json_pretty(&feed);
    }

    for item in &feed.media {
        let caption = item.caption.as_deref().unwrap_or("(no caption)");
        output::field(&format!("{} [{}]", item.id, item.media_type), caption);
    }
    println!();
    output::field("Total", &feed.media.len().to_string());
    if let Some(new) = feed.new_media_stored {
        output::field("Newly stored", &new.to_string());
    }

    Ok(())
}

//! Amazon marketplace subcommands.

mod connect;
mod listings;
mod publish;
mod update_listing;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AmazonCommand {
    #[command(subcommand)]
    pub command: AmazonSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AmazonSubcommand {
    /// Store seller credentials
    Connect(connect::ConnectArgs),

    /// List marketplace listings
    Listings(listings::ListingsArgs),

    /// Publish a catalog product as a listing
    Publish(publish::PublishArgs),

    /// Update price, quantity, or status on a listing
    UpdateListing(update_listing::UpdateListingArgs),
}

pub async fn handle(cmd: AmazonCommand, server: &str) -> Result<()> {
    match cmd.command {
        AmazonSubcommand::Connect(args) => connect::run(args, server).await,
        AmazonSubcommand::Listings(args) => listings::run(args, server).await,
        AmazonSubcommand::Publish(args) => publish::run(args, server).await,
        AmazonSubcommand::UpdateListing(args) => update_listing::run(args, server).await,
    }
}

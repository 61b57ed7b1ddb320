//! Instagram linking and media subcommands.

mod callback;
mod connect;
mod disconnect;
mod media;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct InstagramCommand {
    #[command(subcommand)]
    pub command: InstagramSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum InstagramSubcommand {
    /// Start the OAuth handshake and print the authorization URL
    Connect(connect::ConnectArgs),

    /// Finalize the OAuth handshake with the provider's code and state
    Callback(callback::CallbackArgs),

    /// Revoke the Instagram link
    Disconnect(disconnect::DisconnectArgs),

    /// List the connected account's media
    Media(media::MediaArgs),
}

pub async fn handle(cmd: InstagramCommand, server: &str) -> Result<()> {
    match cmd.command {
        InstagramSubcommand::Connect(args) => connect::run(args, server).await,
        InstagramSubcommand::Callback(args) => callback::run(args, server).await,
        InstagramSubcommand::Disconnect(args) => disconnect::run(args, server).await,
        InstagramSubcommand::Media(args) => media::run(args, server).await,
    }
}

//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::amazon::AmazonCommand;
use crate::commands::analytics::AnalyticsCommand;
use crate::commands::auth::AuthCommand;
use crate::commands::chat::ChatArgs;
use crate::commands::instagram::InstagramCommand;
use crate::commands::products::ProductsCommand;

/// CLI for converting social posts into marketplace listings.
#[derive(Parser, Debug)]
#[command(name = "gramlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// API server base URL
    #[arg(long, global = true, default_value = "http://localhost:5000")]
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Session and account settings
    Auth(AuthCommand),

    /// Instagram account linking and media
    Instagram(InstagramCommand),

    /// Product catalog management
    Products(ProductsCommand),

    /// Amazon marketplace connection and listings
    Amazon(AmazonCommand),

    /// Dashboard and sales metrics
    Analytics(AnalyticsCommand),

    /// Ask the product assistant
    Chat(ChatArgs),
}

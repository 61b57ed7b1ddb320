//! gramlist - CLI for the social-to-marketplace conversion toolkit.
//!
//! This is a thin wrapper over the `gramlist-rest` client, with one
//! subcommand group per feature surface of the product.

mod cli;
mod commands;
mod output;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Auth(cmd) => commands::auth::handle(cmd, &cli.server).await,
        Commands::Instagram(cmd) => commands::instagram::handle(cmd, &cli.server).await,
        Commands::Products(cmd) => commands::products::handle(cmd, &cli.server).await,
        Commands::Amazon(cmd) => commands::amazon::handle(cmd, &cli.server).await,
        Commands::Analytics(cmd) => commands::analytics::handle(cmd, &cli.server).await,
        Commands::Chat(args) => commands::chat::run(args, &cli.server).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}

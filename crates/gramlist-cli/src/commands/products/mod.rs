//! Product catalog subcommands.

mod create;
mod delete;
mod list;
mod update;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ProductsCommand {
    #[command(subcommand)]
    pub command: ProductsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProductsSubcommand {
    /// List catalog products
    List(list::ListArgs),

    /// Create a product
    Create(create::CreateArgs),

    /// Update fields on a product
    Update(update::UpdateArgs),

    /// Delete a product
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: ProductsCommand, server: &str) -> Result<()> {
    match cmd.command {
        ProductsSubcommand::List(args) => list::run(args, server).await,
        ProductsSubcommand::Create(args) => create::run(args, server).await,
        ProductsSubcommand::Update(args) => update::run(args, server).await,
        ProductsSubcommand::Delete(args) => delete::run(args, server).await,
    }
}

//! Dashboard and sales subcommands.

mod dashboard;
mod sales;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AnalyticsCommand {
    #[command(subcommand)]
    pub command: AnalyticsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AnalyticsSubcommand {
    /// Show aggregate dashboard metrics
    Dashboard(dashboard::DashboardArgs),

    /// Show daily sales over the trailing window
    Sales(sales::SalesArgs),
}

pub async fn handle(cmd: AnalyticsCommand, server: &str) -> Result<()> {
    match cmd.command {
        AnalyticsSubcommand::Dashboard(args) => dashboard::run(args, server).await,
        AnalyticsSubcommand::Sales(args) => sales::run(args, server).await,
    }
}

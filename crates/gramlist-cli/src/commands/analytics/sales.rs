//! Sales command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramlist_rest::services::AnalyticsService;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct SalesArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SalesArgs, server: &str) -> Result<()> {
    let manager = session::require_session(server).await?;

    let report = AnalyticsService::new(manager.client())
        .sales()
        .await
        .context("Failed to fetch sales report")?;

    if args.json {
        return output::json_pretty(&report);
    }

    for (day, sales) in &report.daily_sales {
        output::field(
            &day.to_string(),
            &format!("{:.2} across {} orders", sales.amount, sales.orders),
        );
    }

    Ok(())
}

//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use gramlist_core::Registration;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: RegisterArgs, server: &str) -> Result<()> {
    let manager = session::manager(server)?;
    let registration = Registration::new(&args.name, &args.email, &args.password);

    eprintln!("{}", "Creating account...".dimmed());

    manager
        .register(&registration)
        .await
        .context("Failed to register")?;

    output::success("Account created");
    println!();
    if let Some(user) = manager.user() {
        output::field("User", &user.name);
        output::field("Email", &user.email);
    }

    Ok(())
}

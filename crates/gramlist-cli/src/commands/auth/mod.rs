//! Session and account-settings subcommands.

mod login;
mod logout;
mod password;
mod profile;
mod register;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in and persist the session
    Login(login::LoginArgs),

    /// Create an account and log straight in
    Register(register::RegisterArgs),

    /// Drop the local session
    Logout(logout::LogoutArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Update profile fields
    UpdateProfile(profile::UpdateProfileArgs),

    /// Change the account password
    ChangePassword(password::ChangePasswordArgs),
}

pub async fn handle(cmd: AuthCommand, server: &str) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(args, server).await,
        AuthSubcommand::Register(args) => register::run(args, server).await,
        AuthSubcommand::Logout(args) => logout::run(args, server).await,
        AuthSubcommand::Whoami(args) => whoami::run(args, server).await,
        AuthSubcommand::UpdateProfile(args) => profile::run(args, server).await,
        AuthSubcommand::ChangePassword(args) => password::run(args, server).await,
    }
}

use clap::{Parser, Subcommand};
use sqlx::PgPool;

use innkeep_app::database;

mod db;
mod membership;
mod tenant;
mod token;

/// Operator tooling for tenants, memberships, and API tokens.
#[derive(Debug, Parser)]
#[command(name = "innkeep-app", about = "Innkeep operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Onboard hotel properties
    Tenant(tenant::TenantCommand),

    /// Grant and inspect tenant access
    Membership(membership::MembershipCommand),

    /// Issue, list, and revoke API tokens
    Token(token::TokenCommand),

    /// Database maintenance
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Command::Tenant(command) => command.run().await,
            Command::Membership(command) => command.run().await,
            Command::Token(command) => command.run().await,
            Command::Db(command) => command.run().await,
        }
    }
}

/// Shared pool setup for every subcommand. The error string never echoes
/// the URL, which may carry credentials.
async fn connect_pool(database_url: &str) -> Result<PgPool, String> {
    database::connect(database_url)
        .await
        .map_err(|error| format!("database connection failed: {error}"))
}

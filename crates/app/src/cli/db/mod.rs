use clap::{Args, Subcommand};

mod ensure_app_role;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Create or update the runtime role the API connects as
    EnsureAppRole(ensure_app_role::EnsureAppRoleArgs),
}

impl DbCommand {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            DbSubcommand::EnsureAppRole(args) => args.run().await,
        }
    }
}

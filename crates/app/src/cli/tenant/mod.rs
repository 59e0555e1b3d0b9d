use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct TenantCommand {
    #[command(subcommand)]
    command: TenantSubcommand,
}

#[derive(Debug, Subcommand)]
enum TenantSubcommand {
    /// Register a new hotel property
    Create(create::CreateTenantArgs),
}

impl TenantCommand {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            TenantSubcommand::Create(args) => args.run().await,
        }
    }
}

use clap::{Args, Subcommand};

mod create;
mod list;
mod revoke;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    /// Issue a bearer token for a user
    Create(create::CreateTokenArgs),

    /// Show a user's tokens and their state
    List(list::ListTokensArgs),

    /// Deactivate a token by UUID
    Revoke(revoke::RevokeTokenArgs),
}

impl TokenCommand {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            TokenSubcommand::Create(args) => args.run().await,
            TokenSubcommand::List(args) => args.run().await,
            TokenSubcommand::Revoke(args) => args.run().await,
        }
    }
}

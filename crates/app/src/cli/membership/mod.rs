use clap::{Args, Subcommand};

mod grant;
mod list;

#[derive(Debug, Args)]
pub(crate) struct MembershipCommand {
    #[command(subcommand)]
    command: MembershipSubcommand,
}

#[derive(Debug, Subcommand)]
enum MembershipSubcommand {
    /// Give a user a role on a tenant
    Grant(grant::GrantMembershipArgs),

    /// Show every tenant a user can act on
    List(list::ListMembershipsArgs),
}

impl MembershipCommand {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            MembershipSubcommand::Grant(args) => args.run().await,
            MembershipSubcommand::List(args) => args.run().await,
        }
    }
}

use clap::Args;
use innkeep_app::domain::memberships::{MembershipsService, PgMembershipsService};
use uuid::Uuid;

use crate::cli;

#[derive(Debug, Args)]
pub(crate) struct ListMembershipsArgs {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// User whose memberships to show
    #[arg(long)]
    user_uuid: Uuid,
}

impl ListMembershipsArgs {
    pub(crate) async fn run(self) -> Result<(), String> {
        let pool = cli::connect_pool(&self.database_url).await?;
        let service = PgMembershipsService::new(pool);

        let memberships = service
            .list_memberships_for_user(self.user_uuid.into())
            .await
            .map_err(|error| format!("could not list memberships: {error}"))?;

        if memberships.is_empty() {
            println!("user {} has no memberships", self.user_uuid);

            return Ok(());
        }

        for membership in memberships {
            println!(
                "{} {} on tenant {} (since {})",
                membership.uuid, membership.role, membership.tenant_uuid, membership.created_at
            );
        }

        Ok(())
    }
}

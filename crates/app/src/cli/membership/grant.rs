use clap::Args;
use innkeep_app::domain::memberships::{
    MembershipsService, PgMembershipsService,
    data::NewMembership,
    records::{MembershipRole, MembershipUuid},
};
use uuid::Uuid;

use crate::cli;

#[derive(Debug, Args)]
pub(crate) struct GrantMembershipArgs {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Tenant the user is being given access to
    #[arg(long)]
    tenant_uuid: Uuid,

    /// User receiving the role
    #[arg(long)]
    user_uuid: Uuid,

    /// OWNER or STAFF
    #[arg(long)]
    role: String,
}

impl GrantMembershipArgs {
    pub(crate) async fn run(self) -> Result<(), String> {
        let role = self
            .role
            .parse::<MembershipRole>()
            .map_err(|_| format!("unknown role `{}`, expected OWNER or STAFF", self.role))?;

        let pool = cli::connect_pool(&self.database_url).await?;
        let service = PgMembershipsService::new(pool);

        let membership = service
            .grant_membership(NewMembership {
                uuid: MembershipUuid::new(),
                tenant_uuid: self.tenant_uuid.into(),
                user_uuid: self.user_uuid.into(),
                role,
            })
            .await
            .map_err(|error| format!("could not grant membership: {error}"))?;

        println!(
            "granted {} on tenant {} to user {}",
            membership.role, membership.tenant_uuid, membership.user_uuid
        );
        println!("membership_uuid: {}", membership.uuid);

        Ok(())
    }
}

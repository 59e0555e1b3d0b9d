use clap::Args;
use innkeep_app::domain::tenants::{
    PgTenantsService, TenantsService, data::NewTenant, records::TenantUuid,
};
use uuid::Uuid;

use crate::cli;

#[derive(Debug, Args)]
pub(crate) struct CreateTenantArgs {
    /// Display name of the property
    #[arg(long)]
    name: String,

    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Fixed tenant UUID, minted when omitted
    #[arg(long)]
    tenant_uuid: Option<Uuid>,
}

impl CreateTenantArgs {
    pub(crate) async fn run(self) -> Result<(), String> {
        let pool = cli::connect_pool(&self.database_url).await?;
        let service = PgTenantsService::new(pool);

        let uuid = self
            .tenant_uuid
            .map_or_else(TenantUuid::new, TenantUuid::from_uuid);

        let tenant = service
            .create_tenant(NewTenant {
                uuid,
                name: self.name,
            })
            .await
            .map_err(|error| format!("could not create tenant: {error}"))?;

        println!("created tenant {}", tenant.uuid);
        println!("name: {}", tenant.name);

        Ok(())
    }
}

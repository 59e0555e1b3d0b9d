use clap::Args;
use innkeep_app::auth::PgAuthService;
use uuid::Uuid;

use crate::cli;

#[derive(Debug, Args)]
pub(crate) struct RevokeTokenArgs {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// UUID of the token to deactivate
    #[arg(long)]
    token_uuid: Uuid,
}

impl RevokeTokenArgs {
    pub(crate) async fn run(self) -> Result<(), String> {
        let pool = cli::connect_pool(&self.database_url).await?;
        let service = PgAuthService::new(pool);

        let revoked = service
            .revoke_api_token(self.token_uuid)
            .await
            .map_err(|error| format!("could not revoke token: {error}"))?;

        if revoked {
            println!("token {} revoked", self.token_uuid);
        } else {
            println!(
                "token {} was already revoked or does not exist",
                self.token_uuid
            );
        }

        Ok(())
    }
}

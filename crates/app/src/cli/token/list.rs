use clap::Args;
use innkeep_app::auth::{ApiTokenMetadata, PgAuthService};
use jiff::Timestamp;
use uuid::Uuid;

use crate::cli;

#[derive(Debug, Args)]
pub(crate) struct ListTokensArgs {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// User whose tokens to show
    #[arg(long)]
    user_uuid: Uuid,
}

impl ListTokensArgs {
    pub(crate) async fn run(self) -> Result<(), String> {
        let pool = cli::connect_pool(&self.database_url).await?;
        let service = PgAuthService::new(pool);

        let tokens = service
            .list_api_tokens(self.user_uuid.into())
            .await
            .map_err(|error| format!("could not list tokens: {error}"))?;

        if tokens.is_empty() {
            println!("user {} has no tokens", self.user_uuid);

            return Ok(());
        }

        for token in tokens {
            print_token(&token);
        }

        Ok(())
    }
}

fn print_token(token: &ApiTokenMetadata) {
    let state = match (token.revoked_at, token.expires_at) {
        (Some(revoked_at), _) => format!("revoked {revoked_at}"),
        (None, Some(expires_at)) if expires_at <= Timestamp::now() => {
            format!("expired {expires_at}")
        }
        (None, Some(expires_at)) => format!("active, expires {expires_at}"),
        (None, None) => "active".to_string(),
    };

    println!("token {} (v{})", token.uuid, token.version.as_i16());
    println!("  created_at: {}", token.created_at);
    println!(
        "  last_used_at: {}",
        token
            .last_used_at
            .map_or_else(|| "never".to_string(), |value| value.to_string())
    );
    println!("  state: {state}");
    println!();
}

use clap::Args;
use innkeep_app::auth::PgAuthService;
use jiff::Timestamp;
use uuid::Uuid;

use crate::cli;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// User the token authenticates as
    #[arg(long)]
    user_uuid: Uuid,

    /// Expiry as an RFC 3339 timestamp, non-expiring when omitted
    #[arg(long)]
    expires_at: Option<String>,
}

impl CreateTokenArgs {
    pub(crate) async fn run(self) -> Result<(), String> {
        let expires_at = parse_expiry(self.expires_at.as_deref())?;

        let pool = cli::connect_pool(&self.database_url).await?;
        let service = PgAuthService::new(pool);

        let issued = service
            .issue_api_token(self.user_uuid.into(), expires_at)
            .await
            .map_err(|error| format!("could not issue token: {error}"))?;

        println!(
            "issued token {} (v{}) for user {}",
            issued.metadata.uuid,
            issued.metadata.version.as_i16(),
            issued.metadata.user_uuid
        );

        if let Some(expires_at) = issued.metadata.expires_at {
            println!("expires_at: {expires_at}");
        }

        println!("api_token: {}", issued.token);
        println!("the raw token is shown this once and cannot be recovered");

        Ok(())
    }
}

fn parse_expiry(raw: Option<&str>) -> Result<Option<Timestamp>, String> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let expires_at = raw
        .parse::<Timestamp>()
        .map_err(|error| format!("invalid expires-at timestamp: {error}"))?;

    if expires_at <= Timestamp::now() {
        return Err("expires-at must be in the future".to_string());
    }

    Ok(Some(expires_at))
}

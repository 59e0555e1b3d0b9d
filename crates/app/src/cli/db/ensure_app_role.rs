use clap::Args;
use sqlx::{Postgres, Transaction, query, query_scalar};

use crate::cli;

/// Role flags the API role must run with. NOBYPASSRLS is the one that
/// matters; the rest keep the role unprivileged.
const ROLE_FLAGS: &str = "NOSUPERUSER NOCREATEDB NOCREATEROLE NOREPLICATION NOBYPASSRLS";

#[derive(Debug, Args)]
pub(crate) struct EnsureAppRoleArgs {
    /// Administrative `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Name of the runtime role
    #[arg(long, default_value = "innkeep_app")]
    role_name: String,

    /// Password to set on the role
    #[arg(long, env = "APP_DB_PASSWORD", hide_env_values = true)]
    password: String,
}

impl EnsureAppRoleArgs {
    pub(crate) async fn run(self) -> Result<(), String> {
        if self.role_name.trim().is_empty() {
            return Err("role-name cannot be empty".to_string());
        }

        // The command always (re)sets the password, so an empty one is a
        // mistake rather than a request to keep the old value.
        if self.password.trim().is_empty() {
            return Err("a password is required".to_string());
        }

        // Needs an administrative connection; the runtime role cannot
        // CREATE/ALTER ROLE or manage privileges.
        let pool = cli::connect_pool(&self.database_url).await?;

        let mut tx = pool
            .begin()
            .await
            .map_err(|error| format!("could not start transaction: {error}"))?;

        // Role names and passwords cannot be bound as statement parameters,
        // so they are quoted server-side before interpolation.
        let role_ident = quoted(&mut tx, "SELECT quote_ident($1)", &self.role_name)
            .await
            .map_err(|error| format!("could not quote role name: {error}"))?;

        let password_lit = quoted(&mut tx, "SELECT quote_literal($1)", &self.password)
            .await
            .map_err(|error| format!("could not quote password: {error}"))?;

        let role_exists: bool =
            query_scalar("SELECT EXISTS (SELECT 1 FROM pg_roles WHERE rolname = $1)")
                .bind(&self.role_name)
                .fetch_one(&mut *tx)
                .await
                .map_err(|error| format!("could not check for existing role: {error}"))?;

        // Reapply the flags on every run; a role that drifted to BYPASSRLS
        // would silently disable tenant isolation.
        let verb = if role_exists { "ALTER" } else { "CREATE" };

        query(&format!(
            "{verb} ROLE {role_ident} LOGIN PASSWORD {password_lit} {ROLE_FLAGS}"
        ))
        .execute(&mut *tx)
        .await
        .map_err(|error| format!("could not {} role: {error}", verb.to_lowercase()))?;

        let database_ident: String = query_scalar("SELECT quote_ident(current_database())")
            .fetch_one(&mut *tx)
            .await
            .map_err(|error| format!("could not resolve database name: {error}"))?;

        for statement in grant_statements(&database_ident, &role_ident) {
            query(&statement)
                .execute(&mut *tx)
                .await
                .map_err(|error| format!("grant failed ({statement}): {error}"))?;
        }

        tx.commit()
            .await
            .map_err(|error| format!("could not commit: {error}"))?;

        println!("role {} is ready", self.role_name);
        println!("grants applied on {database_ident} and schema public");

        Ok(())
    }
}

async fn quoted(
    tx: &mut Transaction<'static, Postgres>,
    quote_sql: &str,
    value: &str,
) -> Result<String, sqlx::Error> {
    query_scalar(quote_sql)
        .bind(value)
        .fetch_one(&mut **tx)
        .await
}

/// Privileges for existing objects plus default privileges for future
/// objects in the public schema.
fn grant_statements(database_ident: &str, role_ident: &str) -> [String; 6] {
    [
        format!("GRANT CONNECT ON DATABASE {database_ident} TO {role_ident}"),
        format!("GRANT USAGE ON SCHEMA public TO {role_ident}"),
        format!(
            "GRANT SELECT, INSERT, UPDATE, DELETE ON ALL TABLES IN SCHEMA public TO {role_ident}"
        ),
        format!("GRANT USAGE, SELECT, UPDATE ON ALL SEQUENCES IN SCHEMA public TO {role_ident}"),
        format!(
            "ALTER DEFAULT PRIVILEGES IN SCHEMA public GRANT SELECT, INSERT, UPDATE, DELETE ON TABLES TO {role_ident}"
        ),
        format!(
            "ALTER DEFAULT PRIVILEGES IN SCHEMA public GRANT USAGE, SELECT, UPDATE ON SEQUENCES TO {role_ident}"
        ),
    ]
}

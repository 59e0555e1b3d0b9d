//! Connection management and the tenant transaction boundary.
//!
//! Tenant isolation is enforced by Postgres row level security. The
//! policies read the `app.current_tenant_uuid` setting, so every
//! tenant-scoped unit of work must run inside a transaction opened by
//! [`Db::begin_tenant_transaction`], which pins that setting first.

use sqlx::{PgPool, Postgres, Transaction, query, query_scalar};

use crate::domain::tenants::records::TenantUuid;

// set_config(..., true) scopes the value to the transaction, so it cannot
// leak to other work on the pooled connection.
const SET_TENANT_CONTEXT_SQL: &str =
    "SELECT set_config('app.current_tenant_uuid', $1::text, true)";

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Open a transaction whose queries see only the given tenant's rows.
    ///
    /// # Errors
    ///
    /// Returns an error when the transaction cannot be started or the
    /// tenant setting cannot be applied.
    pub async fn begin_tenant_transaction(
        &self,
        tenant: TenantUuid,
    ) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(SET_TENANT_CONTEXT_SQL)
            .bind(tenant.into_uuid())
            .execute(&mut *tx)
            .await?;

        Ok(tx)
    }
}

/// Open a connection pool against `database_url`.
///
/// # Errors
///
/// Returns an error when the server cannot be reached.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Check whether the connected role is subject to row-level security.
///
/// Superusers and `BYPASSRLS` roles silently ignore tenant policies, which
/// would turn every query into a cross-tenant query, so callers should
/// refuse to serve traffic when this returns `false`.
///
/// # Errors
///
/// Returns an error when the role lookup fails.
pub async fn rls_enforced_for_current_role(pool: &PgPool) -> Result<bool, sqlx::Error> {
    query_scalar("SELECT NOT (rolsuper OR rolbypassrls) FROM pg_roles WHERE rolname = current_user")
        .fetch_one(pool)
        .await
}

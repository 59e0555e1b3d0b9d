//! Memberships Repository
//!
//! Memberships are control-plane rows. Tenant scopes are resolved from them,
//! so they sit outside row-level security and are queried straight on the
//! pool, before any tenant context exists.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    auth::UserUuid,
    domain::{
        memberships::{
            data::NewMembership,
            records::{MembershipRecord, MembershipUuid},
        },
        tenants::records::TenantUuid,
    },
};

const CREATE_MEMBERSHIP_SQL: &str = include_str!("sql/create_membership.sql");
const FIND_MEMBERSHIP_SQL: &str = include_str!("sql/find_membership.sql");
const LIST_MEMBERSHIPS_FOR_USER_SQL: &str = include_str!("sql/list_memberships_for_user.sql");

#[derive(Debug, Clone)]
/// PostgreSQL-backed memberships repository.
pub(crate) struct PgMembershipsRepository {
    pool: PgPool,
}

impl PgMembershipsRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_membership(
        &self,
        membership: NewMembership,
    ) -> Result<MembershipRecord, sqlx::Error> {
        query_as::<Postgres, MembershipRecord>(CREATE_MEMBERSHIP_SQL)
            .bind(membership.uuid.into_uuid())
            .bind(membership.tenant_uuid.into_uuid())
            .bind(membership.user_uuid.into_uuid())
            .bind(membership.role.as_str())
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn find_membership(
        &self,
        user: UserUuid,
        tenant: TenantUuid,
    ) -> Result<Option<MembershipRecord>, sqlx::Error> {
        query_as::<Postgres, MembershipRecord>(FIND_MEMBERSHIP_SQL)
            .bind(user.into_uuid())
            .bind(tenant.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn list_memberships_for_user(
        &self,
        user: UserUuid,
    ) -> Result<Vec<MembershipRecord>, sqlx::Error> {
        query_as::<Postgres, MembershipRecord>(LIST_MEMBERSHIPS_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_all(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for MembershipRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let role = row
            .try_get::<String, _>("role")?
            .parse()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "role".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: MembershipUuid::from_uuid(row.try_get("uuid")?),
            tenant_uuid: TenantUuid::from_uuid(row.try_get("tenant_uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            role,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

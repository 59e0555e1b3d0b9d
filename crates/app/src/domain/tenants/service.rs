//! Tenant onboarding and lookup.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::tenants::{
    data::NewTenant,
    errors::TenantsServiceError,
    records::{TenantRecord, TenantUuid},
    repository::PgTenantsRepository,
};

#[derive(Debug, Clone)]
pub struct PgTenantsService {
    repository: PgTenantsRepository,
}

impl PgTenantsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgTenantsRepository::new(pool),
        }
    }
}

#[async_trait]
impl TenantsService for PgTenantsService {
    async fn create_tenant(&self, tenant: NewTenant) -> Result<TenantRecord, TenantsServiceError> {
        self.repository
            .create_tenant(tenant)
            .await
            .map_err(Into::into)
    }

    async fn get_tenant(&self, uuid: TenantUuid) -> Result<TenantRecord, TenantsServiceError> {
        self.repository
            .find_tenant(uuid)
            .await?
            .ok_or(TenantsServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
/// Control plane operations on tenant rows.
pub trait TenantsService: Send + Sync {
    /// Insert a tenant row.
    async fn create_tenant(&self, tenant: NewTenant) -> Result<TenantRecord, TenantsServiceError>;

    /// Fetch a live tenant. Soft-deleted tenants read as missing.
    async fn get_tenant(&self, uuid: TenantUuid) -> Result<TenantRecord, TenantsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::{domain::tenants::records::TenantUuid, test::TestContext};

    use super::*;

    fn onboard(uuid: TenantUuid, name: &str) -> NewTenant {
        NewTenant {
            uuid,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn onboarded_tenant_round_trips() -> TestResult {
        let ctx = TestContext::new().await;
        let svc = PgTenantsService::new(ctx.db.pool().clone());

        let uuid = TenantUuid::new();

        svc.create_tenant(onboard(uuid, "Seaview Lodge")).await?;

        let tenant = svc.get_tenant(uuid).await?;

        assert_eq!(tenant.uuid, uuid);
        assert_eq!(tenant.name, "Seaview Lodge");
        assert!(tenant.deleted_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn onboarding_stamps_creation_time() -> TestResult {
        let ctx = TestContext::new().await;
        let svc = PgTenantsService::new(ctx.db.pool().clone());

        let before = Timestamp::now();

        let tenant = svc
            .create_tenant(onboard(TenantUuid::new(), "Clocktower Inn"))
            .await?;

        let after = Timestamp::now();

        assert!((before..=after).contains(&tenant.created_at));

        Ok(())
    }

    #[tokio::test]
    async fn reusing_a_tenant_uuid_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let svc = PgTenantsService::new(ctx.db.pool().clone());

        let uuid = TenantUuid::new();

        svc.create_tenant(onboard(uuid, "Seaview Lodge")).await?;

        let result = svc.create_tenant(onboard(uuid, "Seaview Lodge II")).await;

        assert!(
            matches!(result, Err(TenantsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn properties_may_share_a_name() -> TestResult {
        let ctx = TestContext::new().await;
        let svc = PgTenantsService::new(ctx.db.pool().clone());

        // Two franchises can trade under the same name; only the UUID is
        // unique.
        svc.create_tenant(onboard(TenantUuid::new(), "The Crown"))
            .await?;
        svc.create_tenant(onboard(TenantUuid::new(), "The Crown"))
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn lookup_of_unknown_tenant_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let svc = PgTenantsService::new(ctx.db.pool().clone());

        let result = svc.get_tenant(TenantUuid::new()).await;

        assert!(
            matches!(result, Err(TenantsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}

//! Memberships service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::{
    auth::UserUuid,
    domain::{
        memberships::{
            data::NewMembership,
            errors::{MembershipsServiceError, ScopeError},
            records::{MembershipRecord, TenantScope},
            repository::PgMembershipsRepository,
        },
        tenants::records::TenantUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgMembershipsService {
    repository: PgMembershipsRepository,
}

impl PgMembershipsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgMembershipsRepository::new(pool),
        }
    }
}

#[async_trait]
impl MembershipsService for PgMembershipsService {
    async fn resolve_scope(
        &self,
        user: UserUuid,
        claimed_tenant: Option<TenantUuid>,
    ) -> Result<TenantScope, ScopeError> {
        let Some(tenant) = claimed_tenant else {
            return Err(ScopeError::MissingTenantContext);
        };

        let membership = self
            .repository
            .find_membership(user, tenant)
            .await
            .map_err(ScopeError::Sql)?;

        // The scope carries the stored tenant and role, never the claim.
        membership
            .map(|m| TenantScope {
                tenant: m.tenant_uuid,
                role: m.role,
            })
            .ok_or(ScopeError::Forbidden)
    }

    async fn grant_membership(
        &self,
        membership: NewMembership,
    ) -> Result<MembershipRecord, MembershipsServiceError> {
        self.repository
            .create_membership(membership)
            .await
            .map_err(Into::into)
    }

    async fn list_memberships_for_user(
        &self,
        user: UserUuid,
    ) -> Result<Vec<MembershipRecord>, MembershipsServiceError> {
        self.repository
            .list_memberships_for_user(user)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
/// Membership and tenant-scope operations.
pub trait MembershipsService: Send + Sync {
    /// Resolves the validated tenant scope for an authenticated user.
    ///
    /// A missing claim fails with [`ScopeError::MissingTenantContext`]; a
    /// claim the user holds no membership for fails with
    /// [`ScopeError::Forbidden`], whether or not the tenant exists.
    async fn resolve_scope(
        &self,
        user: UserUuid,
        claimed_tenant: Option<TenantUuid>,
    ) -> Result<TenantScope, ScopeError>;

    /// Grants a user a role within a tenant.
    async fn grant_membership(
        &self,
        membership: NewMembership,
    ) -> Result<MembershipRecord, MembershipsServiceError>;

    /// Lists every membership a user holds, oldest first.
    async fn list_memberships_for_user(
        &self,
        user: UserUuid,
    ) -> Result<Vec<MembershipRecord>, MembershipsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::memberships::records::{MembershipRole, MembershipUuid},
        test::TestContext,
    };

    use super::*;

    #[tokio::test]
    async fn grant_membership_returns_correct_row() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let membership = ctx
            .memberships
            .grant_membership(NewMembership {
                uuid: MembershipUuid::new(),
                tenant_uuid: ctx.tenant_uuid,
                user_uuid: user,
                role: MembershipRole::Staff,
            })
            .await?;

        assert_eq!(membership.tenant_uuid, ctx.tenant_uuid);
        assert_eq!(membership.user_uuid, user);
        assert_eq!(membership.role, MembershipRole::Staff);

        Ok(())
    }

    #[tokio::test]
    async fn grant_membership_twice_for_same_pair_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        ctx.memberships
            .grant_membership(NewMembership {
                uuid: MembershipUuid::new(),
                tenant_uuid: ctx.tenant_uuid,
                user_uuid: user,
                role: MembershipRole::Staff,
            })
            .await?;

        let result = ctx
            .memberships
            .grant_membership(NewMembership {
                uuid: MembershipUuid::new(),
                tenant_uuid: ctx.tenant_uuid,
                user_uuid: user,
                role: MembershipRole::Owner,
            })
            .await;

        assert!(
            matches!(result, Err(MembershipsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn grant_membership_unknown_tenant_returns_invalid_reference() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .memberships
            .grant_membership(NewMembership {
                uuid: MembershipUuid::new(),
                tenant_uuid: TenantUuid::new(),
                user_uuid: UserUuid::new(),
                role: MembershipRole::Staff,
            })
            .await;

        assert!(
            matches!(result, Err(MembershipsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn resolve_scope_returns_stored_tenant_and_role() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        ctx.grant_membership(user, ctx.tenant_uuid, MembershipRole::Owner)
            .await?;

        let scope = ctx
            .memberships
            .resolve_scope(user, Some(ctx.tenant_uuid))
            .await?;

        assert_eq!(scope.tenant, ctx.tenant_uuid);
        assert_eq!(scope.role, MembershipRole::Owner);

        Ok(())
    }

    #[tokio::test]
    async fn resolve_scope_without_claimed_tenant_returns_missing_tenant_context() {
        let ctx = TestContext::new().await;

        let result = ctx
            .memberships
            .resolve_scope(UserUuid::new(), None)
            .await;

        assert!(
            matches!(result, Err(ScopeError::MissingTenantContext)),
            "expected MissingTenantContext, got {result:?}"
        );
    }

    #[tokio::test]
    async fn resolve_scope_for_non_member_returns_forbidden() {
        let ctx = TestContext::new().await;

        // User authenticated fine but was never granted access to this tenant
        let result = ctx
            .memberships
            .resolve_scope(UserUuid::new(), Some(ctx.tenant_uuid))
            .await;

        assert!(
            matches!(result, Err(ScopeError::Forbidden)),
            "expected Forbidden, got {result:?}"
        );
    }

    #[tokio::test]
    async fn resolve_scope_for_nonexistent_tenant_returns_forbidden() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        ctx.grant_membership(user, ctx.tenant_uuid, MembershipRole::Staff)
            .await?;

        // Same error as a real tenant without access, so UUID probing
        // reveals nothing
        let result = ctx
            .memberships
            .resolve_scope(user, Some(TenantUuid::new()))
            .await;

        assert!(
            matches!(result, Err(ScopeError::Forbidden)),
            "expected Forbidden, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn resolve_scope_membership_in_other_tenant_returns_forbidden() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let tenant_b = ctx.create_tenant("Tenant B").await;

        ctx.grant_membership(user, ctx.tenant_uuid, MembershipRole::Owner)
            .await?;

        let result = ctx.memberships.resolve_scope(user, Some(tenant_b)).await;

        assert!(
            matches!(result, Err(ScopeError::Forbidden)),
            "expected Forbidden, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_memberships_for_user_returns_all_granted() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let tenant_b = ctx.create_tenant("Tenant B").await;

        ctx.grant_membership(user, ctx.tenant_uuid, MembershipRole::Owner)
            .await?;
        ctx.grant_membership(user, tenant_b, MembershipRole::Staff)
            .await?;

        let memberships = ctx.memberships.list_memberships_for_user(user).await?;

        assert_eq!(memberships.len(), 2);

        let tenants: Vec<TenantUuid> = memberships.iter().map(|m| m.tenant_uuid).collect();

        assert!(tenants.contains(&ctx.tenant_uuid));
        assert!(tenants.contains(&tenant_b));

        Ok(())
    }

    #[tokio::test]
    async fn list_memberships_for_unknown_user_is_empty() -> TestResult {
        let ctx = TestContext::new().await;

        let memberships = ctx
            .memberships
            .list_memberships_for_user(UserUuid::new())
            .await?;

        assert!(memberships.is_empty());

        Ok(())
    }
}

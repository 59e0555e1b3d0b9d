//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use innkeep_app::{auth::UserUuid, domain::memberships::records::TenantScope};

const USER_UUID_KEY: &str = "auth.user_uuid";
const TENANT_SCOPE_KEY: &str = "tenancy.scope";

/// Helpers for moving request identity through the depot and mapping
/// extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Stores the authenticated user for downstream middleware.
    fn insert_user_uuid(&mut self, user: UserUuid);

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError>;

    /// Stores the validated tenant scope for downstream handlers.
    fn insert_tenant_scope(&mut self, scope: TenantScope);

    fn tenant_scope_or_401(&self) -> Result<TenantScope, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.insert(USER_UUID_KEY, user);
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError> {
        self.get::<UserUuid>(USER_UUID_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }

    fn insert_tenant_scope(&mut self, scope: TenantScope) {
        self.insert(TENANT_SCOPE_KEY, scope);
    }

    fn tenant_scope_or_401(&self) -> Result<TenantScope, StatusError> {
        self.get::<TenantScope>(TENANT_SCOPE_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }
}

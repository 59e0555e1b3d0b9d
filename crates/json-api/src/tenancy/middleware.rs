//! Tenant scope middleware.
//!
//! Runs after bearer auth. The client claims a hotel through the
//! `x-hotel-id` header; the claim only becomes a scope once a stored
//! membership for the authenticated user confirms it.

use std::sync::Arc;

use innkeep_app::domain::{
    memberships::{ScopeError, records::TenantScope},
    tenants::records::TenantUuid,
};
use salvo::prelude::*;
use tracing::error;
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TENANT_HEADER: &str = "x-hotel-id";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    match resolve_scope(req, depot).await {
        Ok(scope) => {
            depot.insert_tenant_scope(scope);

            ctrl.call_next(req, depot, res).await;
        }
        Err(status) => res.render(status),
    }
}

/// Turn the header claim plus the authenticated user into a scope.
async fn resolve_scope(req: &Request, depot: &Depot) -> Result<TenantScope, StatusError> {
    let user = depot.user_uuid_or_401()?;

    let claimed = claimed_tenant(req)
        .map_err(|_invalid| StatusError::bad_request().brief("Invalid x-hotel-id header"))?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .memberships
        .resolve_scope(user, claimed)
        .await
        .map_err(|error| match error {
            ScopeError::MissingTenantContext => {
                StatusError::bad_request().brief("Missing x-hotel-id header")
            }
            ScopeError::Forbidden => {
                StatusError::forbidden().brief("No access to the requested hotel")
            }
            ScopeError::Sql(source) => {
                error!("failed to resolve tenant scope: {source}");

                StatusError::internal_server_error()
            }
        })
}

fn claimed_tenant(req: &Request) -> Result<Option<TenantUuid>, uuid::Error> {
    let Some(value) = req.header::<String>(TENANT_HEADER) else {
        return Ok(None);
    };

    Ok(Some(Uuid::parse_str(value.trim())?.into()))
}

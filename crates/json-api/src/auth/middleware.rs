//! Bearer token middleware.
//!
//! Every API route sits behind this handler; requests without a valid
//! token never reach tenant resolution.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use innkeep_app::auth::{AuthServiceError, UserUuid};

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    match authenticate(req, depot).await {
        Ok(user) => {
            depot.insert_user_uuid(user);

            ctrl.call_next(req, depot, res).await;
        }
        Err(status) => res.render(status),
    }
}

/// Resolve the request's bearer token to a user.
///
/// Every token-shaped failure maps to the same 401 so the response does
/// not reveal whether a token exists, expired, or was revoked.
async fn authenticate(req: &Request, depot: &Depot) -> Result<UserUuid, StatusError> {
    let token =
        bearer_token(req).ok_or_else(|| StatusError::unauthorized().brief("Bearer token required"))?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .auth
        .authenticate_bearer(token)
        .await
        .map_err(|error| match error {
            AuthServiceError::NotFound => {
                StatusError::unauthorized().brief("Unknown or revoked API token")
            }
            AuthServiceError::Sql(source) => {
                error!("token lookup failed: {source}");

                StatusError::internal_server_error()
            }
        })
}

/// Pull the token out of an `Authorization: Bearer ...` header.
fn bearer_token(req: &Request) -> Option<&str> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, rest) = header.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = rest.trim();

    (!token.is_empty()).then_some(token)
}

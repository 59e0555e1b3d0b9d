//! Request logging middleware.
//!
//! Every request gets an id (echoed back from `x-request-id` when the
//! caller sent one), a tracing span covering the handler chain, and a
//! completion log line levelled by status class. Requests that outlive
//! the configured threshold are additionally logged at WARN.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use salvo::{
    Request, handler,
    http::{StatusCode, header::HeaderValue},
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::Instrument as _;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::ServerConfig;

const REQUEST_ID_HEADER: &str = "x-request-id";
const REQUEST_ID_DEPOT_KEY: &str = "request_id";

static SLOW_REQUEST_THRESHOLD_MS: AtomicU64 = AtomicU64::new(1_000);

/// Store the slow-request threshold where the handler can read it without
/// a depot lookup per request.
pub(super) fn configure(config: &ServerConfig) {
    SLOW_REQUEST_THRESHOLD_MS.store(
        config.requests.slow_request_threshold_ms,
        Ordering::Relaxed,
    );
}

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let started = Instant::now();
    let request_id = request_id_for(req);

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());
    echo_request_id(res, &request_id);

    let route = route_pattern(req.uri().path());

    let span = tracing::info_span!(
        parent: None,
        "http.request",
        request_id = %request_id,
        method = %req.method(),
        route = %route,
        path = %req.uri().path(),
        remote_addr = %req.remote_addr(),
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let status = res.status_code.unwrap_or(StatusCode::OK);
    let duration_ms = started.elapsed().as_millis();

    span.record("status", status.as_u16());
    span.record("duration_ms", duration_ms);

    span.in_scope(|| log_outcome(status, duration_ms));
}

/// Method, route, and request id all live on the current span, so the
/// event itself only carries what the span does not.
fn log_outcome(status: StatusCode, duration_ms: u128) {
    if status.is_server_error() {
        error!(status = status.as_u16(), duration_ms, "request failed");
    } else if status.is_client_error() {
        warn!(status = status.as_u16(), duration_ms, "request rejected");
    } else {
        info!(status = status.as_u16(), duration_ms, "request completed");
    }

    let threshold_ms = u128::from(SLOW_REQUEST_THRESHOLD_MS.load(Ordering::Relaxed));

    if duration_ms > threshold_ms {
        warn!(duration_ms, threshold_ms, "slow request");
    }
}

fn request_id_for(req: &Request) -> String {
    req.header::<String>(REQUEST_ID_HEADER)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

fn echo_request_id(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(_) => warn!(request_id, "request id is not a valid header value"),
    }
}

/// Replace UUID path segments with `{uuid}` so log lines group by route
/// rather than by individual resource.
fn route_pattern(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if Uuid::try_parse(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::route_pattern;

    #[test]
    fn route_pattern_masks_uuid_segments() {
        let path = format!("/bookings/{}", Uuid::now_v7());

        assert_eq!(route_pattern(&path), "/bookings/{uuid}");
    }

    #[test]
    fn route_pattern_masks_every_uuid() {
        let path = format!("/rooms/{}/bookings/{}", Uuid::now_v7(), Uuid::now_v7());

        assert_eq!(route_pattern(&path), "/rooms/{uuid}/bookings/{uuid}");
    }

    #[test]
    fn route_pattern_keeps_literal_paths() {
        assert_eq!(route_pattern("/healthcheck"), "/healthcheck");
        assert_eq!(route_pattern("/"), "/");
    }
}

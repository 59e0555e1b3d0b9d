//! Innkeep JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use innkeep_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod bookings;
mod config;
mod customers;
mod extensions;
mod healthcheck;
mod observability;
mod payments;
mod reports;
mod rooms;
mod router;
mod shutdown;
mod state;
mod tenancy;
#[cfg(test)]
mod test_helpers;

/// Boot the Innkeep JSON API server.
///
/// # Panics
///
/// Panics when the listener cannot bind its address.
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "tracing is not up yet, stderr is the only channel"
        )]
        {
            eprintln!("could not parse configuration: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "subscriber install failed, stderr is the only channel"
        )]
        {
            eprintln!("could not initialise logging: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.bind_addr();

    info!("listening on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::from_database_url(&config.database.database_url).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .hoop(observability::request_logging)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(router::app_router());

    let doc = OpenApi::new("Innkeep API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);
    let handle = server.handle();

    // The signal listener owns a server handle so it can ask for a
    // graceful stop from outside the accept loop.
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("could not watch for shutdown signals: {error}");
        }
    });

    server.serve(router).await;
}

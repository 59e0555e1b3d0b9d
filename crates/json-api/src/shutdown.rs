//! Shutdown signal handling.
//!
//! The server drains in-flight requests when the process receives Ctrl+C
//! or, on Unix, SIGTERM. Draining is capped so a wedged connection cannot
//! hold the process open past the grace period.

use std::{io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;

const GRACE_PERIOD: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub(crate) enum ShutdownError {
    #[error("could not install the Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("could not install the SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Block until a stop signal arrives, then ask the server for a graceful
/// stop bounded by [`GRACE_PERIOD`].
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownError> {
    let signal = wait_for_signal().await?;

    tracing::info!("{signal} received, draining in-flight requests");

    handle.stop_graceful(GRACE_PERIOD);

    Ok(())
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str, ShutdownError> {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownError::SigTerm)?;

    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownError::CtrlC)?;

            Ok("ctrl_c")
        }
        _ = sigterm.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<&'static str, ShutdownError> {
    signal::ctrl_c().await.map_err(ShutdownError::CtrlC)?;

    Ok("ctrl_c")
}

//! Tracing setup and request logging.

use thiserror::Error;

mod logging;
mod request;

pub(crate) use request::request_logging;

use crate::config::ServerConfig;

/// Failures while installing the tracing stack.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    /// A global subscriber was already installed.
    #[error("could not install tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global tracing subscriber and apply request log settings.
pub(crate) fn init(config: &ServerConfig) -> Result<(), ObservabilityError> {
    request::configure(config);

    logging::init_subscriber(&config.logging)
}

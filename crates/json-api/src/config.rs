//! Runtime configuration for the API binary.
//!
//! Every setting is a clap flag with an environment-variable fallback, so
//! the binary behaves the same under docker compose, systemd, and a bare
//! `cargo run`. A `.env` file in the working directory is folded into the
//! environment before parsing.

use clap::{Args, Parser, ValueEnum};

/// Innkeep JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "innkeep-json", about = "Innkeep JSON API Server", long_about = None)]
pub struct ServerConfig {
    #[command(flatten)]
    pub listener: ListenerConfig,

    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(flatten)]
    pub requests: RequestConfig,

    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Parse configuration from CLI arguments and the environment.
    ///
    /// # Errors
    ///
    /// Returns the clap error when a flag or environment value does not
    /// parse.
    pub fn load() -> Result<Self, clap::Error> {
        // A missing .env file is not an error; the real environment and
        // flags still apply.
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Address the HTTP listener binds to, as `host:port`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.listener.host, self.listener.port)
    }
}

/// Where the HTTP listener binds.
#[derive(Debug, Args)]
pub struct ListenerConfig {
    /// Interface to listen on
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "8707")]
    pub port: u16,
}

/// How log lines are emitted.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default tracing filter, overridden by RUST_LOG when set
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log line encoding
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log line encodings the subscriber can produce.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    /// Single human-readable line per event.
    Compact,

    /// One JSON object per line, for log shippers.
    Json,
}

/// Request handling thresholds.
#[derive(Debug, Args)]
pub struct RequestConfig {
    /// Requests slower than this are logged at WARN
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,
}

/// Connection settings for the application database.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

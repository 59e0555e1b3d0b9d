//! Operator command line entry point.

use std::process;

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() {
    // Flags and real environment variables win over .env entries.
    _ = dotenvy::dotenv();

    if let Err(error) = cli::Cli::parse().run().await {
        eprintln!("{error}");
        process::exit(1);
    }
}

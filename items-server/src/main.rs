//! items-server binary
//!
//! Loads `.env`, parses flags, sets up tracing and runs the server. A
//! startup failure (database unreachable, port taken, serverless mode
//! without the adapter) is logged once and exits with a non-zero status.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use items_server::config::Args;

mod tracing_setup;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // A missing .env file is fine; real deployments use the environment
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    tracing_setup::init(args.debug, args.mode)?;

    let (server, database) = args.into_config();
    tracing::info!(mode = ?server.mode, "Starting items-server");

    match items_server::start(&database, server).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::error!(error = %err, "items-server stopped");
            Ok(ExitCode::FAILURE)
        }
    }
}

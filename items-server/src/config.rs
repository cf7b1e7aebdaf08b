//! Process configuration: command-line flags with environment fallbacks.
//!
//! `main` loads `.env` (if present) before parsing, so every flag can also
//! come from the environment or a dotenv file.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;

use clap::Parser;

use crate::db::pool::{DatabaseConfig, DEFAULT_MAX_CONNECTIONS};
use crate::http::{RunMode, ServerConfig};

/// Command-line arguments for the items server
#[derive(Parser, Debug, Clone)]
#[command(name = "items-server", version, about = "REST API for the items table")]
pub struct Args {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum pooled database connections (at least 1)
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: NonZeroU32,

    /// Address to bind in listen mode
    #[arg(long, env = "BIND_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Listen on a socket, or hand requests over to a serverless runtime
    #[arg(long, env = "RUN_MODE", value_enum, default_value_t = RunMode::Listen)]
    pub mode: RunMode,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "CORS_PERMISSIVE")]
    pub cors_permissive: bool,

    /// Debug logging (unless RUST_LOG is set)
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Split into server and database settings.
    pub fn into_config(self) -> (ServerConfig, DatabaseConfig) {
        let server = ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            mode: self.mode,
            cors_permissive: self.cors_permissive,
        };
        let database = DatabaseConfig {
            url: self.database_url,
            max_connections: self.max_connections,
        };
        (server, database)
    }
}

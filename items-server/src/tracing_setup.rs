//! Console logging for items-server
//!
//! `RUST_LOG` wins when set. Otherwise the filter follows `--debug`, and
//! sqlx stays at `warn` so per-statement logs don't drown request traces.
//!
//! Under a serverless runtime the log stream is already timestamped and
//! not a terminal, so timestamps and ANSI colours are dropped there.

use anyhow::{anyhow, Result};
use items_server::http::RunMode;
use tracing_subscriber::EnvFilter;

const QUIET: &str = "items_server=info,tower_http=info,sqlx=warn";
const VERBOSE: &str = "items_server=debug,tower_http=debug,sqlx=warn";

fn default_directives(debug: bool) -> &'static str {
    if debug {
        VERBOSE
    } else {
        QUIET
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(debug: bool, mode: RunMode) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(debug)));
    let serverless = mode == RunMode::Serverless;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .with_ansi(!serverless)
        .compact();

    let installed = if serverless {
        builder.without_time().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_parse_and_keep_sqlx_quiet() {
        for debug in [false, true] {
            let directives = default_directives(debug);
            assert!(directives.contains("sqlx=warn"));
            assert!(EnvFilter::try_new(directives).is_ok());
        }
        assert!(default_directives(true).contains("items_server=debug"));
    }
}

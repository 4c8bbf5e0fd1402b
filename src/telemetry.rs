//! Logging setup for the CLI.
//!
//! Everything goes to stderr so stdout stays clean for page output. The
//! filter comes from `SEEDROUTE_LOG` when set, otherwise from the `-v` count.

use crate::config::{ENV_LOG, env_non_empty};
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8) -> Result<()> {
    let filter = match env_non_empty(ENV_LOG) {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::new(level_for_verbosity(verbosity)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_ladder() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }
}

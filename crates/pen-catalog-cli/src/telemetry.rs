//! Log subscriber setup for the `serve` command.
//!
//! Filter precedence: `--log-level`, then `RUST_LOG`, then the `-v` / `-q`
//! flags.

use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Directive used when neither `--log-level` nor `RUST_LOG` is set.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Build the filter for the given flags.
pub fn env_filter(verbose: u8, quiet: bool, log_level: Option<&str>) -> Result<EnvFilter, CliError> {
    if let Some(level) = log_level {
        return EnvFilter::try_new(level).map_err(|e| CliError::Config {
            message: format!("invalid log level '{level}': {e}"),
        });
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_directive(verbose, quiet)).map_err(|e| CliError::Config {
        message: e.to_string(),
    })
}

/// Install a global fmt subscriber writing to stderr.
pub fn init(verbose: u8, quiet: bool, log_level: Option<&str>) -> Result<(), CliError> {
    let filter = env_filter(verbose, quiet, log_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::Other(format!("failed to install log subscriber: {e}")))
}

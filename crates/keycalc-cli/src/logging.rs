//! Log setup
//!
//! Logs always go to stderr; stdout carries only the display.

use std::io::{self, IsTerminal};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{CliError, CliResult};

/// Builds the log filter from a directive string such as `warn` or
/// `keycalc=trace`
pub fn log_filter(directives: &str) -> CliResult<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| CliError::invalid_argument(format!("log filter '{directives}': {e}")))
}

/// Installs the global subscriber
pub fn init_logging(directives: &str, json: bool) -> CliResult<()> {
    let filter = log_filter(directives)?;

    let json_layer = json.then(|| fmt::layer().json().with_writer(io::stderr));
    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_target(true)
            .with_ansi(io::stderr().is_terminal())
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| CliError::config(format!("cannot install logger: {e}")))
}

//! keycalc CLI library
//!
//! Terminal front end for the keycalc expression engine: scripted runs from
//! `--keys` or stdin, and an interactive raw-mode session.

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
mod keys;
mod logging;
mod output;
mod runner;
mod terminal;

pub use commands::{Cli, ColorArg, FormatArg};
pub use config::{load_engine_config, parse_engine_config};
pub use error::{CliError, CliResult};
pub use keys::{script_key, script_keys, KeyInput};
pub use logging::{init_logging, log_filter};
pub use output::render_session;
pub use runner::{run_script, Session, Step};
pub use terminal::{run_interactive, TerminalDisplay};

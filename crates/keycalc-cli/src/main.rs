//! keycalc: keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! keycalc                          # Interactive session
//! keycalc --keys "2+2="            # Prints 4
//! keycalc --keys "1/3=" --trace    # One line per key
//! echo "6*7=" | keycalc            # Keys from stdin
//! ```

use clap::Parser;
use keycalc::EngineConfig;
use keycalc_cli::{
    init_logging, load_engine_config, render_session, run_interactive, run_script, Cli,
    CliResult,
};
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level, cli.log_json)?;
    cli.color.apply();

    let config = match &cli.config {
        Some(path) => load_engine_config(path)?,
        None => EngineConfig::default(),
    };

    let script = match cli.keys {
        Some(keys) => keys,
        None if io::stdin().is_terminal() => return run_interactive(config),
        None => {
            let mut keys = String::new();
            io::stdin().read_to_string(&mut keys)?;
            keys
        }
    };

    let session = run_script(&script, config);
    println!("{}", render_session(&session, cli.format, cli.trace)?);
    Ok(())
}

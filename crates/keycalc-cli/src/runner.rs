//! Scripted sessions

use keycalc::driver::Calculator;
use keycalc::EngineConfig;
use serde::Serialize;

use crate::keys::script_keys;

/// One key press and the display it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Key name as sent to the calculator
    pub key: String,
    /// Display text after the key
    pub display: String,
}

/// Outcome of a scripted session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Every key in order, including ignored ones
    pub steps: Vec<Step>,
    /// Final display text
    pub display: String,
}

/// Presses every key of `script` on a fresh calculator
#[must_use]
pub fn run_script(script: &str, config: EngineConfig) -> Session {
    let mut calc = Calculator::with_config(config, String::new());
    let steps = script_keys(script)
        .into_iter()
        .map(|key| {
            if calc.handle_key(&key).is_none() {
                tracing::debug!(%key, "key ignored");
            }
            Step {
                display: calc.display().to_string(),
                key,
            }
        })
        .collect();

    Session {
        steps,
        display: calc.into_sink(),
    }
}

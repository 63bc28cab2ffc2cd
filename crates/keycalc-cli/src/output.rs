//! Output rendering for scripted sessions

use console::style;

use crate::commands::FormatArg;
use crate::error::CliResult;
use crate::runner::Session;

/// Renders a session for stdout.
///
/// Text output is the final display, or one `key display` line per step
/// when `trace` is set. JSON output is always the full step list.
pub fn render_session(session: &Session, format: FormatArg, trace: bool) -> CliResult<String> {
    match format {
        FormatArg::Json => Ok(serde_json::to_string_pretty(&session.steps)?),
        FormatArg::Text if trace && !session.steps.is_empty() => Ok(render_trace(session)),
        FormatArg::Text => Ok(session.display.clone()),
    }
}

fn render_trace(session: &Session) -> String {
    let width = session
        .steps
        .iter()
        .map(|step| step.key.chars().count())
        .max()
        .unwrap_or(0);

    session
        .steps
        .iter()
        .map(|step| {
            let pad = width - step.key.chars().count();
            format!(
                "{}{}  {}",
                style(&step.key).cyan(),
                " ".repeat(pad),
                style(&step.display).bold()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

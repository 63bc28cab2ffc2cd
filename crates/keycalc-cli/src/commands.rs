//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// keycalc: keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Keys to press, one per character (`=` evaluates, `<` deletes,
    /// `c` clears, whitespace is skipped)
    #[arg(short, long)]
    pub keys: Option<String>,

    /// Print the display after every key
    #[arg(short, long)]
    pub trace: bool,

    /// Engine configuration file (YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for scripted runs
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Log filter written to stderr (e.g. `debug`, `keycalc=trace`)
    #[arg(long, env = "KEYCALC_LOG", default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorArg,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Display text, one line
    #[default]
    Text,
    /// JSON array of steps
    Json,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorArg {
    /// Whether styled output should be colored
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Applies the choice to `console` styling on both streams
    pub fn apply(self) {
        let enabled = self.should_color();
        console::set_colors_enabled(enabled);
        console::set_colors_enabled_stderr(enabled);
    }
}

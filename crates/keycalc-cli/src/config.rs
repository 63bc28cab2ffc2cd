//! Engine configuration files
//!
//! ```yaml
//! placeholder: "0"
//! error_indicator: "Error"
//! fraction_digits: 12
//! ```
//!
//! Every field is optional; missing fields keep their defaults.

use std::fs;
use std::path::Path;

use keycalc::EngineConfig;

use crate::error::{CliError, CliResult};

/// Parses an engine configuration from YAML text
pub fn parse_engine_config(text: &str, origin: &str) -> CliResult<EngineConfig> {
    let config: EngineConfig =
        serde_yaml_ng::from_str(text).map_err(|source| CliError::Yaml {
            path: origin.to_string(),
            source,
        })?;
    Ok(config.normalized())
}

/// Loads an engine configuration file
pub fn load_engine_config(path: &Path) -> CliResult<EngineConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::config(format!("cannot read {}: {e}", path.display())))?;
    let config = parse_engine_config(&text, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), ?config, "loaded engine config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let yaml = "placeholder: \"-\"\nerror_indicator: NaN\nfraction_digits: 4\n";
        let config = parse_engine_config(yaml, "inline").unwrap();
        assert_eq!(config.placeholder, "-");
        assert_eq!(config.error_indicator, "NaN");
        assert_eq!(config.fraction_digits, 4);
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = parse_engine_config("error_indicator: oops\n", "inline").unwrap();
        assert_eq!(config.error_indicator, "oops");
        assert_eq!(config.placeholder, "0");
        assert_eq!(config.fraction_digits, 12);
    }

    #[test]
    fn test_parse_clamps_fraction_digits() {
        let config = parse_engine_config("fraction_digits: 40\n", "inline").unwrap();
        assert_eq!(config.fraction_digits, EngineConfig::MAX_FRACTION_DIGITS);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse_engine_config("fraction_digits: many\n", "calc.yaml").unwrap_err();
        assert!(matches!(err, CliError::Yaml { ref path, .. } if path == "calc.yaml"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "placeholder: empty").unwrap();
        let config = load_engine_config(file.path()).unwrap();
        assert_eq!(config.placeholder, "empty");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_engine_config(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
        assert!(err.to_string().contains("nope.yaml"));
    }
}

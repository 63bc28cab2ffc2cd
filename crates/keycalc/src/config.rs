//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::core::format::DEFAULT_FRACTION_DIGITS;

/// Display texts and rounding used by [`crate::ExpressionEngine`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Shown while the expression is empty
    pub placeholder: String,
    /// Shown after a failed evaluation
    pub error_indicator: String,
    /// Decimal places kept for non-integer results (1..=15)
    pub fraction_digits: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            placeholder: "0".to_string(),
            error_indicator: "Error".to_string(),
            fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }
}

impl EngineConfig {
    /// Largest supported fraction precision; beyond it f64 noise shows
    pub const MAX_FRACTION_DIGITS: usize = 15;

    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the empty-expression placeholder
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the error indicator
    #[must_use]
    pub fn with_error_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.error_indicator = indicator.into();
        self
    }

    /// Set the fraction precision, clamped to 1..=15
    #[must_use]
    pub fn with_fraction_digits(mut self, digits: usize) -> Self {
        self.fraction_digits = digits;
        self.normalized()
    }

    /// Returns the configuration with out-of-range values clamped
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.fraction_digits = self.fraction_digits.clamp(1, Self::MAX_FRACTION_DIGITS);
        self
    }
}

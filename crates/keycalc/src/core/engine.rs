//! Expression engine: the calculator's state machine
//!
//! The engine accumulates a canonical expression from discrete edits and
//! evaluates it on demand. The only other state is whether the last action
//! was a successful evaluation, which makes the next digit start over.
//!
//! Every edit returns the display text produced by that edit.

use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::core::evaluator::Evaluator;
use crate::core::format::format_result;
use crate::core::Operator;

/// Keypad-driven arithmetic expression state
#[derive(Debug, Clone)]
pub struct ExpressionEngine {
    /// Canonical expression text
    expression: String,
    /// True right after a successful evaluation
    just_evaluated: bool,
    /// Last display text produced
    display: String,
    config: EngineConfig,
    evaluator: Evaluator,
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEngine {
    /// Creates an empty engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an empty engine with a custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let config = config.normalized();
        Self {
            expression: String::new(),
            just_evaluated: false,
            display: config.placeholder.clone(),
            config,
            evaluator: Evaluator::new(),
        }
    }

    /// Canonical expression text (`*` and `/` operators)
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// True if the last action was a successful evaluation
    #[must_use]
    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Appends a digit or decimal point.
    ///
    /// After a result, a digit or dot starts a new expression. A dot is
    /// ignored if the number being typed already has one, and becomes `0.`
    /// when it starts a number.
    pub fn append_digit(&mut self, digit: char) -> &str {
        if !(digit.is_ascii_digit() || digit == '.') {
            debug!(input = %digit, "ignoring non-digit input");
            return &self.display;
        }

        if self.just_evaluated {
            self.expression.clear();
            self.just_evaluated = false;
        }

        if digit == '.' {
            let segment = self.current_segment();
            if segment.contains('.') {
                trace!(segment, "number already has a decimal point");
                return &self.display;
            }
            if segment.is_empty() {
                self.expression.push_str("0.");
            } else {
                self.expression.push('.');
            }
        } else {
            self.expression.push(digit);
        }

        self.refresh()
    }

    /// Appends an operator given in canonical or presentation form.
    ///
    /// A trailing operator is replaced rather than stacked. On an empty
    /// expression `-` starts a negative number.
    pub fn append_operator(&mut self, symbol: char) -> &str {
        let Some(op) = Operator::from_symbol(symbol) else {
            debug!(input = %symbol, "ignoring unknown operator");
            return &self.display;
        };

        if self.expression.is_empty() && op == Operator::Subtract {
            self.expression.push(op.canonical());
            return self.refresh();
        }

        if self.expression.ends_with(Operator::is_canonical) {
            self.expression.pop();
        }
        self.expression.push(op.canonical());
        self.just_evaluated = false;

        self.refresh()
    }

    /// Appends `(` or `)`; balance is only checked on evaluation
    pub fn append_paren(&mut self, paren: char) -> &str {
        if !matches!(paren, '(' | ')') {
            debug!(input = %paren, "ignoring non-parenthesis input");
            return &self.display;
        }

        self.expression.push(paren);
        self.just_evaluated = false;
        self.refresh()
    }

    /// Removes the last character, if any
    pub fn backspace(&mut self) -> &str {
        if self.expression.pop().is_none() {
            return &self.display;
        }
        self.just_evaluated = false;
        self.refresh()
    }

    /// Resets the expression and the evaluation flag
    pub fn clear(&mut self) -> &str {
        self.expression.clear();
        self.just_evaluated = false;
        self.refresh()
    }

    /// Evaluates the expression.
    ///
    /// On success the formatted result replaces the expression so further
    /// operators chain from it. On any failure the error indicator is shown
    /// and the expression is discarded.
    pub fn evaluate(&mut self) -> &str {
        if self.expression.is_empty() {
            return &self.display;
        }

        match self.evaluator.evaluate_str(&self.expression) {
            Ok(value) => {
                let text = format_result(value, self.config.fraction_digits);
                debug!(expression = %self.expression, result = %text, "evaluated");
                self.expression = text;
                self.refresh();
                self.just_evaluated = true;
            }
            Err(err) => {
                debug!(
                    expression = %self.expression,
                    kind = err.kind(),
                    error = %err,
                    "evaluation failed"
                );
                self.expression.clear();
                self.just_evaluated = false;
                self.display.clone_from(&self.config.error_indicator);
            }
        }

        &self.display
    }

    // Text after the last operator or parenthesis
    fn current_segment(&self) -> &str {
        let start = self
            .expression
            .rfind(|ch: char| Operator::is_canonical(ch) || ch == '(' || ch == ')')
            .map_or(0, |index| index + 1);
        &self.expression[start..]
    }

    fn refresh(&mut self) -> &str {
        self.display = if self.expression.is_empty() {
            self.config.placeholder.clone()
        } else {
            project_display(&self.expression)
        };
        &self.display
    }
}

/// Renders a canonical expression with `×` and `÷` glyphs
#[must_use]
pub fn project_display(expression: &str) -> String {
    expression
        .chars()
        .map(|ch| match Operator::from_symbol(ch) {
            Some(op @ (Operator::Multiply | Operator::Divide)) => op.glyph(),
            _ => ch,
        })
        .collect()
}

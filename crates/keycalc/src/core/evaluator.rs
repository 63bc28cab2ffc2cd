//! AST evaluator
//!
//! Arithmetic runs in plain f64. A division by zero is not an error on its
//! own; the final result is rejected if it is not finite.

use crate::core::parser::{AstNode, Parser};
use crate::core::{is_expression_char, CalcError, CalcResult, Operator};

/// Pending work while walking the tree
enum Step<'a> {
    Visit(&'a AstNode),
    Apply(Operator),
    Negate,
}

/// Evaluates canonical expression strings
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an AST node.
    ///
    /// Walks the tree with an explicit stack, so operator chains of any
    /// length evaluate without deep recursion.
    #[must_use]
    pub fn evaluate(&self, node: &AstNode) -> f64 {
        let mut steps = vec![Step::Visit(node)];
        let mut values: Vec<f64> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(AstNode::Number(n)) => values.push(*n),
                Step::Visit(AstNode::Negate(inner)) => {
                    steps.push(Step::Negate);
                    steps.push(Step::Visit(inner));
                }
                Step::Visit(AstNode::BinaryOp { left, op, right }) => {
                    steps.push(Step::Apply(*op));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
                Step::Negate => {
                    let value = values.pop().unwrap_or(f64::NAN);
                    values.push(-value);
                }
                Step::Apply(op) => {
                    let right = values.pop().unwrap_or(f64::NAN);
                    let left = values.pop().unwrap_or(f64::NAN);
                    values.push(op.apply(left, right));
                }
            }
        }

        values.pop().unwrap_or(f64::NAN)
    }

    /// Validates, parses and evaluates an expression.
    ///
    /// The whole string must match the alphabet `0-9 + - * / ( ) .` before
    /// anything is parsed.
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        Self::validate(input)?;
        let ast = Parser::parse_str(input)?;
        let value = self.evaluate(&ast);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::NonFiniteResult(value))
        }
    }

    /// Full-string alphabet check
    pub fn validate(input: &str) -> CalcResult<()> {
        match input.chars().find(|&ch| !is_expression_char(ch)) {
            Some(ch) => Err(CalcError::InvalidCharacter(ch)),
            None => Ok(()),
        }
    }
}

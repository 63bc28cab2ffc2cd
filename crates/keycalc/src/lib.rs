//! keycalc - keypad expression engine
//!
//! Builds an arithmetic expression from discrete key presses, renders it
//! with `×`/`÷` glyphs, and evaluates it with standard precedence. A result
//! can be chained into the next calculation.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut engine = ExpressionEngine::new();
//! engine.append_digit('3');
//! engine.append_operator('+');
//! engine.append_operator('×'); // replaces the trailing '+'
//! engine.append_digit('4');
//! assert_eq!(engine.display(), "3×4");
//!
//! assert_eq!(engine.evaluate(), "12");
//! assert_eq!(engine.append_operator('+'), "12+");
//! ```
//!
//! Front ends feed raw input through a [`driver::Calculator`]:
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut calc = Calculator::new(String::new());
//! for key in ["1", "/", "3", "Enter"] {
//!     calc.handle_key(key);
//! }
//! assert_eq!(calc.sink(), "0.333333333333");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod input;

/// Browser front end (mock DOM always; `wasm-bindgen` bindings with the
/// `wasm` feature)
pub mod wasm;

pub use crate::config::EngineConfig;
pub use crate::core::{CalcError, CalcResult, ExpressionEngine};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::format::format_result;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, ExpressionEngine, Operator};
    pub use crate::driver::{Calculator, DisplaySink};
    pub use crate::input::Action;
    pub use crate::wasm::{Keypad, MockDom, WebDriver};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2+3"), Ok(5.0));
    }

    #[test]
    fn test_parser_direct() {
        let ast = Parser::parse_str("1+2*3").unwrap();
        assert_eq!(Evaluator::new().evaluate(&ast), 7.0);
    }

    #[test]
    fn test_engine_round() {
        let mut engine = ExpressionEngine::new();
        for ch in "2+2".chars() {
            match ch {
                '+' => engine.append_operator(ch),
                _ => engine.append_digit(ch),
            };
        }
        assert_eq!(engine.evaluate(), "4");
        assert_eq!(engine.expression(), "4");
        assert!(engine.just_evaluated());
    }

    #[test]
    fn test_error_kinds_share_one_indicator() {
        for keys in ["1/0=", "(1+2=", "5*="] {
            let mut driver = WebDriver::new();
            driver.type_keys(keys);
            assert_eq!(driver.display_text(), "Error", "{keys}");
        }
    }

    #[test]
    fn test_format_result_export() {
        assert_eq!(format_result(0.5, 12), "0.5");
    }
}

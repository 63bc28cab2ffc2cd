//! Input action vocabulary
//!
//! Keypad clicks and keyboard presses are both translated into [`Action`]s
//! before they reach the engine.

use serde::{Deserialize, Serialize};

use crate::core::{ExpressionEngine, Operator};

/// A single edit request for the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "lowercase")]
pub enum Action {
    /// Digit `0-9` or decimal point
    Digit(char),
    /// Operator in canonical or presentation form
    Operator(char),
    /// Evaluate the expression
    Equals,
    /// Reset everything
    Clear,
    /// Remove the last character
    Backspace,
    /// `(` or `)`
    Paren(char),
}

impl Action {
    /// Builds an action from a button's `data-action` / `data-value` pair.
    ///
    /// Returns `None` for unknown kinds and for kinds that need a value
    /// but did not get one.
    #[must_use]
    pub fn from_parts(kind: &str, value: Option<&str>) -> Option<Self> {
        let first = value.and_then(|v| v.chars().next());
        match kind {
            "digit" => first.map(Self::Digit),
            "operator" => first.map(Self::Operator),
            "paren" => first.map(Self::Paren),
            "equals" => Some(Self::Equals),
            "clear" => Some(Self::Clear),
            "backspace" => Some(Self::Backspace),
            _ => None,
        }
    }

    /// Maps a keyboard key name (DOM `KeyboardEvent.key`) to an action.
    ///
    /// `/` and `*` are sent as their presentation glyphs, like the keypad.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => return Some(Self::Equals),
            "Backspace" => return Some(Self::Backspace),
            "Escape" => return Some(Self::Clear),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };

        match ch {
            '0'..='9' | '.' => Some(Self::Digit(ch)),
            '/' => Some(Self::Operator(Operator::Divide.glyph())),
            '*' => Some(Self::Operator(Operator::Multiply.glyph())),
            '-' | '+' => Some(Self::Operator(ch)),
            '(' | ')' => Some(Self::Paren(ch)),
            _ => None,
        }
    }

    /// `data-action` attribute value
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::Backspace => "backspace",
            Self::Paren(_) => "paren",
        }
    }

    /// `data-value` attribute value, if the action carries one
    #[must_use]
    pub const fn value(&self) -> Option<char> {
        match self {
            Self::Digit(ch) | Self::Operator(ch) | Self::Paren(ch) => Some(*ch),
            Self::Equals | Self::Clear | Self::Backspace => None,
        }
    }

    /// Button label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(ch) | Self::Paren(ch) => ch.to_string(),
            Self::Operator(ch) => Operator::from_symbol(*ch)
                .map_or(*ch, Operator::glyph)
                .to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    /// Applies the action to an engine and returns the new display text
    pub fn apply<'a>(&self, engine: &'a mut ExpressionEngine) -> &'a str {
        match *self {
            Self::Digit(ch) => engine.append_digit(ch),
            Self::Operator(ch) => engine.append_operator(ch),
            Self::Paren(ch) => engine.append_paren(ch),
            Self::Equals => engine.evaluate(),
            Self::Clear => engine.clear(),
            Self::Backspace => engine.backspace(),
        }
    }
}

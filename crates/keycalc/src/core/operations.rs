//! Arithmetic operators and their two spellings
//!
//! Each operator has a canonical character stored in the expression and a
//! presentation glyph shown on the keypad and the display.

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Maps a canonical or presentation symbol to an operator.
    ///
    /// Accepts `×`, `÷`, `−` as well as `*`, `/`, `-` and `+`.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Character stored in the expression
    #[must_use]
    pub const fn canonical(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Glyph shown to the user
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Returns true if `ch` is a canonical operator character
    #[must_use]
    pub const fn is_canonical(ch: char) -> bool {
        matches!(ch, '+' | '-' | '*' | '/')
    }

    /// Applies the operator with IEEE 754 semantics.
    ///
    /// Division by zero yields an infinity or NaN here; finiteness is
    /// checked once on the final result.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

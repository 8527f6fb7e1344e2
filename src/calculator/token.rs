//! Tokens and operator normalization.
//!
//! Raw key or button text (`*`, `x`, `X`, `/`, `-`, `+`) is normalized into a
//! closed set of operators; the display glyphs (`+ − × ÷`) are a presentation
//! concern layered on top, so evaluation never depends on a particular symbol
//! set.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// Matches a decimal numeral, optionally signed: `12`, `-3.5`, `.25`.
    static ref NUMERAL: Regex = Regex::new(r"^[+-]?(\d+(\.\d+)?|\.\d+)$").unwrap();
}

/// One of the four supported arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Normalize raw key or button text into an operator.
    ///
    /// Accepts the canonical glyphs as well as their keyboard equivalents.
    /// Returns `None` for anything else; callers treat that as "not an
    /// operator", not as an error.
    pub fn normalize(raw: &str) -> Option<Self> {
        match raw {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "*" | "x" | "X" | "×" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// The canonical display glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Binding strength for shunting-yard: multiplicative 2, additive 1.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Multiply | Self::Divide => 2,
            Self::Add | Self::Subtract => 1,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A committed piece of the expression: a numeral (kept as typed) or an
/// operator.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(String),
    Op(Operator),
}

impl Token {
    pub fn is_op(&self) -> bool {
        matches!(self, Token::Op(_))
    }

    /// Whether a numeral token holds valid numeral text.
    ///
    /// Operator tokens are trivially valid; number tokens must match the
    /// numeral pattern (this is what rejects text like "Error" seeded back
    /// into an expression).
    pub fn is_valid(&self) -> bool {
        match self {
            Token::Op(_) => true,
            Token::Number(s) => NUMERAL.is_match(s),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(s) => f.write_str(s),
            Token::Op(op) => f.write_str(op.glyph()),
        }
    }
}

/// Join tokens with single spaces, the way the tape shows them.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_variants_normalize() {
        assert_eq!(Operator::normalize("*"), Some(Operator::Multiply));
        assert_eq!(Operator::normalize("x"), Some(Operator::Multiply));
        assert_eq!(Operator::normalize("X"), Some(Operator::Multiply));
        assert_eq!(Operator::normalize("/"), Some(Operator::Divide));
        assert_eq!(Operator::normalize("-"), Some(Operator::Subtract));
        assert_eq!(Operator::normalize("+"), Some(Operator::Add));
    }

    #[test]
    fn test_canonical_glyphs_pass_through() {
        assert_eq!(Operator::normalize("×"), Some(Operator::Multiply));
        assert_eq!(Operator::normalize("÷"), Some(Operator::Divide));
        assert_eq!(Operator::normalize("−"), Some(Operator::Subtract));
    }

    #[test]
    fn test_non_operators_rejected() {
        assert_eq!(Operator::normalize("="), None);
        assert_eq!(Operator::normalize("%"), None);
        assert_eq!(Operator::normalize(""), None);
        assert_eq!(Operator::normalize("12"), None);
    }

    #[test]
    fn test_numeral_validation() {
        assert!(Token::Number("12".into()).is_valid());
        assert!(Token::Number("-3.5".into()).is_valid());
        assert!(Token::Number(".25".into()).is_valid());
        assert!(Token::Number("+7".into()).is_valid());
        assert!(!Token::Number("Error".into()).is_valid());
        assert!(!Token::Number("1.2.3".into()).is_valid());
        assert!(!Token::Number("".into()).is_valid());
    }

    #[test]
    fn test_join_uses_glyphs() {
        let tokens = vec![
            Token::Number("12".into()),
            Token::Op(Operator::Add),
            Token::Number("8".into()),
        ];
        assert_eq!(join_tokens(&tokens), "12 + 8");
        assert_eq!(join_tokens(&[]), "");
    }
}

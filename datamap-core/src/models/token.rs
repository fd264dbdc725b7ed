//! Rule tokens: variables, numeric literals, and symbolic constants.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{VARIABLE_CLOSE, VARIABLE_OPEN};

/// Classification of a raw token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A rule variable such as `<s>`.
    Variable,
    Integer(i64),
    Float(f64),
    /// Any other constant. Checked against enumeration members.
    Symbol,
}

/// One attribute or value position of a triple, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Classify the token.
    pub fn kind(&self) -> TokenKind {
        if is_variable(&self.0) {
            return TokenKind::Variable;
        }
        if let Ok(i) = self.0.parse::<i64>() {
            return TokenKind::Integer(i);
        }
        if looks_numeric(&self.0) {
            if let Ok(f) = self.0.parse::<f64>() {
                if f.is_finite() {
                    return TokenKind::Float(f);
                }
            }
        }
        TokenKind::Symbol
    }

    pub fn is_variable(&self) -> bool {
        is_variable(&self.0)
    }

    /// Integer or float literal.
    pub fn is_numeric(&self) -> bool {
        matches!(self.kind(), TokenKind::Integer(_) | TokenKind::Float(_))
    }

    /// Numeric value usable against a float range. Integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self.kind() {
            TokenKind::Integer(i) => Some(i as f64),
            TokenKind::Float(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.kind() {
            TokenKind::Integer(i) => Some(i),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Token {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// `<name>` with a non-empty name.
pub(crate) fn is_variable(raw: &str) -> bool {
    raw.len() > 2 && raw.starts_with(VARIABLE_OPEN) && raw.ends_with(VARIABLE_CLOSE)
}

// Keeps `inf`, `NaN` and friends out of the float class.
fn looks_numeric(raw: &str) -> bool {
    raw.chars().any(|c| c.is_ascii_digit())
        && raw
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
}

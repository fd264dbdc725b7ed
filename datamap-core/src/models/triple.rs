//! Triples: the `(variable ^attribute value)` assertions extracted from a rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::token::Token;
use crate::constants::OPERATOR_ATTRIBUTE;

/// Which side of the rule a triple came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripleRole {
    /// Left-hand side: tests working memory.
    Condition,
    /// Right-hand side: creates working memory.
    Action,
}

/// One variable-anchored attribute assertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Anchor variable, e.g. `<s>`.
    pub variable: String,
    pub attribute: Token,
    pub value: Token,
    pub role: TripleRole,
    /// The anchor was introduced as a state, as in `(state <s> ...)`.
    #[serde(default)]
    pub has_state: bool,
    /// Source line, when the extractor knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Triple {
    pub fn new(
        variable: impl Into<String>,
        attribute: impl Into<Token>,
        value: impl Into<Token>,
        role: TripleRole,
    ) -> Self {
        Self {
            variable: variable.into(),
            attribute: attribute.into(),
            value: value.into(),
            role,
            has_state: false,
            line: None,
        }
    }

    pub fn condition(
        variable: impl Into<String>,
        attribute: impl Into<Token>,
        value: impl Into<Token>,
    ) -> Self {
        Self::new(variable, attribute, value, TripleRole::Condition)
    }

    pub fn action(
        variable: impl Into<String>,
        attribute: impl Into<Token>,
        value: impl Into<Token>,
    ) -> Self {
        Self::new(variable, attribute, value, TripleRole::Action)
    }

    /// Mark the anchor as a state variable.
    pub fn with_state(mut self) -> Self {
        self.has_state = true;
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// `^operator <number>`: a preference value, never checked against the datamap.
    pub fn is_operator_preference(&self) -> bool {
        self.attribute.as_str() == OPERATOR_ATTRIBUTE && self.value.is_numeric()
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} ^{} {})", self.variable, self.attribute, self.value)?;
        if let Some(line) = self.line {
            write!(f, " at line {line}")?;
        }
        Ok(())
    }
}

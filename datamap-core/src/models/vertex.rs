//! Schema vertices: one structural kind and four terminal value kinds.

use serde::{Deserialize, Serialize};

use super::ids::VertexId;
use super::token::{Token, TokenKind};

/// What a vertex describes. Closed set, matched exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VertexKind {
    /// Nested working-memory structure; the only kind with outgoing edges.
    Identifier,
    /// A closed set of symbolic constants. Order is kept for display only.
    Enumeration { members: Vec<String> },
    /// Inclusive integer bounds.
    IntegerRange { low: i64, high: i64 },
    /// Inclusive float bounds.
    FloatRange { low: f64, high: f64 },
    /// Any constant.
    String,
}

impl VertexKind {
    pub fn enumeration<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for member in members {
            let member = member.into();
            if !out.contains(&member) {
                out.push(member);
            }
        }
        VertexKind::Enumeration { members: out }
    }

    pub fn unbounded_integer() -> Self {
        VertexKind::IntegerRange {
            low: i64::MIN,
            high: i64::MAX,
        }
    }

    pub fn unbounded_float() -> Self {
        VertexKind::FloatRange {
            low: f64::NEG_INFINITY,
            high: f64::INFINITY,
        }
    }

    /// Short name for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            VertexKind::Identifier => "identifier",
            VertexKind::Enumeration { .. } => "enumeration",
            VertexKind::IntegerRange { .. } => "integer",
            VertexKind::FloatRange { .. } => "float",
            VertexKind::String => "string",
        }
    }
}

/// A vertex stored in the schema graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub kind: VertexKind,
}

impl Vertex {
    pub fn new(id: VertexId, kind: VertexKind) -> Self {
        Self { id, kind }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self.kind, VertexKind::Identifier)
    }

    pub fn is_enumeration(&self) -> bool {
        matches!(self.kind, VertexKind::Enumeration { .. })
    }

    /// Whether a triple value token may land on this vertex.
    ///
    /// Variables are accepted everywhere. Literals never land on an
    /// identifier.
    pub fn accepts(&self, value: &Token) -> bool {
        let kind = value.kind();
        if kind == TokenKind::Variable {
            return true;
        }
        match &self.kind {
            VertexKind::Identifier => false,
            VertexKind::Enumeration { members } => members.iter().any(|m| m == value.as_str()),
            VertexKind::IntegerRange { low, high } => match kind {
                TokenKind::Integer(i) => *low <= i && i <= *high,
                _ => false,
            },
            VertexKind::FloatRange { low, high } => match value.as_f64() {
                Some(f) => *low <= f && f <= *high,
                None => false,
            },
            VertexKind::String => true,
        }
    }

    /// Enumeration members, empty for every other kind.
    pub fn members(&self) -> &[String] {
        match &self.kind {
            VertexKind::Enumeration { members } => members,
            _ => &[],
        }
    }

    /// Append an enumeration member. Returns `false` if it was already
    /// present or this is not an enumeration.
    pub fn add_member(&mut self, value: &str) -> bool {
        match &mut self.kind {
            VertexKind::Enumeration { members } => {
                if members.iter().any(|m| m == value) {
                    false
                } else {
                    members.push(value.to_string());
                    true
                }
            }
            _ => false,
        }
    }
}

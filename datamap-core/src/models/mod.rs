//! Value types shared by the graph, matcher, and completer.

pub mod edge;
pub mod ids;
pub mod rule_facts;
pub mod token;
pub mod triple;
pub mod vertex;

pub use edge::EdgeCoverage;
pub use ids::{EdgeId, VertexId};
pub use rule_facts::RuleFacts;
pub use token::{Token, TokenKind};
pub use triple::{Triple, TripleRole};
pub use vertex::{Vertex, VertexKind};

//! # datamap-core
//!
//! Foundation crate for the datamap checker.
//! Defines schema vertex and edge values, rule triples, errors, config,
//! events, and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::DatamapConfig;
pub use errors::{DatamapError, DatamapResult};
pub use events::{
    CollectingHandler, DatamapEvent, DatamapEventHandler, NoopHandler, TracingHandler,
};
pub use models::{
    EdgeCoverage, EdgeId, RuleFacts, Token, TokenKind, Triple, TripleRole, Vertex, VertexId,
    VertexKind,
};
pub use traits::IRuleFacts;

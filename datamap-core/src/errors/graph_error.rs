//! Schema graph errors.

use super::error_code::{self, DatamapErrorCode};
use crate::models::{EdgeId, VertexId};

/// Misuse of the schema graph's query and mutation primitives.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("vertex not found: {id}")]
    VertexNotFound { id: VertexId },

    #[error("edge not found: {id}")]
    EdgeNotFound { id: EdgeId },

    #[error("vertex {id} is a {kind} vertex and cannot own edges")]
    NotStructural { id: VertexId, kind: &'static str },

    #[error("vertex {id} is a {kind} vertex, expected an enumeration")]
    NotEnumeration { id: VertexId, kind: &'static str },
}

impl DatamapErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ERROR
    }
}

//! # datamap-graph
//!
//! The schema graph: an arena of typed vertices and labeled edges.
//!
//! ## Modules
//! - **stable_graph**: Storage, identity, query and mutation primitives
//! - **coverage**: Tested/created edge reporting
//! - **label_path**: Resolve attribute-label sequences into concrete edge paths

pub mod coverage;
pub mod label_path;
pub mod stable_graph;

pub use coverage::CoverageReport;
pub use stable_graph::{EdgeView, SchemaEdge, SchemaGraph};

//! Error handling for the datamap checker.
//! One error enum per subsystem, `thiserror` only, folded into `DatamapError`.
//!
//! Only programmer errors travel through these types. Expected domain
//! outcomes (unmatched triples, aborted completion) go to the event handler.

pub mod config_error;
pub mod datamap_error;
pub mod error_code;
pub mod graph_error;
pub mod rule_facts_error;

pub use config_error::ConfigError;
pub use datamap_error::{DatamapError, DatamapResult};
pub use error_code::DatamapErrorCode;
pub use graph_error::GraphError;
pub use rule_facts_error::RuleFactsError;

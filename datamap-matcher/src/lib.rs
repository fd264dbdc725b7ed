//! # datamap-matcher
//!
//! Checks production rules against a datamap and repairs the datamap when
//! they disagree.
//!
//! ## Modules
//! - **bindings**: Rule variable to schema candidate environment
//! - **propagation**: Single-triple constraint propagation (`add_constraint`)
//! - **matcher**: Whole-rule matching, quiet and narrated
//! - **completion**: Datamap synthesis for unmatched triples
//! - **path**: Which triples realize a given edge path
//! - **report**: Batch check results
//! - **engine**: Config-driven facade over the above

pub mod bindings;
pub mod completion;
pub mod engine;
pub mod matcher;
pub mod path;
pub mod propagation;
pub mod report;

pub use bindings::{Bindings, Candidate};
pub use completion::{complete, complete_with, AbortReason, CompletionOutcome};
pub use engine::{DatamapEngine, PathUsage};
pub use matcher::{matches, matches_logged, matches_with};
pub use path::{path_match_indices, path_matches_production};
pub use propagation::add_constraint;
pub use report::{check_productions, DatamapCheckReport, ProductionReport, ProductionStatus};

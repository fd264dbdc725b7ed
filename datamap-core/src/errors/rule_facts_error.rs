//! Errors for inconsistent rule facts handed in by an extractor.

use super::error_code::{self, DatamapErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum RuleFactsError {
    #[error("triple {index} is anchored on {anchor}, which is not a variable")]
    AnchorNotVariable { index: usize, anchor: String },

    #[error("triple {index} has an empty token: {triple}")]
    EmptyToken { index: usize, triple: String },
}

impl DatamapErrorCode for RuleFactsError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_FACTS_ERROR
    }
}

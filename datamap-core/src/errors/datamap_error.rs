use super::error_code::DatamapErrorCode;
use super::{ConfigError, GraphError, RuleFactsError};

/// Top-level error for every fallible datamap operation.
#[derive(Debug, thiserror::Error)]
pub enum DatamapError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("rule facts error: {0}")]
    RuleFacts(#[from] RuleFactsError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl DatamapErrorCode for DatamapError {
    fn error_code(&self) -> &'static str {
        match self {
            DatamapError::Graph(e) => e.error_code(),
            DatamapError::RuleFacts(e) => e.error_code(),
            DatamapError::Config(e) => e.error_code(),
        }
    }
}

pub type DatamapResult<T> = Result<T, DatamapError>;

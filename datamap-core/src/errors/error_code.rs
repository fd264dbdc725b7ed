//! DatamapErrorCode trait: stable string codes for host applications.

/// Every error enum implements this to expose a structured code.
pub trait DatamapErrorCode {
    /// The code string, e.g. `"GRAPH_ERROR"`.
    fn error_code(&self) -> &'static str;

    /// `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const RULE_FACTS_ERROR: &str = "RULE_FACTS_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

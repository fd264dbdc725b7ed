use serde::{Deserialize, Serialize};

use super::defaults;

/// Matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Leave `^operator <number>` preference triples unchecked.
    pub skip_operator_preferences: bool,
    /// Use the narrating matcher, which traces every propagation step.
    pub narrate: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            skip_operator_preferences: defaults::DEFAULT_SKIP_OPERATOR_PREFERENCES,
            narrate: defaults::DEFAULT_NARRATE,
        }
    }
}

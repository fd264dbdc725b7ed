use serde::{Deserialize, Serialize};

use super::defaults;

/// Path resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Longest edge path the engine will search. The backtracking cost is
    /// combinatorial in path length.
    pub max_path_length: usize,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            max_path_length: defaults::DEFAULT_MAX_PATH_LENGTH,
        }
    }
}

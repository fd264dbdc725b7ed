use serde::{Deserialize, Serialize};

use super::defaults;

/// Completer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Treat `^name <literal>` below a non-top identifier as naming an
    /// operator, reusing or creating a sibling `operator` slot.
    pub name_operator_slots: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            name_operator_slots: defaults::DEFAULT_NAME_OPERATOR_SLOTS,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::triple::TripleRole;

/// Coverage flags carried by every schema edge.
///
/// Set as a side effect of successful constraint matching. The matcher
/// never reads them back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCoverage {
    /// Some condition triple matched this edge.
    pub tested: bool,
    /// Some action triple matched this edge.
    pub created: bool,
}

impl EdgeCoverage {
    /// Record a match by a triple with the given role.
    pub fn record(&mut self, role: TripleRole) {
        match role {
            TripleRole::Condition => self.tested = true,
            TripleRole::Action => self.created = true,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

use serde::{Deserialize, Serialize};

use super::triple::Triple;
use crate::traits::IRuleFacts;

/// The triples extracted from one production.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleFacts {
    /// Production name.
    pub name: String,
    pub triples: Vec<Triple>,
}

impl RuleFacts {
    pub fn new(name: impl Into<String>, triples: Vec<Triple>) -> Self {
        Self {
            name: name.into(),
            triples,
        }
    }

    pub fn push(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

impl IRuleFacts for RuleFacts {
    fn name(&self) -> &str {
        &self.name
    }

    fn triples(&self) -> &[Triple] {
        &self.triples
    }
}

//! Binding environment: rule variable → set of schema candidates.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use datamap_core::models::VertexId;

/// Something a rule variable may stand for.
///
/// Anchor and value variables bind to vertices. A variable in attribute
/// position binds to the label of an edge it matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Candidate {
    Vertex(VertexId),
    Attribute(String),
}

impl Candidate {
    pub fn as_vertex(&self) -> Option<VertexId> {
        match self {
            Candidate::Vertex(id) => Some(*id),
            Candidate::Attribute(_) => None,
        }
    }
}

/// Per-variable candidate sets. Insert-only: candidates are never removed
/// while a rule is being matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    map: FxHashMap<String, BTreeSet<Candidate>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind each state variable to `root`.
    pub fn seeded<'a>(root: VertexId, state_variables: impl IntoIterator<Item = &'a str>) -> Self {
        let mut bindings = Self::new();
        for variable in state_variables {
            bindings.insert(variable, Candidate::Vertex(root));
        }
        bindings
    }

    /// Returns `true` if the candidate was not already bound.
    pub fn insert(&mut self, variable: &str, candidate: Candidate) -> bool {
        match self.map.get_mut(variable) {
            Some(set) => set.insert(candidate),
            None => {
                self.map
                    .insert(variable.to_string(), BTreeSet::from([candidate]));
                true
            }
        }
    }

    pub fn bind_vertex(&mut self, variable: &str, id: VertexId) -> bool {
        self.insert(variable, Candidate::Vertex(id))
    }

    pub fn candidates(&self, variable: &str) -> impl Iterator<Item = &Candidate> {
        self.map.get(variable).into_iter().flatten()
    }

    /// Vertex candidates of `variable`, ascending.
    pub fn vertices(&self, variable: &str) -> Vec<VertexId> {
        self.candidates(variable)
            .filter_map(Candidate::as_vertex)
            .collect()
    }

    /// Attribute-label candidates of `variable`, ascending.
    pub fn attributes(&self, variable: &str) -> Vec<&str> {
        self.candidates(variable)
            .filter_map(|c| match c {
                Candidate::Attribute(label) => Some(label.as_str()),
                Candidate::Vertex(_) => None,
            })
            .collect()
    }

    pub fn contains(&self, variable: &str, candidate: &Candidate) -> bool {
        self.map
            .get(variable)
            .is_some_and(|set| set.contains(candidate))
    }

    pub fn is_bound(&self, variable: &str) -> bool {
        self.map.get(variable).is_some_and(|set| !set.is_empty())
    }

    /// Bound variable names, sorted.
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Total number of (variable, candidate) pairs.
    pub fn len(&self) -> usize {
        self.map.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every candidate bound here is also bound in `other`.
    pub fn is_subset_of(&self, other: &Bindings) -> bool {
        self.map.iter().all(|(variable, set)| match other.map.get(variable) {
            Some(theirs) => set.is_subset(theirs),
            None => set.is_empty(),
        })
    }
}

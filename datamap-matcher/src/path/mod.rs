//! Which triples of a production realize a concrete edge path.
//!
//! The search is depth-first over triple choices. The first edge must be
//! realized by a state-rooted triple; every later edge by a triple anchored
//! on the previous triple's value. A triple is consumed for the rest of its
//! branch and released on backtrack. Every distinct triple that realizes
//! the last edge is a result.

mod state_rooted;

use rustc_hash::FxHashSet;
use tracing::debug;

use datamap_core::models::{EdgeId, Triple};
use datamap_core::traits::IRuleFacts;
use datamap_graph::{EdgeView, SchemaGraph};

use crate::propagation::satisfies;

/// Terminal triples of every realization of `path` by `facts`, without
/// duplicates, in discovery order. Empty when the path is empty, names an
/// edge no longer in the graph, or is not realized.
///
/// Cost grows combinatorially with path length when many triples satisfy
/// the same edge; callers that need bounded latency should cap the length.
pub fn path_matches_production<'a>(
    graph: &SchemaGraph,
    path: &[EdgeId],
    facts: &'a dyn IRuleFacts,
) -> Vec<&'a Triple> {
    path_match_indices(graph, path, facts)
        .into_iter()
        .map(|index| &facts.triples()[index])
        .collect()
}

/// Like [`path_matches_production`], returning triple positions.
pub fn path_match_indices(
    graph: &SchemaGraph,
    path: &[EdgeId],
    facts: &dyn IRuleFacts,
) -> Vec<usize> {
    if path.is_empty() {
        return Vec::new();
    }
    let edges: Option<Vec<EdgeView>> = path.iter().map(|&id| graph.edge(id)).collect();
    let Some(edges) = edges else {
        debug!(length = path.len(), "path names a missing edge");
        return Vec::new();
    };

    let triples = facts.triples();
    let mut search = PathSearch {
        graph,
        edges: &edges,
        triples,
        rooted: state_rooted::state_rooted(triples, &facts.state_variables()),
        used: vec![false; triples.len()],
        found: Vec::new(),
        seen: FxHashSet::default(),
    };
    search.visit(0, None);
    search.found
}

struct PathSearch<'g> {
    graph: &'g SchemaGraph,
    edges: &'g [EdgeView],
    triples: &'g [Triple],
    rooted: FxHashSet<usize>,
    used: Vec<bool>,
    found: Vec<usize>,
    seen: FxHashSet<usize>,
}

impl PathSearch<'_> {
    fn visit(&mut self, position: usize, previous: Option<usize>) {
        let (graph, edges, triples) = (self.graph, self.edges, self.triples);
        let edge = &edges[position];
        let last = position + 1 == edges.len();

        for (index, triple) in triples.iter().enumerate() {
            if self.used[index] {
                continue;
            }
            let anchored = match previous {
                None => self.rooted.contains(&index),
                Some(prev) => triples[prev].value.as_str() == triple.variable,
            };
            if !anchored || !satisfies(graph, edge, triple) {
                continue;
            }
            if last {
                if self.seen.insert(index) {
                    self.found.push(index);
                }
            } else {
                self.used[index] = true;
                self.visit(position + 1, Some(index));
                self.used[index] = false;
            }
        }
    }
}

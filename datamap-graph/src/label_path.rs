//! Resolve attribute-label sequences into concrete edge paths.
//!
//! A label path like `io.input-link.block` may be realized by several edge
//! paths when an attribute has more than one destination.

use datamap_core::models::{EdgeId, VertexId};

use crate::stable_graph::SchemaGraph;

/// Every edge path from `start` whose labels spell `labels`, in
/// ascending edge order. An empty label list yields no paths.
pub fn resolve(graph: &SchemaGraph, start: VertexId, labels: &[&str]) -> Vec<Vec<EdgeId>> {
    let mut out = Vec::new();
    if labels.is_empty() {
        return out;
    }
    let mut current = Vec::with_capacity(labels.len());
    walk(graph, start, labels, &mut current, &mut out);
    out
}

fn walk(
    graph: &SchemaGraph,
    at: VertexId,
    labels: &[&str],
    current: &mut Vec<EdgeId>,
    out: &mut Vec<Vec<EdgeId>>,
) {
    let Some((label, rest)) = labels.split_first() else {
        out.push(current.clone());
        return;
    };
    for edge in graph.edges_labeled(at, label) {
        current.push(edge.id);
        walk(graph, edge.target, rest, current, out);
        current.pop();
    }
}

/// Split a dotted path (`io.input-link`) into labels.
pub fn parse(dotted: &str) -> Vec<&str> {
    dotted.split('.').filter(|s| !s.is_empty()).collect()
}

/// Render an edge path as dotted labels. Removed edges render as `?`.
pub fn format(graph: &SchemaGraph, path: &[EdgeId]) -> String {
    path.iter()
        .map(|&id| graph.edge(id).map(|e| e.label).unwrap_or_else(|| "?".to_string()))
        .collect::<Vec<_>>()
        .join(".")
}

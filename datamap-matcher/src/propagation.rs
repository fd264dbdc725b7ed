//! Single-triple constraint propagation.

use tracing::debug;

use datamap_core::models::Triple;
use datamap_graph::{EdgeView, SchemaGraph};

use crate::bindings::{Bindings, Candidate};

/// Whether `edge` can realize `triple`: the label matches (or the attribute
/// is a variable) and the target vertex accepts the value token.
pub fn satisfies(graph: &SchemaGraph, edge: &EdgeView, triple: &Triple) -> bool {
    let label_ok = triple.attribute.is_variable() || edge.label == triple.attribute.as_str();
    label_ok
        && graph
            .vertex(edge.target)
            .is_some_and(|target| target.accepts(&triple.value))
}

/// Propagate one triple from the current candidates of its anchor.
///
/// Every satisfying edge gets the coverage flag for the triple's role, and
/// the triple's attribute and value variables (if any) pick up the label and
/// target. Returns `true` if at least one edge satisfied the triple.
pub fn add_constraint(graph: &mut SchemaGraph, triple: &Triple, bindings: &mut Bindings) -> bool {
    propagate(graph, triple, bindings, false)
}

pub(crate) fn propagate(
    graph: &mut SchemaGraph,
    triple: &Triple,
    bindings: &mut Bindings,
    narrate: bool,
) -> bool {
    let mut matched = false;
    for anchor in bindings.vertices(&triple.variable) {
        for edge in graph.outgoing_edges(anchor) {
            if !satisfies(graph, &edge, triple) {
                continue;
            }
            matched = true;
            graph.record_match(edge.id, triple.role);
            if narrate {
                debug!(
                    triple = %triple,
                    edge = %edge.id,
                    source = %edge.source,
                    label = %edge.label,
                    target = %edge.target,
                    "edge satisfies triple"
                );
            }
            if triple.attribute.is_variable() {
                bindings.insert(
                    triple.attribute.as_str(),
                    Candidate::Attribute(edge.label.clone()),
                );
            }
            if triple.value.is_variable() {
                bindings.bind_vertex(triple.value.as_str(), edge.target);
            }
        }
    }
    if narrate && !matched {
        debug!(triple = %triple, "no edge satisfies triple");
    }
    matched
}

/// Propagate every triple `skip` does not reject, repeating passes until
/// the bindings stop growing. A triple whose anchor is bound by a later
/// triple is retried on the next pass, so the outcome does not depend on
/// triple order.
///
/// Entry `i` is `true` if some pass found an edge for `triples[i]`.
/// Skipped triples count as satisfied.
pub(crate) fn propagate_to_fixpoint(
    graph: &mut SchemaGraph,
    triples: &[Triple],
    bindings: &mut Bindings,
    skip: impl Fn(&Triple) -> bool,
    narrate: bool,
) -> Vec<bool> {
    let mut satisfied: Vec<bool> = triples.iter().map(&skip).collect();
    let mut pass = 0usize;
    loop {
        pass += 1;
        let before = bindings.len();
        for (triple, done) in triples.iter().zip(satisfied.iter_mut()) {
            if skip(triple) {
                continue;
            }
            if narrate {
                debug!(
                    pass,
                    triple = %triple,
                    anchors = bindings.vertices(&triple.variable).len(),
                    "propagating"
                );
            }
            if propagate(graph, triple, bindings, narrate) {
                *done = true;
            }
        }
        if bindings.len() == before {
            if narrate {
                debug!(passes = pass, bound = bindings.len(), "bindings settled");
            }
            return satisfied;
        }
    }
}

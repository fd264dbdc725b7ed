//! Datamap completion: grow the datamap until a rule's triples match.
//!
//! Completion propagates the triples exactly as the matcher does, until the
//! bindings settle. The first triple no edge satisfies is then repaired:
//! its anchor candidates are resolved to identifiers, the `name` rule may
//! redirect onto an `operator` slot, and a value vertex of the right kind is
//! attached under the triple's attribute. Every synthesized piece of
//! structure is announced through the event handler. Propagation resumes
//! after each repair, so later triples anchor on the new structure. Each
//! triple is repaired at most once.
//!
//! Nothing is rolled back when a pass aborts; structure created before the
//! abort stays in the graph.

mod anchor;
mod operator;
mod synthesis;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, warn};

use datamap_core::config::DatamapConfig;
use datamap_core::constants::NAME_ATTRIBUTE;
use datamap_core::errors::DatamapResult;
use datamap_core::events::DatamapEventHandler;
use datamap_core::models::{EdgeId, Triple, VertexId};
use datamap_core::traits::IRuleFacts;
use datamap_graph::SchemaGraph;

use crate::bindings::Bindings;
use crate::propagation::{propagate_to_fixpoint, satisfies};

/// Why a completion pass stopped early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum AbortReason {
    /// The attribute is a variable, so there is no label to create.
    UnresolvedAttribute { triple: Triple },
    /// An edge with the attribute's label leads to a vertex that can be
    /// neither extended nor replaced by an enumeration.
    IncompatibleEdge {
        triple: Triple,
        edge: EdgeId,
        kind: String,
    },
}

impl AbortReason {
    pub fn triple(&self) -> &Triple {
        match self {
            AbortReason::UnresolvedAttribute { triple }
            | AbortReason::IncompatibleEdge { triple, .. } => triple,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionOutcome {
    Completed,
    Aborted(AbortReason),
}

impl CompletionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, CompletionOutcome::Completed)
    }

    pub fn abort_reason(&self) -> Option<&AbortReason> {
        match self {
            CompletionOutcome::Completed => None,
            CompletionOutcome::Aborted(reason) => Some(reason),
        }
    }
}

/// Complete the datamap rooted at `root` so every triple of `facts` matches.
///
/// Unlike matching, the state-variable count is not checked: every state
/// variable (possibly none) is seeded with `root`.
pub fn complete(
    graph: &mut SchemaGraph,
    root: VertexId,
    facts: &dyn IRuleFacts,
    handler: &mut dyn DatamapEventHandler,
) -> DatamapResult<CompletionOutcome> {
    complete_with(graph, root, facts, handler, &DatamapConfig::default())
}

/// [`complete`] under an explicit configuration.
pub fn complete_with(
    graph: &mut SchemaGraph,
    root: VertexId,
    facts: &dyn IRuleFacts,
    handler: &mut dyn DatamapEventHandler,
    config: &DatamapConfig,
) -> DatamapResult<CompletionOutcome> {
    facts.check()?;
    graph.require_vertex(root)?;

    let span = debug_span!("datamap.complete", production = facts.name());
    let _guard = span.enter();

    let mut bindings = Bindings::seeded(root, facts.state_variables());
    let skip_preferences = config.matching.skip_operator_preferences;
    let skip = |triple: &Triple| skip_preferences && triple.is_operator_preference();
    let triples = facts.triples();
    let mut repaired = vec![false; triples.len()];

    loop {
        let satisfied = propagate_to_fixpoint(graph, triples, &mut bindings, &skip, false);
        // First unsatisfied triple with something to anchor on. Triples whose
        // anchor is still unbound wait for a later repair to bind it.
        let next = triples.iter().enumerate().find(|&(index, triple)| {
            !satisfied[index]
                && !repaired[index]
                && (triple.attribute.is_variable()
                    || !bindings.vertices(&triple.variable).is_empty())
        });
        let Some((index, triple)) = next else {
            return Ok(CompletionOutcome::Completed);
        };

        if triple.attribute.is_variable() {
            warn!(
                production = facts.name(),
                triple = %triple,
                "attribute is an unresolved variable, completion aborted"
            );
            return Ok(CompletionOutcome::Aborted(
                AbortReason::UnresolvedAttribute {
                    triple: triple.clone(),
                },
            ));
        }
        repaired[index] = true;
        if let Some(reason) = repair(graph, triple, &mut bindings, handler, config)? {
            warn!(
                production = facts.name(),
                triple = %triple,
                reason = ?reason,
                "incompatible edge, completion aborted"
            );
            return Ok(CompletionOutcome::Aborted(reason));
        }
    }
}

/// Synthesize structure for one unmatched triple.
fn repair(
    graph: &mut SchemaGraph,
    triple: &Triple,
    bindings: &mut Bindings,
    handler: &mut dyn DatamapEventHandler,
    config: &DatamapConfig,
) -> DatamapResult<Option<AbortReason>> {
    let candidates = bindings.vertices(&triple.variable);
    if candidates.is_empty() {
        debug!(triple = %triple, "anchor has no candidates, nothing to repair");
        return Ok(None);
    }

    let names_operator = config.completion.name_operator_slots
        && triple.attribute.as_str() == NAME_ATTRIBUTE;

    let mut targets: Vec<VertexId> = Vec::new();
    for candidate in candidates {
        let Some(anchor) = anchor::resolve_anchor(graph, candidate, triple, bindings, handler)?
        else {
            continue;
        };
        let target = if names_operator && anchor != graph.top_state() {
            operator::operator_slot(graph, anchor, triple, bindings, handler)?
        } else {
            Some(anchor)
        };
        if let Some(target) = target {
            if !targets.contains(&target) {
                targets.push(target);
            }
        }
    }

    for target in targets {
        let already = graph
            .outgoing_edges(target)
            .iter()
            .any(|edge| satisfies(graph, edge, triple));
        if already {
            continue;
        }
        if let Some(reason) = synthesis::attach_value(graph, target, triple, handler)? {
            return Ok(Some(reason));
        }
    }
    Ok(None)
}

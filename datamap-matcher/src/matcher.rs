//! Whole-rule matching against the datamap.

use tracing::{debug, debug_span};

use datamap_core::config::DatamapConfig;
use datamap_core::errors::DatamapResult;
use datamap_core::events::DatamapEventHandler;
use datamap_core::models::{Triple, VertexId};
use datamap_core::traits::IRuleFacts;
use datamap_graph::SchemaGraph;

use crate::bindings::Bindings;
use crate::propagation::propagate_to_fixpoint;

/// Match every triple of `facts` against the datamap rooted at `root`.
///
/// Returns `Ok(None)` when the rule does not have exactly one state
/// variable; the handler hears about that once and no triple is examined.
/// Otherwise returns the final bindings. Triples are propagated until the
/// bindings settle; those no edge ever satisfied are then reported through
/// `on_bad_constraint`, in rule order.
///
/// Edges that satisfy a triple are flagged tested or created per the
/// triple's role, which is why the graph is borrowed mutably.
pub fn matches(
    graph: &mut SchemaGraph,
    root: VertexId,
    facts: &dyn IRuleFacts,
    handler: &mut dyn DatamapEventHandler,
) -> DatamapResult<Option<Bindings>> {
    run(graph, root, facts, handler, &DatamapConfig::default(), false)
}

/// Same outcome as [`matches`], with every propagation step traced at
/// `debug` level.
pub fn matches_logged(
    graph: &mut SchemaGraph,
    root: VertexId,
    facts: &dyn IRuleFacts,
    handler: &mut dyn DatamapEventHandler,
) -> DatamapResult<Option<Bindings>> {
    run(graph, root, facts, handler, &DatamapConfig::default(), true)
}

/// [`matches`] under an explicit configuration. `matching.narrate` selects
/// the narrated variant.
pub fn matches_with(
    graph: &mut SchemaGraph,
    root: VertexId,
    facts: &dyn IRuleFacts,
    handler: &mut dyn DatamapEventHandler,
    config: &DatamapConfig,
) -> DatamapResult<Option<Bindings>> {
    run(graph, root, facts, handler, config, config.matching.narrate)
}

fn run(
    graph: &mut SchemaGraph,
    root: VertexId,
    facts: &dyn IRuleFacts,
    handler: &mut dyn DatamapEventHandler,
    config: &DatamapConfig,
    narrate: bool,
) -> DatamapResult<Option<Bindings>> {
    facts.check()?;
    graph.require_vertex(root)?;

    let span = debug_span!("datamap.matches", production = facts.name());
    let _guard = span.enter();

    let states = facts.state_variables();
    let state = match states.as_slice() {
        [] => {
            handler.on_no_state_variable();
            return Ok(None);
        }
        [only] => *only,
        _ => {
            handler.on_too_many_state_variables();
            return Ok(None);
        }
    };

    let mut bindings = Bindings::seeded(root, [state]);
    if narrate {
        debug!(state, root = %root, "seeded state variable");
    }

    let skip_preferences = config.matching.skip_operator_preferences;
    let skip = |triple: &Triple| skip_preferences && triple.is_operator_preference();
    let triples = facts.triples();
    if narrate {
        for triple in triples.iter().filter(|t| skip(t)) {
            debug!(triple = %triple, "skipping operator preference");
        }
    }

    let satisfied = propagate_to_fixpoint(graph, triples, &mut bindings, &skip, narrate);
    for (triple, _) in triples.iter().zip(satisfied).filter(|(_, ok)| !*ok) {
        handler.on_bad_constraint(triple);
    }

    if narrate {
        debug!(bound = bindings.len(), "matching finished");
    }
    Ok(Some(bindings))
}

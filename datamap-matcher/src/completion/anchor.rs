use tracing::debug;

use datamap_core::errors::DatamapResult;
use datamap_core::events::DatamapEventHandler;
use datamap_core::models::{Triple, VertexId};
use datamap_graph::SchemaGraph;

use crate::bindings::Bindings;

/// The identifier a repaired triple hangs from, for one anchor candidate.
///
/// Identifiers are used as-is. A value vertex is swapped for an identifier
/// reached from the same parent under the same label, or a new identifier
/// is created beside it. Returns `None` for a candidate with no parent.
pub(super) fn resolve_anchor(
    graph: &mut SchemaGraph,
    candidate: VertexId,
    triple: &Triple,
    bindings: &mut Bindings,
    handler: &mut dyn DatamapEventHandler,
) -> DatamapResult<Option<VertexId>> {
    if graph.is_structural(candidate) {
        return Ok(Some(candidate));
    }

    if let Some(existing) = graph.find_matching_structural_vertex(candidate) {
        bindings.bind_vertex(&triple.variable, existing);
        return Ok(Some(existing));
    }

    let Some(parent_edge) = graph
        .incoming_edges(candidate)
        .into_iter()
        .find(|edge| graph.is_structural(edge.source))
    else {
        debug!(candidate = %candidate, triple = %triple, "candidate has no parent, skipped");
        return Ok(None);
    };

    let id = graph.create_identifier();
    graph.add_edge(parent_edge.source, &parent_edge.label, id)?;
    handler.on_generated_identifier(triple, &parent_edge.label);
    bindings.bind_vertex(&triple.variable, id);
    Ok(Some(id))
}

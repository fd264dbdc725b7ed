use tracing::warn;

use datamap_core::errors::DatamapResult;
use datamap_core::events::DatamapEventHandler;
use datamap_core::models::{TokenKind, Triple, VertexId, VertexKind};
use datamap_graph::SchemaGraph;

use super::AbortReason;

/// Attach a value vertex for `triple` under `target`, dispatching on the
/// value token's kind.
pub(super) fn attach_value(
    graph: &mut SchemaGraph,
    target: VertexId,
    triple: &Triple,
    handler: &mut dyn DatamapEventHandler,
) -> DatamapResult<Option<AbortReason>> {
    let label = triple.attribute.as_str();
    match triple.value.kind() {
        TokenKind::Variable => {
            let has_identifier = graph
                .edges_labeled(target, label)
                .iter()
                .any(|edge| graph.is_structural(edge.target));
            if !has_identifier {
                let id = graph.create_identifier();
                graph.add_edge(target, label, id)?;
                handler.on_generated_identifier(triple, label);
            }
        }
        TokenKind::Integer(_) => {
            let id = graph.create_integer();
            graph.add_edge(target, label, id)?;
            handler.on_generated_integer(triple, label);
        }
        TokenKind::Float(_) => {
            let id = graph.create_float();
            graph.add_edge(target, label, id)?;
            handler.on_generated_float(triple, label);
        }
        TokenKind::Symbol => return attach_symbol(graph, target, triple, handler),
    }
    Ok(None)
}

/// Enumeration literals: create, extend, or replace an identifier.
fn attach_symbol(
    graph: &mut SchemaGraph,
    target: VertexId,
    triple: &Triple,
    handler: &mut dyn DatamapEventHandler,
) -> DatamapResult<Option<AbortReason>> {
    let label = triple.attribute.as_str();
    let value = triple.value.as_str();
    let existing = graph.edges_labeled(target, label);

    let Some(first) = existing.first() else {
        let id = graph.create_enumeration([value]);
        graph.add_edge(target, label, id)?;
        handler.on_generated_enumeration(triple, label);
        return Ok(None);
    };

    if let Some(edge) = existing.iter().find(|edge| graph.is_enumeration(edge.target)) {
        if graph.add_enumeration_member(edge.target, value)? {
            handler.on_generated_add_to_enumeration(triple, label, value);
        }
        return Ok(None);
    }

    if let Some(edge) = existing.iter().find(|edge| graph.is_structural(edge.target)) {
        warn!(
            edge = %edge.id,
            label,
            replaced = %edge.target,
            "replacing identifier with enumeration, its children are no longer reachable from this edge"
        );
        graph.remove_edge_by_id(edge.id)?;
        let id = graph.create_enumeration([value]);
        graph.add_edge(target, label, id)?;
        handler.on_generated_add_to_enumeration(triple, label, value);
        return Ok(None);
    }

    let kind = graph
        .kind(first.target)
        .map_or("unknown", VertexKind::name)
        .to_string();
    Ok(Some(AbortReason::IncompatibleEdge {
        triple: triple.clone(),
        edge: first.id,
        kind,
    }))
}

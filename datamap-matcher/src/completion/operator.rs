use tracing::debug;

use datamap_core::constants::{NAME_ATTRIBUTE, OPERATOR_ATTRIBUTE};
use datamap_core::errors::DatamapResult;
use datamap_core::events::DatamapEventHandler;
use datamap_core::models::{Triple, VertexId};
use datamap_graph::SchemaGraph;

use crate::bindings::Bindings;

/// Redirect a `^name` repair onto an `operator` slot under the anchor's
/// parent.
///
/// Slots are tried in edge order: one already named with the value (nothing
/// left to create, returns `None`), then one with no `name` at all, then a
/// freshly created slot. An anchor without a parent keeps the repair.
pub(super) fn operator_slot(
    graph: &mut SchemaGraph,
    anchor: VertexId,
    triple: &Triple,
    bindings: &mut Bindings,
    handler: &mut dyn DatamapEventHandler,
) -> DatamapResult<Option<VertexId>> {
    let Some(&parent) = graph.find_structural_parents(anchor).first() else {
        return Ok(Some(anchor));
    };

    let slots: Vec<VertexId> = graph
        .edges_labeled(parent, OPERATOR_ATTRIBUTE)
        .into_iter()
        .map(|edge| edge.target)
        .filter(|&target| graph.is_structural(target))
        .collect();

    let value = triple.value.as_str();
    let named = slots.iter().copied().find(|&slot| {
        graph
            .edges_labeled(slot, NAME_ATTRIBUTE)
            .iter()
            .filter_map(|edge| graph.vertex(edge.target))
            .any(|name| name.members().iter().any(|m| m == value))
    });
    if let Some(slot) = named {
        debug!(slot = %slot, value, "operator already named");
        bindings.bind_vertex(&triple.variable, slot);
        return Ok(None);
    }

    let unnamed = slots
        .iter()
        .copied()
        .find(|&slot| graph.edges_labeled(slot, NAME_ATTRIBUTE).is_empty());
    if let Some(slot) = unnamed {
        bindings.bind_vertex(&triple.variable, slot);
        return Ok(Some(slot));
    }

    let slot = graph.create_identifier();
    graph.add_edge(parent, OPERATOR_ATTRIBUTE, slot)?;
    handler.on_generated_identifier(triple, OPERATOR_ATTRIBUTE);
    bindings.bind_vertex(&triple.variable, slot);
    Ok(Some(slot))
}

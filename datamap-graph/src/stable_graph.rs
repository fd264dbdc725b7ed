//! petgraph::StableGraph wrapper holding schema vertices and labeled edges.
//!
//! Vertices are never removed, so a `VertexId` stays valid for the life of
//! the graph. Edges can be removed. petgraph recycles the slot of a removed
//! edge, so an `EdgeId` is issued from a counter and mapped to its slot; a
//! removed edge's id never names another edge.

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use datamap_core::errors::{DatamapResult, GraphError};
use datamap_core::models::{EdgeCoverage, EdgeId, TripleRole, Vertex, VertexId, VertexKind};

/// Weight on a schema edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaEdge {
    pub id: EdgeId,
    /// Attribute name.
    pub label: String,
    pub coverage: EdgeCoverage,
}

/// Owned snapshot of one edge, safe to hold across graph mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeView {
    pub id: EdgeId,
    pub source: VertexId,
    pub label: String,
    pub target: VertexId,
    pub coverage: EdgeCoverage,
}

/// The underlying directed graph type.
pub type SchemaStableGraph = StableGraph<Vertex, SchemaEdge, Directed>;

/// The datamap: typed vertices, labeled edges, and a designated top state.
#[derive(Debug, Clone)]
pub struct SchemaGraph {
    pub(crate) graph: SchemaStableGraph,
    top_state: VertexId,
    edge_slots: FxHashMap<EdgeId, EdgeIndex>,
    next_edge: u32,
}

impl SchemaGraph {
    /// Create a graph holding only the top-state identifier.
    pub fn new() -> Self {
        let mut schema = Self {
            graph: StableGraph::new(),
            top_state: VertexId(0),
            edge_slots: FxHashMap::default(),
            next_edge: 0,
        };
        schema.top_state = schema.create_identifier();
        schema
    }

    /// The designated top-level identifier.
    pub fn top_state(&self) -> VertexId {
        self.top_state
    }

    // --- Vertices ---

    pub fn contains(&self, id: VertexId) -> bool {
        self.graph.contains_node(node(id))
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.graph.node_weight(node(id))
    }

    /// Like [`SchemaGraph::vertex`], as an error for callers that propagate.
    pub fn require_vertex(&self, id: VertexId) -> Result<&Vertex, GraphError> {
        self.vertex(id).ok_or(GraphError::VertexNotFound { id })
    }

    pub fn kind(&self, id: VertexId) -> Option<&VertexKind> {
        self.vertex(id).map(|v| &v.kind)
    }

    pub fn is_structural(&self, id: VertexId) -> bool {
        self.vertex(id).is_some_and(Vertex::is_structural)
    }

    pub fn is_enumeration(&self, id: VertexId) -> bool {
        self.vertex(id).is_some_and(Vertex::is_enumeration)
    }

    /// Add a vertex of any kind.
    pub fn create_vertex(&mut self, kind: VertexKind) -> VertexId {
        let idx = self.graph.add_node(Vertex::new(VertexId(0), kind));
        let id = VertexId::new(idx.index());
        if let Some(vertex) = self.graph.node_weight_mut(idx) {
            vertex.id = id;
        }
        debug!(vertex = %id, kind = self.graph[idx].kind.name(), "vertex created");
        id
    }

    pub fn create_identifier(&mut self) -> VertexId {
        self.create_vertex(VertexKind::Identifier)
    }

    /// Unbounded integer range.
    pub fn create_integer(&mut self) -> VertexId {
        self.create_vertex(VertexKind::unbounded_integer())
    }

    /// Unbounded float range.
    pub fn create_float(&mut self) -> VertexId {
        self.create_vertex(VertexKind::unbounded_float())
    }

    pub fn create_enumeration<I, S>(&mut self, members: I) -> VertexId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.create_vertex(VertexKind::enumeration(members))
    }

    pub fn create_string(&mut self) -> VertexId {
        self.create_vertex(VertexKind::String)
    }

    /// Append a member to an enumeration vertex. Returns `false` if it was
    /// already present.
    pub fn add_enumeration_member(&mut self, id: VertexId, value: &str) -> DatamapResult<bool> {
        let vertex = self
            .graph
            .node_weight_mut(node(id))
            .ok_or(GraphError::VertexNotFound { id })?;
        if !vertex.is_enumeration() {
            return Err(GraphError::NotEnumeration {
                id,
                kind: vertex.kind.name(),
            }
            .into());
        }
        Ok(vertex.add_member(value))
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// All vertex ids, ascending.
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = self
            .graph
            .node_indices()
            .map(|i| VertexId::new(i.index()))
            .collect();
        ids.sort();
        ids
    }

    // --- Edges ---

    /// Add `source ^label target`. An identical edge is reused rather than
    /// duplicated.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        label: &str,
        target: VertexId,
    ) -> DatamapResult<EdgeId> {
        let src = self.require_vertex(source)?;
        if !src.is_structural() {
            return Err(GraphError::NotStructural {
                id: source,
                kind: src.kind.name(),
            }
            .into());
        }
        self.require_vertex(target)?;

        if let Some(existing) = self.find_edge(source, label, target) {
            return Ok(existing);
        }

        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        let idx = self.graph.add_edge(
            node(source),
            node(target),
            SchemaEdge {
                id,
                label: label.to_string(),
                coverage: EdgeCoverage::default(),
            },
        );
        self.edge_slots.insert(id, idx);
        debug!(edge = %id, source = %source, label = %label, target = %target, "edge added");
        Ok(id)
    }

    /// Remove `source ^label target`. Returns whether an edge was removed.
    pub fn remove_edge(&mut self, source: VertexId, label: &str, target: VertexId) -> bool {
        match self.find_edge(source, label, target) {
            Some(id) => self.remove_edge_by_id(id).is_ok(),
            None => false,
        }
    }

    /// Remove the edge `id`, returning what it was.
    pub fn remove_edge_by_id(&mut self, id: EdgeId) -> Result<EdgeView, GraphError> {
        let removed = self.edge(id).ok_or(GraphError::EdgeNotFound { id })?;
        if let Some(idx) = self.edge_slots.remove(&id) {
            self.graph.remove_edge(idx);
        }
        debug!(
            edge = %id,
            source = %removed.source,
            label = %removed.label,
            target = %removed.target,
            "edge removed"
        );
        Ok(removed)
    }

    /// The edge `source ^label target`, if present.
    pub fn find_edge(&self, source: VertexId, label: &str, target: VertexId) -> Option<EdgeId> {
        if !self.contains(source) {
            return None;
        }
        self.graph
            .edges_directed(node(source), Direction::Outgoing)
            .filter(|e| e.target() == node(target) && e.weight().label == label)
            .map(|e| e.weight().id)
            .min()
    }

    /// The live edge `id`. `None` once it has been removed.
    pub fn edge(&self, id: EdgeId) -> Option<EdgeView> {
        let idx = *self.edge_slots.get(&id)?;
        self.view(idx)
    }

    fn view(&self, idx: EdgeIndex) -> Option<EdgeView> {
        let (source, target) = self.graph.edge_endpoints(idx)?;
        let weight = self.graph.edge_weight(idx)?;
        Some(EdgeView {
            id: weight.id,
            source: VertexId::new(source.index()),
            label: weight.label.clone(),
            target: VertexId::new(target.index()),
            coverage: weight.coverage,
        })
    }

    /// Outgoing edges of `id` in insertion order (ascending edge id).
    /// Empty for unknown or terminal vertices.
    pub fn outgoing_edges(&self, id: VertexId) -> Vec<EdgeView> {
        self.edges_in_direction(id, Direction::Outgoing)
    }

    /// Incoming edges of `id`, ascending edge id.
    pub fn incoming_edges(&self, id: VertexId) -> Vec<EdgeView> {
        self.edges_in_direction(id, Direction::Incoming)
    }

    /// Outgoing edges of `id` carrying `label`.
    pub fn edges_labeled(&self, id: VertexId, label: &str) -> Vec<EdgeView> {
        let mut edges = self.outgoing_edges(id);
        edges.retain(|e| e.label == label);
        edges
    }

    /// Every edge, ascending edge id.
    pub fn edges(&self) -> Vec<EdgeView> {
        let mut edges: Vec<EdgeView> = self
            .graph
            .edge_indices()
            .filter_map(|idx| self.view(idx))
            .collect();
        edges.sort_by_key(|e| e.id);
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Set the coverage flag matching `role` on an edge. Returns `false`
    /// if the edge no longer exists.
    pub fn record_match(&mut self, id: EdgeId, role: TripleRole) -> bool {
        let Some(&idx) = self.edge_slots.get(&id) else {
            return false;
        };
        match self.graph.edge_weight_mut(idx) {
            Some(weight) => {
                weight.coverage.record(role);
                true
            }
            None => false,
        }
    }

    // --- Structural queries ---

    /// Distinct identifiers with an edge into `id`, ascending.
    pub fn find_structural_parents(&self, id: VertexId) -> Vec<VertexId> {
        let mut parents: Vec<VertexId> = self
            .incoming_edges(id)
            .into_iter()
            .map(|e| e.source)
            .filter(|&p| self.is_structural(p))
            .collect();
        parents.sort();
        parents.dedup();
        parents
    }

    /// The identifier-typed counterpart of a value vertex: an identifier
    /// reached from one of `id`'s parents under the same label.
    pub fn find_matching_structural_vertex(&self, id: VertexId) -> Option<VertexId> {
        for incoming in self.incoming_edges(id) {
            let sibling = self
                .edges_labeled(incoming.source, &incoming.label)
                .into_iter()
                .find(|e| e.target != id && self.is_structural(e.target));
            if let Some(edge) = sibling {
                return Some(edge.target);
            }
        }
        None
    }

    fn edges_in_direction(&self, id: VertexId, direction: Direction) -> Vec<EdgeView> {
        if !self.contains(id) {
            return Vec::new();
        }
        let mut edges: Vec<EdgeView> = self
            .graph
            .edges_directed(node(id), direction)
            .filter_map(|e| self.view(e.id()))
            .collect();
        edges.sort_by_key(|e| e.id);
        edges
    }
}

impl Default for SchemaGraph {
    fn default() -> Self {
        Self::new()
    }
}

fn node(id: VertexId) -> NodeIndex {
    NodeIndex::new(id.index())
}

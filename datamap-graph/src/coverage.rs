//! Coverage reporting over the tested/created edge flags.

use tracing::info;

use crate::stable_graph::{EdgeView, SchemaGraph};

/// Snapshot of which datamap edges productions have touched.
#[derive(Debug, Clone, Default)]
pub struct CoverageReport {
    pub total_edges: usize,
    pub tested: usize,
    pub created: usize,
    /// Edges no condition matched.
    pub untested: Vec<EdgeView>,
    /// Edges no action matched.
    pub uncreated: Vec<EdgeView>,
    /// Edges some condition tests but no action ever creates.
    pub tested_never_created: Vec<EdgeView>,
}

impl CoverageReport {
    /// Fraction of edges tested, 0.0 for an empty graph.
    pub fn tested_ratio(&self) -> f64 {
        if self.total_edges == 0 {
            0.0
        } else {
            self.tested as f64 / self.total_edges as f64
        }
    }

    pub fn created_ratio(&self) -> f64 {
        if self.total_edges == 0 {
            0.0
        } else {
            self.created as f64 / self.total_edges as f64
        }
    }
}

/// Build a coverage report from the current edge flags.
pub fn coverage_report(graph: &SchemaGraph) -> CoverageReport {
    let mut report = CoverageReport::default();
    for edge in graph.edges() {
        report.total_edges += 1;
        match (edge.coverage.tested, edge.coverage.created) {
            (true, true) => {
                report.tested += 1;
                report.created += 1;
            }
            (true, false) => {
                report.tested += 1;
                report.uncreated.push(edge.clone());
                report.tested_never_created.push(edge);
            }
            (false, true) => {
                report.created += 1;
                report.untested.push(edge);
            }
            (false, false) => {
                report.untested.push(edge.clone());
                report.uncreated.push(edge);
            }
        }
    }
    report
}

/// Clear both flags on every edge. Returns how many edges had a flag set.
pub fn reset_coverage(graph: &mut SchemaGraph) -> usize {
    let mut cleared = 0;
    let indices: Vec<_> = graph.graph.edge_indices().collect();
    for idx in indices {
        if let Some(weight) = graph.graph.edge_weight_mut(idx) {
            if weight.coverage.tested || weight.coverage.created {
                cleared += 1;
            }
            weight.coverage.clear();
        }
    }
    info!(cleared, "datamap coverage reset");
    cleared
}

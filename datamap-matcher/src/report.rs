//! Batch check results over many productions.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use datamap_core::config::DatamapConfig;
use datamap_core::errors::DatamapResult;
use datamap_core::events::{CollectingHandler, DatamapEvent};
use datamap_core::models::{RuleFacts, Triple, VertexId};
use datamap_core::traits::IRuleFacts;
use datamap_graph::SchemaGraph;

use crate::matcher::matches_with;

/// How far matching got for one production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionStatus {
    Checked,
    NoStateVariable,
    TooManyStateVariables,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionReport {
    pub production: String,
    pub status: ProductionStatus,
    /// Triples no datamap edge satisfied, in rule order.
    pub unmatched: Vec<Triple>,
}

impl ProductionReport {
    /// Build from the events one matching pass produced.
    pub fn from_events(production: impl Into<String>, handler: &CollectingHandler) -> Self {
        let mut status = ProductionStatus::Checked;
        let mut unmatched = Vec::new();
        for event in &handler.events {
            match event {
                DatamapEvent::BadConstraint { triple } => unmatched.push(triple.clone()),
                DatamapEvent::NoStateVariable => status = ProductionStatus::NoStateVariable,
                DatamapEvent::TooManyStateVariables => {
                    status = ProductionStatus::TooManyStateVariables
                }
                _ => {}
            }
        }
        Self {
            production: production.into(),
            status,
            unmatched,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.status == ProductionStatus::Checked && self.unmatched.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatamapCheckReport {
    pub productions: Vec<ProductionReport>,
}

impl DatamapCheckReport {
    pub fn push(&mut self, report: ProductionReport) {
        self.productions.push(report);
    }

    pub fn checked(&self) -> usize {
        self.productions.len()
    }

    /// Productions matching never ran on.
    pub fn aborted(&self) -> usize {
        self.productions
            .iter()
            .filter(|p| p.status != ProductionStatus::Checked)
            .count()
    }

    pub fn unmatched_triples(&self) -> usize {
        self.productions.iter().map(|p| p.unmatched.len()).sum()
    }

    pub fn failing(&self) -> impl Iterator<Item = &ProductionReport> {
        self.productions.iter().filter(|p| !p.is_clean())
    }

    pub fn is_clean(&self) -> bool {
        self.productions.iter().all(ProductionReport::is_clean)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Match every production from `root` and gather the diagnostics.
pub fn check_productions(
    graph: &mut SchemaGraph,
    root: VertexId,
    productions: &[RuleFacts],
    config: &DatamapConfig,
) -> DatamapResult<DatamapCheckReport> {
    let mut report = DatamapCheckReport::default();
    for facts in productions {
        let mut handler = CollectingHandler::new();
        matches_with(graph, root, facts, &mut handler, config)?;
        let production = ProductionReport::from_events(facts.name(), &handler);
        debug!(
            production = %production.production,
            status = ?production.status,
            unmatched = production.unmatched.len(),
            "production checked"
        );
        report.push(production);
    }
    info!(
        checked = report.checked(),
        aborted = report.aborted(),
        unmatched = report.unmatched_triples(),
        "datamap check finished"
    );
    Ok(report)
}

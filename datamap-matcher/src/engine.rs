//! DatamapEngine: config-driven facade over matching, completion, and path
//! queries, rooted at the graph's top state.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use datamap_core::config::DatamapConfig;
use datamap_core::errors::DatamapResult;
use datamap_core::events::DatamapEventHandler;
use datamap_core::models::{EdgeId, RuleFacts, Triple};
use datamap_core::traits::IRuleFacts;
use datamap_graph::coverage::{self, CoverageReport};
use datamap_graph::{label_path, SchemaGraph};

use crate::bindings::Bindings;
use crate::completion::{complete_with, CompletionOutcome};
use crate::matcher::matches_with;
use crate::path::path_matches_production;
use crate::report::{self, DatamapCheckReport};

/// Productions that realize an edge path, with the triples that do it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathUsage {
    pub production: String,
    pub triples: Vec<Triple>,
}

#[derive(Debug, Clone, Default)]
pub struct DatamapEngine {
    config: DatamapConfig,
}

impl DatamapEngine {
    pub fn new(config: DatamapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DatamapConfig {
        &self.config
    }

    /// Match one production from the top state.
    pub fn matches(
        &self,
        graph: &mut SchemaGraph,
        facts: &dyn IRuleFacts,
        handler: &mut dyn DatamapEventHandler,
    ) -> DatamapResult<Option<Bindings>> {
        let root = graph.top_state();
        matches_with(graph, root, facts, handler, &self.config)
    }

    /// Complete the datamap for one production from the top state.
    pub fn complete(
        &self,
        graph: &mut SchemaGraph,
        facts: &dyn IRuleFacts,
        handler: &mut dyn DatamapEventHandler,
    ) -> DatamapResult<CompletionOutcome> {
        let root = graph.top_state();
        let outcome = complete_with(graph, root, facts, handler, &self.config)?;
        info!(
            production = facts.name(),
            completed = outcome.is_completed(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "completion finished"
        );
        Ok(outcome)
    }

    /// Path query capped at `paths.max_path_length`.
    pub fn path_matches_production<'a>(
        &self,
        graph: &SchemaGraph,
        path: &[EdgeId],
        facts: &'a dyn IRuleFacts,
    ) -> Vec<&'a Triple> {
        let max = self.config.paths.max_path_length;
        if path.len() > max {
            warn!(
                length = path.len(),
                max,
                path = %label_path::format(graph, path),
                production = facts.name(),
                "path longer than max_path_length, not searched"
            );
            return Vec::new();
        }
        path_matches_production(graph, path, facts)
    }

    /// Match every production from the top state and gather the diagnostics.
    #[instrument(skip_all, fields(productions = productions.len()))]
    pub fn check_productions(
        &self,
        graph: &mut SchemaGraph,
        productions: &[RuleFacts],
    ) -> DatamapResult<DatamapCheckReport> {
        let root = graph.top_state();
        report::check_productions(graph, root, productions, &self.config)
    }

    /// Productions whose triples realize `path`, in input order.
    pub fn find_productions_for_path(
        &self,
        graph: &SchemaGraph,
        path: &[EdgeId],
        productions: &[RuleFacts],
    ) -> Vec<PathUsage> {
        productions
            .iter()
            .filter_map(|facts| {
                let triples = self.path_matches_production(graph, path, facts);
                (!triples.is_empty()).then(|| PathUsage {
                    production: facts.name().to_string(),
                    triples: triples.into_iter().cloned().collect(),
                })
            })
            .collect()
    }

    /// [`Self::find_productions_for_path`] for every edge path from the top
    /// state spelled by a dotted label sequence such as `operator.name`.
    /// A production is listed once even if several realizations match.
    pub fn find_productions_for_label_path(
        &self,
        graph: &SchemaGraph,
        dotted: &str,
        productions: &[RuleFacts],
    ) -> Vec<PathUsage> {
        let labels = label_path::parse(dotted);
        let mut usages: Vec<PathUsage> = Vec::new();
        for path in label_path::resolve(graph, graph.top_state(), &labels) {
            for usage in self.find_productions_for_path(graph, &path, productions) {
                match usages.iter_mut().find(|u| u.production == usage.production) {
                    Some(existing) => {
                        for triple in usage.triples {
                            if !existing.triples.contains(&triple) {
                                existing.triples.push(triple);
                            }
                        }
                    }
                    None => usages.push(usage),
                }
            }
        }
        usages
    }

    pub fn coverage(&self, graph: &SchemaGraph) -> CoverageReport {
        coverage::coverage_report(graph)
    }
}

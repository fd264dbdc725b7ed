//! Fixture loader for datamap and rule-fact test data.
//!
//! Datamaps are stored as keyed vertex and edge lists; the key `top` always
//! names the graph's top state. Rule files are arrays of `RuleFacts`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use datamap_core::models::{RuleFacts, Triple, VertexId, VertexKind};
use datamap_graph::SchemaGraph;

/// Key reserved for the top state in datamap fixtures.
pub const TOP_KEY: &str = "top";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

#[derive(Debug, Deserialize)]
pub struct VertexFixture {
    pub key: String,
    #[serde(flatten)]
    pub kind: VertexKind,
}

#[derive(Debug, Deserialize)]
pub struct EdgeFixture {
    pub source: String,
    pub label: String,
    pub target: String,
}

#[derive(Debug, Deserialize)]
pub struct DatamapFixture {
    pub vertices: Vec<VertexFixture>,
    pub edges: Vec<EdgeFixture>,
}

/// A built datamap plus its fixture keys.
pub struct Datamap {
    pub graph: SchemaGraph,
    pub keys: BTreeMap<String, VertexId>,
}

impl Datamap {
    /// Vertex id of a fixture key.
    ///
    /// # Panics
    /// Panics on an unknown key.
    pub fn id(&self, key: &str) -> VertexId {
        *self
            .keys
            .get(key)
            .unwrap_or_else(|| panic!("unknown datamap key {key}"))
    }
}

impl DatamapFixture {
    pub fn build(&self) -> Datamap {
        let mut graph = SchemaGraph::new();
        let mut keys = BTreeMap::new();
        keys.insert(TOP_KEY.to_string(), graph.top_state());
        for vertex in &self.vertices {
            let id = graph.create_vertex(vertex.kind.clone());
            keys.insert(vertex.key.clone(), id);
        }
        for edge in &self.edges {
            let source = keys[edge.source.as_str()];
            let target = keys[edge.target.as_str()];
            graph
                .add_edge(source, &edge.label, target)
                .unwrap_or_else(|e| panic!("bad fixture edge {}: {e}", edge.label));
        }
        Datamap { graph, keys }
    }
}

/// Load `datamaps/<name>.json` and build it.
pub fn load_datamap(name: &str) -> Datamap {
    load_fixture::<DatamapFixture>(&format!("datamaps/{name}.json")).build()
}

/// Load `rules/<name>.json`.
pub fn load_rules(name: &str) -> Vec<RuleFacts> {
    load_fixture(&format!("rules/{name}.json"))
}

/// Find a production by name in a loaded rule set.
///
/// # Panics
/// Panics if no production has that name.
pub fn production<'a>(rules: &'a [RuleFacts], name: &str) -> &'a RuleFacts {
    rules
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no production named {name}"))
}

/// Build a rule from `(variable, attribute, value)` conditions. Triples
/// anchored on `state` are marked as state triples.
pub fn state_rule(name: &str, state: &str, conditions: &[(&str, &str, &str)]) -> RuleFacts {
    let triples = conditions
        .iter()
        .map(|&(variable, attribute, value)| {
            let triple = Triple::condition(variable, attribute, value);
            if variable == state {
                triple.with_state()
            } else {
                triple
            }
        })
        .collect();
    RuleFacts::new(name, triples)
}

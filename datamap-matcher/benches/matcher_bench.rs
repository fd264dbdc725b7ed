use criterion::{criterion_group, criterion_main, Criterion};

use datamap_core::events::NoopHandler;
use datamap_core::models::{EdgeId, RuleFacts, Triple};
use datamap_graph::SchemaGraph;
use datamap_matcher::{complete, matches, path_matches_production};

/// A datamap ~6 levels deep with 4 identifier children and one
/// enumeration per identifier.
fn build_wide_datamap() -> SchemaGraph {
    let mut graph = SchemaGraph::new();
    let mut frontier = vec![graph.top_state()];
    for _depth in 0..6 {
        let mut next = Vec::new();
        for &parent in &frontier {
            for child in 0..4 {
                let id = graph.create_identifier();
                graph.add_edge(parent, &format!("c{child}"), id).unwrap();
                next.push(id);
            }
            let values = graph.create_enumeration(["on", "off"]);
            graph.add_edge(parent, "status", values).unwrap();
        }
        frontier = next;
    }
    graph
}

/// `(<s> ^c0 <v0>) (<v0> ^c1 <v1>) ... (<vN> ^status on)`
fn chain_rule(depth: usize) -> RuleFacts {
    let mut triples = Vec::new();
    let mut anchor = "<s>".to_string();
    for level in 0..depth {
        let value = format!("<v{level}>");
        let triple = Triple::condition(anchor.clone(), format!("c{}", level % 4), value.clone());
        triples.push(if level == 0 { triple.with_state() } else { triple });
        anchor = value;
    }
    triples.push(Triple::condition(anchor, "status", "on"));
    RuleFacts::new("chain", triples)
}

fn chain_path(graph: &SchemaGraph, depth: usize) -> Vec<EdgeId> {
    let mut path = Vec::new();
    let mut at = graph.top_state();
    for level in 0..depth {
        let edge = graph.edges_labeled(at, &format!("c{}", level % 4))[0].clone();
        at = edge.target;
        path.push(edge.id);
    }
    path
}

fn bench_matches(c: &mut Criterion) {
    let mut graph = build_wide_datamap();
    let top = graph.top_state();
    let facts = chain_rule(5);

    c.bench_function("matches_chain_depth_5", |b| {
        b.iter(|| {
            matches(&mut graph, top, &facts, &mut NoopHandler).unwrap();
        });
    });
}

fn bench_complete_fresh(c: &mut Criterion) {
    let facts = chain_rule(5);

    c.bench_function("complete_chain_depth_5_from_empty", |b| {
        b.iter(|| {
            let mut graph = SchemaGraph::new();
            let top = graph.top_state();
            complete(&mut graph, top, &facts, &mut NoopHandler).unwrap();
        });
    });
}

fn bench_path(c: &mut Criterion) {
    let graph = build_wide_datamap();
    let facts = chain_rule(5);
    let path = chain_path(&graph, 5);

    c.bench_function("path_matches_production_depth_5", |b| {
        b.iter(|| {
            path_matches_production(&graph, &path, &facts);
        });
    });
}

criterion_group!(benches, bench_matches, bench_complete_fresh, bench_path);
criterion_main!(benches);

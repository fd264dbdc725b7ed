//! Property tests for datamap-matcher: binding monotonicity, idempotent
//! re-matching, narration equivalence, and completion convergence.

use proptest::prelude::*;

use datamap_core::events::{CollectingHandler, NoopHandler};
use datamap_core::models::{RuleFacts, Triple, VertexId, VertexKind};
use datamap_graph::SchemaGraph;
use datamap_matcher::{add_constraint, complete, matches, matches_logged, Bindings};

const LABELS: [&str; 3] = ["a", "b", "c"];
const ANCHORS: [&str; 3] = ["<s>", "<v1>", "<v2>"];
const ATTRIBUTES: [&str; 4] = ["a", "b", "c", "<at>"];
const VALUES: [&str; 7] = ["x", "y", "1", "7", "2.5", "<v1>", "<v2>"];

fn kind_strategy() -> impl Strategy<Value = VertexKind> {
    prop_oneof![
        Just(VertexKind::Identifier),
        Just(VertexKind::enumeration(["x"])),
        Just(VertexKind::enumeration(["x", "y"])),
        Just(VertexKind::IntegerRange { low: 0, high: 5 }),
        Just(VertexKind::unbounded_float()),
        Just(VertexKind::String),
    ]
}

/// Random datamap: vertex 0 is the top state, edges only leave identifiers.
fn build_graph(kinds: &[VertexKind], edges: &[(usize, usize, usize)]) -> SchemaGraph {
    let mut graph = SchemaGraph::new();
    let mut ids: Vec<VertexId> = vec![graph.top_state()];
    for kind in kinds {
        ids.push(graph.create_vertex(kind.clone()));
    }
    for &(src, label, tgt) in edges {
        let (src, tgt) = (ids[src % ids.len()], ids[tgt % ids.len()]);
        if graph.is_structural(src) {
            graph.add_edge(src, LABELS[label % LABELS.len()], tgt).unwrap();
        }
    }
    graph
}

fn build_rule(picks: &[(usize, usize, usize)]) -> RuleFacts {
    let triples = picks
        .iter()
        .map(|&(a, at, v)| {
            let anchor = ANCHORS[a % ANCHORS.len()];
            let triple = Triple::condition(
                anchor,
                ATTRIBUTES[at % ATTRIBUTES.len()],
                VALUES[v % VALUES.len()],
            );
            if anchor == "<s>" {
                triple.with_state()
            } else {
                triple
            }
        })
        .collect();
    RuleFacts::new("generated", triples)
}

fn graph_strategy() -> impl Strategy<Value = (Vec<VertexKind>, Vec<(usize, usize, usize)>)> {
    (
        prop::collection::vec(kind_strategy(), 1..8),
        prop::collection::vec((0..8usize, 0..3usize, 0..8usize), 0..16),
    )
}

fn rule_strategy() -> impl Strategy<Value = Vec<(usize, usize, usize)>> {
    prop::collection::vec((0..3usize, 0..4usize, 0..7usize), 1..8)
}

proptest! {
    #[test]
    fn bindings_only_grow(
        (kinds, edges) in graph_strategy(),
        picks in rule_strategy(),
    ) {
        let mut graph = build_graph(&kinds, &edges);
        let facts = build_rule(&picks);
        let mut bindings = Bindings::seeded(graph.top_state(), ["<s>"]);
        for triple in &facts.triples {
            let before = bindings.clone();
            add_constraint(&mut graph, triple, &mut bindings);
            prop_assert!(before.is_subset_of(&bindings));
        }
    }

    #[test]
    fn rematching_is_idempotent(
        (kinds, edges) in graph_strategy(),
        picks in rule_strategy(),
    ) {
        let mut graph = build_graph(&kinds, &edges);
        let facts = build_rule(&picks);
        let top = graph.top_state();
        let vertices = graph.vertex_count();
        let edge_count = graph.edge_count();

        let mut first_events = CollectingHandler::new();
        let mut second_events = CollectingHandler::new();
        let first = matches(&mut graph, top, &facts, &mut first_events).unwrap();
        let second = matches(&mut graph, top, &facts, &mut second_events).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_events.events, second_events.events);
        prop_assert_eq!(graph.vertex_count(), vertices);
        prop_assert_eq!(graph.edge_count(), edge_count);
    }

    #[test]
    fn narration_does_not_change_results(
        (kinds, edges) in graph_strategy(),
        picks in rule_strategy(),
    ) {
        let mut quiet_graph = build_graph(&kinds, &edges);
        let mut loud_graph = build_graph(&kinds, &edges);
        let facts = build_rule(&picks);
        let top = quiet_graph.top_state();

        let mut quiet = CollectingHandler::new();
        let mut loud = CollectingHandler::new();
        let a = matches(&mut quiet_graph, top, &facts, &mut quiet).unwrap();
        let b = matches_logged(&mut loud_graph, top, &facts, &mut loud).unwrap();

        prop_assert_eq!(a, b);
        prop_assert_eq!(quiet.events, loud.events);
        prop_assert_eq!(quiet_graph.edges(), loud_graph.edges());
    }

    #[test]
    fn missing_literal_converges(
        (kinds, edges) in graph_strategy(),
        value in prop_oneof![Just("fresh"), Just("42"), Just("0.5")],
    ) {
        let mut graph = build_graph(&kinds, &edges);
        let top = graph.top_state();
        let facts = RuleFacts::new(
            "missing",
            vec![Triple::condition("<s>", "never-seen", value).with_state()],
        );

        complete(&mut graph, top, &facts, &mut NoopHandler).unwrap();
        let mut handler = CollectingHandler::new();
        matches(&mut graph, top, &facts, &mut handler).unwrap();
        prop_assert!(handler.bad_constraints().is_empty());
    }
}

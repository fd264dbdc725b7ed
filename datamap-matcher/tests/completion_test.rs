use datamap_core::config::DatamapConfig;
use datamap_core::events::{CollectingHandler, DatamapEvent, NoopHandler};
use datamap_core::models::{RuleFacts, Triple, VertexId};
use datamap_graph::SchemaGraph;
use datamap_matcher::completion::complete_with;
use datamap_matcher::{complete, matches, AbortReason, CompletionOutcome};
use test_fixtures::{load_datamap, state_rule};

fn event_names(handler: &CollectingHandler) -> Vec<(&'static str, String)> {
    handler
        .events
        .iter()
        .map(|event| match event {
            DatamapEvent::GeneratedIdentifier { label, .. } => ("identifier", label.clone()),
            DatamapEvent::GeneratedInteger { label, .. } => ("integer", label.clone()),
            DatamapEvent::GeneratedFloat { label, .. } => ("float", label.clone()),
            DatamapEvent::GeneratedEnumeration { label, .. } => ("enumeration", label.clone()),
            DatamapEvent::GeneratedAddToEnumeration { label, value, .. } => {
                ("add_to_enumeration", format!("{label}={value}"))
            }
            other => panic!("completion reported a diagnostic: {other:?}"),
        })
        .collect()
}

fn bad_after_match(graph: &mut SchemaGraph, facts: &RuleFacts) -> usize {
    let top = graph.top_state();
    let mut handler = CollectingHandler::new();
    matches(graph, top, facts, &mut handler).unwrap();
    handler.bad_constraints().len()
}

fn members(graph: &SchemaGraph, id: VertexId) -> Vec<String> {
    graph.vertex(id).unwrap().members().to_vec()
}

// =============================================================================
// Convergence
// =============================================================================

#[test]
fn missing_terminal_literal_converges() {
    let mut datamap = load_datamap("blocks_world");
    let facts = state_rule(
        "colour",
        "<s>",
        &[("<s>", "block", "<b>"), ("<b>", "colour", "red")],
    );
    assert_eq!(bad_after_match(&mut datamap.graph, &facts), 1);

    let top = datamap.graph.top_state();
    let mut handler = CollectingHandler::new();
    let outcome = complete(&mut datamap.graph, top, &facts, &mut handler).unwrap();
    assert_eq!(outcome, CompletionOutcome::Completed);
    assert_eq!(
        event_names(&handler),
        vec![("enumeration", "colour".to_string())]
    );

    assert_eq!(bad_after_match(&mut datamap.graph, &facts), 0);
}

#[test]
fn chain_of_variables_builds_identifiers() {
    let mut graph = SchemaGraph::new();
    let top = graph.top_state();
    let facts = state_rule(
        "output",
        "<s>",
        &[
            ("<s>", "io", "<io>"),
            ("<io>", "output-link", "<ol>"),
            ("<ol>", "move", "3"),
            ("<ol>", "speed", "2.5"),
        ],
    );

    let mut handler = CollectingHandler::new();
    let outcome = complete(&mut graph, top, &facts, &mut handler).unwrap();
    assert!(outcome.is_completed());
    assert_eq!(
        event_names(&handler),
        vec![
            ("identifier", "io".to_string()),
            ("identifier", "output-link".to_string()),
            ("integer", "move".to_string()),
            ("float", "speed".to_string()),
        ]
    );
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(bad_after_match(&mut graph, &facts), 0);
}

#[test]
fn out_of_order_rule_converges() {
    let mut graph = SchemaGraph::new();
    let top = graph.top_state();
    let facts = state_rule(
        "backward",
        "<s>",
        &[
            ("<ol>", "move", "3"),
            ("<io>", "output-link", "<ol>"),
            ("<s>", "io", "<io>"),
        ],
    );

    let mut handler = CollectingHandler::new();
    let outcome = complete(&mut graph, top, &facts, &mut handler).unwrap();
    assert!(outcome.is_completed());
    assert_eq!(
        event_names(&handler),
        vec![
            ("identifier", "io".to_string()),
            ("identifier", "output-link".to_string()),
            ("integer", "move".to_string()),
        ]
    );
    assert_eq!(bad_after_match(&mut graph, &facts), 0);
}

#[test]
fn already_matching_rule_changes_nothing() {
    let mut datamap = load_datamap("blocks_world");
    let facts = state_rule("ok", "<s>", &[("<s>", "block", "<b>"), ("<b>", "name", "A")]);
    let before = datamap.graph.edge_count();

    let top = datamap.graph.top_state();
    let mut handler = CollectingHandler::new();
    complete(&mut datamap.graph, top, &facts, &mut handler).unwrap();
    assert!(handler.is_empty());
    assert_eq!(datamap.graph.edge_count(), before);
}

// =============================================================================
// Enumerations
// =============================================================================

#[test]
fn enumeration_growth_is_additive() {
    let mut graph = SchemaGraph::new();
    let top = graph.top_state();
    let colour = graph.create_enumeration(["blue"]);
    graph.add_edge(top, "colour", colour).unwrap();
    let facts = state_rule("red", "<s>", &[("<s>", "colour", "red")]);

    let mut first = CollectingHandler::new();
    complete(&mut graph, top, &facts, &mut first).unwrap();
    assert_eq!(
        event_names(&first),
        vec![("add_to_enumeration", "colour=red".to_string())]
    );

    let mut second = CollectingHandler::new();
    complete(&mut graph, top, &facts, &mut second).unwrap();
    assert!(second.is_empty());

    assert_eq!(members(&graph, colour), vec!["blue", "red"]);
    assert_eq!(graph.edges_labeled(top, "colour").len(), 1);
}

#[test]
fn identifier_is_replaced_by_enumeration() {
    let mut graph = SchemaGraph::new();
    let top = graph.top_state();
    let mode = graph.create_identifier();
    let child = graph.create_integer();
    graph.add_edge(top, "mode", mode).unwrap();
    graph.add_edge(mode, "level", child).unwrap();
    let facts = state_rule("fast", "<s>", &[("<s>", "mode", "fast")]);

    let mut handler = CollectingHandler::new();
    let outcome = complete(&mut graph, top, &facts, &mut handler).unwrap();
    assert!(outcome.is_completed());
    assert_eq!(
        event_names(&handler),
        vec![("add_to_enumeration", "mode=fast".to_string())]
    );

    assert!(graph.find_edge(top, "mode", mode).is_none());
    let edges = graph.edges_labeled(top, "mode");
    assert_eq!(edges.len(), 1);
    assert_eq!(members(&graph, edges[0].target), vec!["fast"]);
    assert!(graph.incoming_edges(mode).is_empty());
}

#[test]
fn enumeration_preferred_over_identifier_under_same_label() {
    let mut graph = SchemaGraph::new();
    let top = graph.top_state();
    let ident = graph.create_identifier();
    let values = graph.create_enumeration(["a"]);
    graph.add_edge(top, "x", ident).unwrap();
    graph.add_edge(top, "x", values).unwrap();
    let facts = state_rule("b", "<s>", &[("<s>", "x", "b")]);

    complete(&mut graph, top, &facts, &mut NoopHandler).unwrap();
    assert!(graph.find_edge(top, "x", ident).is_some());
    assert_eq!(members(&graph, values), vec!["a", "b"]);
}

// =============================================================================
// Aborts
// =============================================================================

#[test]
fn incompatible_edge_aborts_remaining_pass() {
    let mut graph = SchemaGraph::new();
    let top = graph.top_state();
    let size = graph.create_vertex(datamap_core::VertexKind::IntegerRange { low: 1, high: 9 });
    let size_edge = graph.add_edge(top, "size", size).unwrap();
    let facts = state_rule(
        "big",
        "<s>",
        &[("<s>", "before", "x"), ("<s>", "size", "big"), ("<s>", "after", "y")],
    );

    let mut handler = CollectingHandler::new();
    let outcome = complete(&mut graph, top, &facts, &mut handler).unwrap();
    match outcome.abort_reason() {
        Some(AbortReason::IncompatibleEdge { triple, edge, kind }) => {
            assert_eq!(triple.attribute.as_str(), "size");
            assert_eq!(*edge, size_edge);
            assert_eq!(kind, "integer");
        }
        other => panic!("expected incompatible edge, got {other:?}"),
    }
    // Work before the abort stays, work after it never happens.
    assert_eq!(graph.edges_labeled(top, "before").len(), 1);
    assert!(graph.edges_labeled(top, "after").is_empty());
    assert_eq!(handler.events.len(), 1);
}

#[test]
fn variable_attribute_aborts_without_events() {
    let mut graph = SchemaGraph::new();
    let top = graph.top_state();
    let facts = state_rule("attr", "<s>", &[("<s>", "<a>", "foo"), ("<s>", "b", "c")]);

    let mut handler = CollectingHandler::new();
    let outcome = complete(&mut graph, top, &facts, &mut handler).unwrap();
    assert!(matches!(
        outcome,
        CompletionOutcome::Aborted(AbortReason::UnresolvedAttribute { .. })
    ));
    assert!(handler.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

// =============================================================================
// Anchors
// =============================================================================

#[test]
fn value_candidate_gets_identifier_sibling() {
    let mut graph = SchemaGraph::new();
    let top = graph.top_state();
    let thing = graph.create_enumeration(["foo"]);
    graph.add_edge(top, "thing", thing).unwrap();
    let facts = state_rule(
        "thing",
        "<s>",
        &[("<s>", "thing", "<t>"), ("<t>", "size", "3")],
    );

    let mut handler = CollectingHandler::new();
    complete(&mut graph, top, &facts, &mut handler).unwrap();
    assert_eq!(
        event_names(&handler),
        vec![
            ("identifier", "thing".to_string()),
            ("integer", "size".to_string()),
        ]
    );
    assert!(graph.find_matching_structural_vertex(thing).is_some());
    assert_eq!(bad_after_match(&mut graph, &facts), 0);

    // The sibling is found, not recreated.
    let mut again = CollectingHandler::new();
    complete(&mut graph, top, &facts, &mut again).unwrap();
    assert!(again.is_empty());
}

#[test]
fn state_variable_count_is_not_checked() {
    let mut graph = SchemaGraph::new();
    let top = graph.top_state();
    let facts = RuleFacts::new(
        "two-states",
        vec![
            Triple::condition("<s>", "a", "x").with_state(),
            Triple::condition("<t>", "b", "y").with_state(),
        ],
    );

    let outcome = complete(&mut graph, top, &facts, &mut NoopHandler).unwrap();
    assert!(outcome.is_completed());
    assert_eq!(graph.edges_labeled(top, "a").len(), 1);
    assert_eq!(graph.edges_labeled(top, "b").len(), 1);
}

#[test]
fn no_state_variable_completes_nothing() {
    let mut graph = SchemaGraph::new();
    let top = graph.top_state();
    let facts = RuleFacts::new("loose", vec![Triple::condition("<x>", "a", "b")]);

    let mut handler = CollectingHandler::new();
    let outcome = complete(&mut graph, top, &facts, &mut handler).unwrap();
    assert!(outcome.is_completed());
    assert!(handler.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

// =============================================================================
// Operator names
// =============================================================================

#[test]
fn new_operator_name_gets_its_own_slot() {
    let mut datamap = load_datamap("blocks_world");
    let top = datamap.graph.top_state();
    let facts = state_rule(
        "wait",
        "<s>",
        &[("<s>", "operator", "<o>"), ("<o>", "name", "wait")],
    );

    let mut handler = CollectingHandler::new();
    complete(&mut datamap.graph, top, &facts, &mut handler).unwrap();
    assert_eq!(
        event_names(&handler),
        vec![
            ("identifier", "operator".to_string()),
            ("enumeration", "name".to_string()),
        ]
    );
    assert_eq!(datamap.graph.edges_labeled(top, "operator").len(), 2);
    assert_eq!(
        members(&datamap.graph, datamap.id("op-move-name")),
        vec!["move-block"]
    );
    assert_eq!(bad_after_match(&mut datamap.graph, &facts), 0);
}

#[test]
fn unnamed_operator_slot_is_reused() {
    let mut graph = SchemaGraph::new();
    let top = graph.top_state();
    let slot = graph.create_identifier();
    graph.add_edge(top, "operator", slot).unwrap();
    let facts = state_rule(
        "wait",
        "<s>",
        &[("<s>", "operator", "<o>"), ("<o>", "name", "wait")],
    );

    let mut handler = CollectingHandler::new();
    complete(&mut graph, top, &facts, &mut handler).unwrap();
    assert_eq!(
        event_names(&handler),
        vec![("enumeration", "name".to_string())]
    );
    assert_eq!(graph.edges_labeled(top, "operator").len(), 1);
    assert_eq!(graph.edges_labeled(slot, "name").len(), 1);
}

#[test]
fn operator_slots_can_be_disabled() {
    let mut datamap = load_datamap("blocks_world");
    let top = datamap.graph.top_state();
    let facts = state_rule(
        "wait",
        "<s>",
        &[("<s>", "operator", "<o>"), ("<o>", "name", "wait")],
    );
    let mut config = DatamapConfig::default();
    config.completion.name_operator_slots = false;

    let mut handler = CollectingHandler::new();
    complete_with(&mut datamap.graph, top, &facts, &mut handler, &config).unwrap();
    assert_eq!(
        event_names(&handler),
        vec![("add_to_enumeration", "name=wait".to_string())]
    );
    assert_eq!(datamap.graph.edges_labeled(top, "operator").len(), 1);
    assert_eq!(
        members(&datamap.graph, datamap.id("op-move-name")),
        vec!["move-block", "wait"]
    );
}

#[test]
fn name_on_top_state_is_plain_enumeration() {
    let mut graph = SchemaGraph::new();
    let top = graph.top_state();
    let facts = state_rule("named", "<s>", &[("<s>", "name", "blocks-world")]);

    let mut handler = CollectingHandler::new();
    complete(&mut graph, top, &facts, &mut handler).unwrap();
    assert_eq!(
        event_names(&handler),
        vec![("enumeration", "name".to_string())]
    );
    assert!(graph.edges_labeled(top, "operator").is_empty());
}

//! Node and edge management tests.

use weighted_graph::{Graph, GraphBuilder, GraphError, NodeId, Weight};

// ==================== Node Lookup Tests ====================

#[test]
fn test_get_or_create_is_idempotent() {
    let mut graph = Graph::new();
    let a1 = graph.get_or_create_node("A");
    let a2 = graph.get_or_create_node("A");
    assert_eq!(a1, a2);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_new_node_has_no_edges() {
    let mut graph = Graph::new();
    let a = graph.get_or_create_node("A");
    let node = graph.node(a).unwrap();
    assert_eq!(node.name(), "A");
    assert_eq!(node.id(), a);
    assert_eq!(node.degree(), 0);
    assert_eq!(node.neighbors().count(), 0);
}

#[test]
fn test_contains_node() {
    let mut graph = Graph::new();
    assert!(!graph.contains_node("A"));
    graph.get_or_create_node("A");
    assert!(graph.contains_node("A"));
    assert!(!graph.contains_node("B"));
    assert_eq!(graph.node_id("B"), None);
    assert!(graph.node_by_name("B").is_none());
}

#[test]
fn test_all_nodes_in_creation_order() {
    let mut graph = Graph::new();
    for name in ["C", "A", "B"] {
        graph.get_or_create_node(name);
    }
    let names: Vec<&str> = graph.all_nodes().map(|n| n.name()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

// ==================== Directed Edge Tests ====================

#[test]
fn test_directed_edge() {
    let mut graph = Graph::new();
    let a = graph.get_or_create_node("A");
    let b = graph.get_or_create_node("B");
    graph.add_directed_edge(a, b, 4).unwrap();

    assert!(graph.has_edge(a, b));
    assert!(!graph.has_edge(b, a));
    assert_eq!(graph.weight(a, b).unwrap(), 4);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_directed_edge_overwrites_weight() {
    let mut graph = Graph::new();
    let a = graph.get_or_create_node("A");
    let b = graph.get_or_create_node("B");
    graph.add_directed_edge(a, b, 4).unwrap();
    graph.add_directed_edge(a, b, 9).unwrap();
    assert_eq!(graph.weight(a, b).unwrap(), 9);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_then_remove_directed_edge() {
    let mut graph = Graph::new();
    let a = graph.get_or_create_node("A");
    let b = graph.get_or_create_node("B");
    graph.add_directed_edge(a, b, 3).unwrap();
    assert_eq!(graph.remove_directed_edge(a, b).unwrap(), 3);
    assert!(!graph.has_edge(a, b));
}

#[test]
fn test_node_level_edge_operations() {
    let mut graph = Graph::new();
    let a = graph.get_or_create_node("A");
    let b = graph.get_or_create_node("B");

    graph.add_directed_edge(a, b, 2).unwrap();

    let node = graph.node(a).unwrap();
    let target = graph.node(b).unwrap();
    assert!(node.has_edge(b));
    assert_eq!(node.weight(target).unwrap(), 2);
    assert_eq!(node.weight_to(b), Some(2));
    assert_eq!(node.edges().collect::<Vec<_>>(), vec![(b, 2)]);
    assert_eq!(target.weight_to(a), None);
}

#[test]
fn test_negative_weight_accepted() {
    let mut graph = Graph::new();
    let (a, b) = graph.add_directed_edge_by_name("A", "B", -5);
    assert_eq!(graph.weight(a, b).unwrap(), -5);
}

// ==================== Undirected Edge Tests ====================

#[test]
fn test_undirected_edge_is_symmetric() {
    let mut graph = Graph::new();
    let a = graph.get_or_create_node("A");
    let b = graph.get_or_create_node("B");
    graph.add_undirected_edge(a, b, 7).unwrap();

    assert!(graph.has_edge(a, b));
    assert!(graph.has_edge(b, a));
    assert_eq!(graph.weight(a, b).unwrap(), 7);
    assert_eq!(graph.weight(b, a).unwrap(), 7);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.undirected_weight(), 7);
}

#[test]
fn test_remove_undirected_edge() {
    let mut graph = Graph::new();
    let (a, b) = graph.add_undirected_edge_by_name("A", "B", 1);
    assert_eq!(graph.remove_undirected_edge(b, a).unwrap(), 1);
    assert!(!graph.has_edge(a, b));
    assert!(!graph.has_edge(b, a));
}

#[test]
fn test_remove_asymmetric_undirected_edge_leaves_graph_unchanged() {
    let mut graph = Graph::new();
    let (a, b) = graph.add_directed_edge_by_name("A", "B", 2);

    match graph.remove_undirected_edge(a, b) {
        Err(GraphError::NoSuchEdge { from, to }) => {
            assert_eq!(from, "B");
            assert_eq!(to, "A");
        }
        other => panic!("Expected NoSuchEdge, got {:?}", other),
    }
    assert!(graph.has_edge(a, b));
}

#[test]
fn test_undirected_self_loop() {
    let mut graph = Graph::new();
    let a = graph.get_or_create_node("A");
    graph.add_undirected_edge(a, a, 6).unwrap();
    assert!(graph.has_edge(a, a));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.undirected_weight(), 6);

    assert_eq!(graph.remove_undirected_edge(a, a).unwrap(), 6);
    assert!(!graph.has_edge(a, a));
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.remove_undirected_edge(a, a).is_err());
}

#[test]
fn test_undirected_weight_saturates() {
    let graph = GraphBuilder::new()
        .undirected("A", "B", Weight::MAX)
        .undirected("B", "C", 1)
        .build();
    assert_eq!(graph.undirected_weight(), Weight::MAX);
    assert_eq!(graph.prim_jarnik().undirected_weight(), Weight::MAX);
}

// ==================== Error Tests ====================

#[test]
fn test_remove_missing_directed_edge() {
    let mut graph = Graph::new();
    let a = graph.get_or_create_node("A");
    let b = graph.get_or_create_node("B");
    assert_eq!(
        graph.remove_directed_edge(a, b),
        Err(GraphError::NoSuchEdge {
            from: "A".to_owned(),
            to: "B".to_owned(),
        })
    );
}

#[test]
fn test_remove_missing_undirected_edge() {
    let mut graph = Graph::new();
    let a = graph.get_or_create_node("A");
    let b = graph.get_or_create_node("B");
    assert_eq!(
        graph.remove_undirected_edge(a, b),
        Err(GraphError::NoSuchEdge {
            from: "A".to_owned(),
            to: "B".to_owned(),
        })
    );
}

#[test]
fn test_weight_of_missing_edge() {
    let mut graph = Graph::new();
    let a = graph.get_or_create_node("A");
    let b = graph.get_or_create_node("B");
    let err = graph.weight(a, b).unwrap_err();
    assert_eq!(
        err,
        GraphError::NoSuchEdge {
            from: "A".to_owned(),
            to: "B".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "No edge from 'A' to 'B'");
}

#[test]
fn test_foreign_handle_rejected() {
    let mut other = Graph::new();
    other.get_or_create_node("X");
    other.get_or_create_node("Y");
    let foreign: NodeId = other.get_or_create_node("Z");

    let mut graph = Graph::new();
    let a = graph.get_or_create_node("A");
    assert_eq!(
        graph.add_directed_edge(a, foreign, 1),
        Err(GraphError::UnknownNode(foreign))
    );
    assert_eq!(
        graph.add_undirected_edge(a, foreign, 1),
        Err(GraphError::UnknownNode(foreign))
    );
    assert_eq!(
        graph.remove_directed_edge(a, foreign),
        Err(GraphError::UnknownNode(foreign))
    );
    assert!(!graph.has_edge(a, foreign));
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.node(a).unwrap().weight_to(foreign).is_none());
}

// ==================== Builder Tests ====================

#[test]
fn test_builder() {
    let graph = GraphBuilder::new()
        .node("lonely")
        .directed("A", "B", 1)
        .undirected("B", "C", 2)
        .build();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    let b = graph.node_id("B").unwrap();
    let c = graph.node_id("C").unwrap();
    assert_eq!(graph.weight(c, b).unwrap(), 2);
    assert_eq!(graph.node_by_name("lonely").unwrap().degree(), 0);
}

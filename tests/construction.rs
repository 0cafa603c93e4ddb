//! Construction, copy, move, and equality semantics.

use dwgraph::Multigraph;

// ==================== Construction ====================

#[test]
fn test_empty_graph() {
    let graph: Multigraph<i32, i32> = Multigraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.nodes().is_empty());
    assert_eq!(graph.begin(), graph.end());
}

#[test]
fn test_from_nodes_sorts_and_dedups() {
    let graph: Multigraph<i32, i32> = Multigraph::from_nodes([3, 1, 2, 1, 3]);
    assert_eq!(graph.nodes(), vec![1, 2, 3]);
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_collect_from_iterator() {
    let graph: Multigraph<String, u32> =
        ["b", "a", "c"].into_iter().map(String::from).collect();
    assert_eq!(
        graph.nodes(),
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );
}

#[test]
fn test_extend_with_nodes() {
    let mut graph: Multigraph<i32, i32> = Multigraph::from_nodes([1, 2]);
    graph.extend([2, 3, 4]);
    assert_eq!(graph.nodes(), vec![1, 2, 3, 4]);
}

#[test]
fn test_default_is_empty() {
    let graph: Multigraph<i32, i32> = Multigraph::default();
    assert!(graph.is_empty());
}

// ==================== Copy and move ====================

#[test]
fn test_clone_is_deep() {
    let mut original: Multigraph<i32, i32> = Multigraph::from_nodes([1, 2, 3]);
    original.insert_edge(1, 2, Some(10)).unwrap();
    original.insert_edge(2, 3, None).unwrap();

    let mut copy = original.clone();
    assert_eq!(original, copy);

    // Mutating the copy never touches the original.
    assert!(copy.erase_edge(&1, &2, Some(&10)).unwrap());
    assert!(copy.insert_node(4));
    copy.insert_edge(3, 4, Some(99)).unwrap();

    assert!(original.is_connected(&1, &2).unwrap());
    assert!(!original.is_node(&4));
    assert_eq!(original.edge_count(), 2);
}

#[test]
fn test_take_leaves_source_empty() {
    let mut source: Multigraph<i32, i32> = Multigraph::from_nodes([1, 2]);
    source.insert_edge(1, 2, Some(5)).unwrap();

    let moved = std::mem::take(&mut source);

    assert!(source.is_empty());
    assert_eq!(source, Multigraph::default());
    assert!(moved.is_connected(&1, &2).unwrap());
}

// ==================== Equality ====================

#[test]
fn test_equality_is_reflexive() {
    let mut graph: Multigraph<i32, i32> = Multigraph::from_nodes([1, 2]);
    graph.insert_edge(1, 2, Some(10)).unwrap();
    graph.insert_edge(1, 2, None).unwrap();
    assert_eq!(graph, graph.clone());
}

#[test]
fn test_equality_ignores_insertion_order() {
    let mut left: Multigraph<i32, i32> = Multigraph::from_nodes([1, 2, 3]);
    left.insert_edge(1, 2, Some(10)).unwrap();
    left.insert_edge(1, 3, Some(20)).unwrap();

    let mut right: Multigraph<i32, i32> = Multigraph::from_nodes([3, 2, 1]);
    right.insert_edge(1, 3, Some(20)).unwrap();
    right.insert_edge(1, 2, Some(10)).unwrap();

    assert_eq!(left, right);
}

#[test]
fn test_inequality_on_weight_and_weightedness() {
    let mut left: Multigraph<i32, i32> = Multigraph::from_nodes([1, 2]);
    left.insert_edge(1, 2, Some(10)).unwrap();

    let mut right = Multigraph::from_nodes([1, 2]);
    right.insert_edge(1, 2, Some(11)).unwrap();
    assert_ne!(left, right);

    let mut unweighted = Multigraph::from_nodes([1, 2]);
    unweighted.insert_edge(1, 2, None).unwrap();
    assert_ne!(left, unweighted);
}

#[test]
fn test_inequality_on_node_set() {
    let left: Multigraph<i32, i32> = Multigraph::from_nodes([1, 2]);
    let right: Multigraph<i32, i32> = Multigraph::from_nodes([1, 2, 3]);
    assert_ne!(left, right);
}

// ==================== Clear ====================

#[test]
fn test_clear_empties_nodes_and_edges() {
    let mut graph: Multigraph<i32, i32> = Multigraph::from_nodes([1, 2, 3]);
    graph.insert_edge(1, 2, Some(10)).unwrap();
    graph.insert_edge(1, 3, Some(20)).unwrap();

    graph.clear();

    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph, Multigraph::new());
}

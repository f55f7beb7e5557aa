use dualpath::algo::reconstruct_full_path;
use dualpath::{bfs_path, get_path, path_string, shortest_shortest_path, AlgorithmError, CostPair, GraphError, UnweightedGraph, WeightedGraph};

fn sample_weighted_graph() -> WeightedGraph<&'static str, u32> {
    vec![
        ("s", vec![("a", 1), ("c", 4)]),
        ("a", vec![("b", 2)]),
        ("b", vec![("c", 1), ("d", 4)]),
        ("c", vec![("d", 3)]),
        ("d", vec![]),
        ("e", vec![("d", 0)]),
    ]
    .into_iter()
    .collect()
}

fn sample_graph() -> UnweightedGraph<&'static str> {
    vec![
        ("s", vec!["a", "b"]),
        ("a", vec!["b"]),
        ("b", vec!["c"]),
        ("c", vec!["a", "d"]),
        ("d", vec![]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_shortest_shortest_path() {
    let result = shortest_shortest_path(&sample_weighted_graph(), &"s").unwrap();

    assert_eq!(result.get(&"s").unwrap().as_tuple(), (0, 0));
    assert_eq!(result.get(&"a").unwrap().as_tuple(), (1, 1));
    assert_eq!(result.get(&"b").unwrap().as_tuple(), (3, 2));
    assert_eq!(result.get(&"c").unwrap().as_tuple(), (4, 1));
    assert_eq!(result.get(&"d").unwrap().as_tuple(), (7, 2));
    // e only has an outgoing edge into the reachable part
    assert!(result.contains(&"e"));
    assert_eq!(result.get(&"e"), None);
}

#[test]
fn test_shortest_shortest_path_float_weights() {
    let graph: WeightedGraph<String, f64> = vec![
        ("s".to_string(), vec![("a".to_string(), 0.5), ("b".to_string(), 1.5)]),
        ("a".to_string(), vec![("b".to_string(), 1.0)]),
        ("b".to_string(), vec![]),
    ]
    .into_iter()
    .collect();

    let result = shortest_shortest_path(&graph, &"s".to_string()).unwrap();
    assert_eq!(result.get(&"b".to_string()).unwrap().as_tuple(), (1.5, 1));
}

#[test]
fn test_bfs_path() {
    let parents = bfs_path(&sample_graph(), &"s").unwrap();

    assert_eq!(parents.parent(&"a"), Some(&"s"));
    assert_eq!(parents.parent(&"b"), Some(&"s"));
    assert_eq!(parents.parent(&"c"), Some(&"b"));
    assert_eq!(parents.parent(&"d"), Some(&"c"));
    assert_eq!(parents.parent(&"s"), None);
}

#[test]
fn test_get_path() {
    let parents = bfs_path(&sample_graph(), &"s").unwrap();

    assert_eq!(get_path(&parents, &"d"), vec!["s", "b", "c"]);
    assert_eq!(path_string(&get_path(&parents, &"d")), "sbc");
    assert!(get_path(&parents, &"s").is_empty());
    assert_eq!(reconstruct_full_path(&parents, &"a"), Some(vec!["s", "a"]));
}

#[test]
fn test_unreachable_sink() {
    let mut graph = sample_graph();
    graph.add_vertex("sink");

    let parents = bfs_path(&graph, &"s").unwrap();
    assert_eq!(parents.parent(&"sink"), None);
    assert!(!parents.is_reached(&"sink"));
    assert!(get_path(&parents, &"sink").is_empty());

    let mut weighted = sample_weighted_graph();
    weighted.add_vertex("sink");
    let table = shortest_shortest_path(&weighted, &"s").unwrap();
    assert!(!table.is_reachable(&"sink"));
}

#[test]
fn test_dangling_reference_is_tolerated() {
    let mut graph = sample_weighted_graph();
    graph.add_edge("d", "nowhere", 1);

    let table = shortest_shortest_path(&graph, &"s").unwrap();
    assert!(!table.contains(&"nowhere"));
    assert_eq!(table.len(), graph.vertex_count());

    let mut plain = sample_graph();
    plain.add_edge("d", "nowhere");
    let parents = bfs_path(&plain, &"s").unwrap();
    assert!(!parents.contains(&"nowhere"));
}

#[test]
fn test_missing_source_is_invalid_input() {
    let err = shortest_shortest_path(&sample_weighted_graph(), &"q").unwrap_err();
    assert!(matches!(err, GraphError::Algorithm(_)));
    assert!(err.to_string().contains("Source vertex not found"));

    assert!(bfs_path(&sample_graph(), &"q").is_err());
}

#[test]
fn test_negative_weight_is_rejected() {
    let graph: WeightedGraph<&str, i64> =
        vec![("s", vec![("a", 2)]), ("a", vec![("s", -1)])].into_iter().collect();
    let err = shortest_shortest_path(&graph, &"s").unwrap_err();
    assert!(err.to_string().contains("Negative edge weight"));
}

#[test]
fn test_max_weight_edge_is_reachable() {
    let graph: WeightedGraph<&str, u32> =
        vec![("s", vec![("a", u32::MAX)]), ("a", vec![])].into_iter().collect();
    let table = shortest_shortest_path(&graph, &"s").unwrap();
    assert!(table.is_reachable(&"a"));
    assert_eq!(table.get(&"a"), Some(&CostPair::new(u32::MAX, 1)));
}

#[test]
fn test_weight_overflow_is_reported() {
    let graph: WeightedGraph<&str, u32> = vec![
        ("s", vec![("a", 3_000_000_000)]),
        ("a", vec![("b", 3_000_000_000)]),
        ("b", vec![]),
    ]
    .into_iter()
    .collect();
    let err = shortest_shortest_path(&graph, &"s").unwrap_err();
    assert!(matches!(err, GraphError::Algorithm(AlgorithmError::WeightOverflow { .. })));
    assert!(err.to_string().contains("overflows"));
}

#[test]
fn test_tables_serialize() {
    let table = shortest_shortest_path(&sample_weighted_graph(), &"s").unwrap();
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["source"], "s");
    assert_eq!(json["costs"]["d"], serde_json::json!({ "weight": 7, "edges": 2 }));
    assert!(json["costs"]["e"].is_null());

    let parents = bfs_path(&sample_graph(), &"s").unwrap();
    let json = serde_json::to_value(&parents).unwrap();
    assert_eq!(json["parents"]["d"], "c");
    assert!(json["parents"]["s"].is_null());
}

#[test]
fn test_idempotence() {
    let weighted = sample_weighted_graph();
    assert_eq!(
        shortest_shortest_path(&weighted, &"s").unwrap(),
        shortest_shortest_path(&weighted, &"s").unwrap()
    );

    let plain = sample_graph();
    assert_eq!(bfs_path(&plain, &"s").unwrap(), bfs_path(&plain, &"s").unwrap());
}

#[test]
fn test_integer_vertices() {
    let graph: UnweightedGraph<u64> =
        vec![(1, vec![2]), (2, vec![3]), (3, vec![1, 4]), (4, vec![])].into_iter().collect();
    let parents = bfs_path(&graph, &1).unwrap();
    assert_eq!(get_path(&parents, &4), vec![1, 2, 3]);
    assert_eq!(path_string(&get_path(&parents, &4)), "123");
}

//! Graph algorithms module
//!
//! Algorithms are implemented in the `dualpath-algorithms` crate.
//! This module provides the integration/adapter layer over the graph stores.

use crate::graph::{GraphResult, UnweightedGraph, WeightedGraph};
use dualpath_algorithms::{GraphView, Weight};
use std::fmt::Debug;
use std::hash::Hash;

// Re-export algorithms
pub use dualpath_algorithms::{
    bfs_tree, dual_metric_shortest_paths, dual_metric_shortest_paths_with_stats, path_string,
    reconstruct_full_path, reconstruct_path, AlgorithmError, CostPair, DistanceTable, ParentTable,
    SearchStats,
};

/// Build a weighted GraphView from the store for algorithm execution
pub fn build_weighted_view<V, W>(graph: &WeightedGraph<V, W>) -> GraphView<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    let view = GraphView::from_weighted_adjacency(
        graph
            .iter()
            .map(|(node, edges)| (node.clone(), edges.iter().cloned())),
    );
    tracing::debug!(
        nodes = view.node_count,
        edges = view.edge_count(),
        dangling = view.dangling_edges,
        "weighted view built"
    );
    view
}

/// Build an unweighted GraphView from the store for algorithm execution
pub fn build_unweighted_view<V>(graph: &UnweightedGraph<V>) -> GraphView<V, ()>
where
    V: Clone + Eq + Hash + Debug,
{
    let view = GraphView::from_adjacency(
        graph
            .iter()
            .map(|(node, targets)| (node.clone(), targets.iter().cloned())),
    );
    tracing::debug!(
        nodes = view.node_count,
        edges = view.edge_count(),
        dangling = view.dangling_edges,
        "unweighted view built"
    );
    view
}

/// For every vertex, the smallest total weight and the fewest edges among
/// paths of that weight, starting from `source`.
pub fn shortest_shortest_path<V, W>(
    graph: &WeightedGraph<V, W>,
    source: &V,
) -> GraphResult<DistanceTable<V, W>>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    let view = build_weighted_view(graph);
    Ok(dual_metric_shortest_paths(&view, source)?)
}

/// Breadth-first parent tree from `source`.
pub fn bfs_path<V>(graph: &UnweightedGraph<V>, source: &V) -> GraphResult<ParentTable<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    let view = build_unweighted_view(graph);
    Ok(bfs_tree(&view, source)?)
}

/// Path leading up to, but excluding, `destination`.
pub fn get_path<V>(parents: &ParentTable<V>, destination: &V) -> Vec<V>
where
    V: Clone + Eq + Hash + Debug,
{
    reconstruct_path(parents, destination)
}

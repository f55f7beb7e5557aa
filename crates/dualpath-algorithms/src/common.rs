//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution.

use crate::cost::Weight;
use crate::error::{AlgoResult, AlgorithmError};
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Vertex identifiers are opaque (`V`); algorithms work on dense indices and
/// translate back through `index_to_node` when building their results.
#[derive(Debug, Clone)]
pub struct GraphView<V, W = f64> {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to the vertex identifier
    pub index_to_node: Vec<V>,
    /// Mapping from vertex identifier to dense index
    pub node_to_index: FxHashMap<V, usize>,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Edge weights: aligned with `out_targets`
    pub weights: Option<Vec<W>>,

    /// Edges dropped at build time because their target is not a vertex
    pub dangling_edges: usize,
}

impl<V, W> GraphView<V, W> {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get weights for outgoing edges of a node
    pub fn weights(&self, idx: usize) -> Option<&[W]> {
        self.weights.as_ref().map(|w| {
            let start = self.out_offsets[idx];
            let end = self.out_offsets[idx + 1];
            &w[start..end]
        })
    }

    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Create a GraphView from dense adjacency lists.
    ///
    /// `outgoing[i]` holds target indices of node `i`; `weights`, when
    /// present, must be shaped like `outgoing`.
    pub fn from_adjacency_list(
        index_to_node: Vec<V>,
        outgoing: Vec<Vec<usize>>,
        weights: Option<Vec<Vec<W>>>,
    ) -> Self
    where
        V: Clone + Eq + Hash,
    {
        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.clone(), idx))
            .collect();

        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut flat_weights = weights.as_ref().map(|_| Vec::new());

        out_offsets.push(0);
        for neighbors in outgoing {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());
        }
        if let (Some(w_flat), Some(rows)) = (flat_weights.as_mut(), weights) {
            for row in rows {
                w_flat.extend(row);
            }
        }
        // Nodes without an adjacency row have no outgoing edges
        while out_offsets.len() < node_count + 1 {
            out_offsets.push(out_targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            weights: flat_weights,
            dangling_edges: 0,
        }
    }

    /// Build a weighted view from `(vertex, [(target, weight)])` rows.
    ///
    /// Every row key becomes a vertex (repeated keys are merged). Edges whose
    /// target is not a row key are dropped and counted in `dangling_edges`.
    pub fn from_weighted_adjacency<I, E>(adjacency: I) -> Self
    where
        V: Clone + Eq + Hash + Debug,
        W: Copy,
        I: IntoIterator<Item = (V, E)>,
        E: IntoIterator<Item = (V, W)>,
    {
        let rows: Vec<(V, Vec<(V, W)>)> = adjacency
            .into_iter()
            .map(|(node, edges)| (node, edges.into_iter().collect()))
            .collect();

        let mut builder = ViewBuilder::new(rows.iter().map(|(node, _)| node));
        let mut weights: Vec<Vec<W>> = vec![Vec::new(); builder.index_to_node.len()];
        for (node, edges) in &rows {
            let u_idx = builder.node_to_index[node];
            for (target, weight) in edges {
                if builder.connect(u_idx, node, target) {
                    weights[u_idx].push(*weight);
                }
            }
        }
        builder.finish(Some(weights))
    }

    /// Build an unweighted view from `(vertex, [target])` rows.
    ///
    /// Same vertex registration and dangling-edge rules as
    /// [`GraphView::from_weighted_adjacency`].
    pub fn from_adjacency<I, E>(adjacency: I) -> Self
    where
        V: Clone + Eq + Hash + Debug,
        I: IntoIterator<Item = (V, E)>,
        E: IntoIterator<Item = V>,
    {
        let rows: Vec<(V, Vec<V>)> = adjacency
            .into_iter()
            .map(|(node, edges)| (node, edges.into_iter().collect()))
            .collect();

        let mut builder = ViewBuilder::new(rows.iter().map(|(node, _)| node));
        for (node, targets) in &rows {
            let u_idx = builder.node_to_index[node];
            for target in targets {
                builder.connect(u_idx, node, target);
            }
        }
        builder.finish(None)
    }
}

impl<V: Eq + Hash, W> GraphView<V, W> {
    /// Dense index of a vertex, if it is part of the view
    pub fn index_of(&self, node: &V) -> Option<usize> {
        self.node_to_index.get(node).copied()
    }

    pub fn contains(&self, node: &V) -> bool {
        self.node_to_index.contains_key(node)
    }
}

impl<V: Debug, W: Weight> GraphView<V, W> {
    /// Outgoing `(target index, weight)` pairs of a node.
    ///
    /// Views built without weights report every edge as `W::ONE`.
    pub fn weighted_successors(&self, idx: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        let start = self.out_offsets[idx];
        self.successors(idx)
            .iter()
            .enumerate()
            .map(move |(i, &target)| {
                let weight = self.weights.as_ref().map_or(W::ONE, |w| w[start + i]);
                (target, weight)
            })
    }

    /// Reject NaN and negative weights before any traversal.
    pub fn validate_weights(&self) -> AlgoResult<()> {
        let Some(weights) = self.weights.as_ref() else {
            return Ok(());
        };

        for u_idx in 0..self.node_count {
            let start = self.out_offsets[u_idx];
            for (i, &v_idx) in self.successors(u_idx).iter().enumerate() {
                let weight = weights[start + i];
                let from = || format!("{:?}", self.index_to_node[u_idx]);
                let to = || format!("{:?}", self.index_to_node[v_idx]);
                if weight.is_nan() {
                    return Err(AlgorithmError::InvalidWeight { from: from(), to: to() });
                }
                if weight.is_negative() {
                    return Err(AlgorithmError::NegativeWeight {
                        from: from(),
                        to: to(),
                        weight: format!("{:?}", weight),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Intermediate adjacency lists collected before CSR flattening
struct ViewBuilder<V> {
    index_to_node: Vec<V>,
    node_to_index: FxHashMap<V, usize>,
    outgoing: Vec<Vec<usize>>,
    dangling_edges: usize,
}

impl<V: Clone + Eq + Hash + Debug> ViewBuilder<V> {
    fn new<'a>(nodes: impl Iterator<Item = &'a V>) -> Self
    where
        V: 'a,
    {
        let mut index_to_node = Vec::new();
        let mut node_to_index = FxHashMap::default();
        for node in nodes {
            if !node_to_index.contains_key(node) {
                node_to_index.insert(node.clone(), index_to_node.len());
                index_to_node.push(node.clone());
            }
        }
        let outgoing = vec![Vec::new(); index_to_node.len()];
        ViewBuilder {
            index_to_node,
            node_to_index,
            outgoing,
            dangling_edges: 0,
        }
    }

    /// Add `u -> target` if the target is a vertex. Returns whether the edge was kept.
    fn connect(&mut self, u_idx: usize, node: &V, target: &V) -> bool {
        match self.node_to_index.get(target) {
            Some(&v_idx) => {
                self.outgoing[u_idx].push(v_idx);
                true
            }
            None => {
                tracing::debug!(from = ?node, to = ?target, "dropping edge to unknown vertex");
                self.dangling_edges += 1;
                false
            }
        }
    }

    fn finish<W>(self, weights: Option<Vec<Vec<W>>>) -> GraphView<V, W> {
        let dangling_edges = self.dangling_edges;
        let mut view = GraphView::from_adjacency_list(self.index_to_node, self.outgoing, weights);
        view.dangling_edges = dangling_edges;
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_layout() {
        let view: GraphView<&str, u32> = GraphView::from_weighted_adjacency(vec![
            ("a", vec![("b", 1), ("c", 2)]),
            ("b", vec![]),
            ("c", vec![("a", 3)]),
        ]);

        assert_eq!(view.node_count, 3);
        assert_eq!(view.out_offsets, vec![0, 2, 2, 3]);
        assert_eq!(view.successors(0), &[1, 2]);
        assert_eq!(view.weights(0), Some(&[1, 2][..]));
        assert_eq!(view.out_degree(1), 0);
        assert_eq!(view.successors(2), &[0]);
        assert_eq!(view.edge_count(), 3);
    }

    #[test]
    fn test_dangling_targets_are_dropped() {
        let view: GraphView<&str, u32> = GraphView::from_weighted_adjacency(vec![
            ("a", vec![("ghost", 1), ("b", 2)]),
            ("b", vec![("phantom", 5)]),
        ]);

        assert_eq!(view.node_count, 2);
        assert_eq!(view.dangling_edges, 2);
        assert!(!view.contains(&"ghost"));
        assert_eq!(view.successors(0), &[1]);
        assert_eq!(view.weights(0), Some(&[2][..]));
        assert_eq!(view.out_degree(1), 0);
    }

    #[test]
    fn test_repeated_keys_are_merged() {
        let view: GraphView<&str> = GraphView::from_adjacency(vec![
            ("a", vec!["b"]),
            ("b", vec![]),
            ("a", vec!["b"]),
        ]);

        assert_eq!(view.node_count, 2);
        assert_eq!(view.index_of(&"a"), Some(0));
        assert_eq!(view.out_degree(0), 2);
        assert!(view.weights.is_none());
    }

    #[test]
    fn test_unweighted_view_reports_unit_weights() {
        let view: GraphView<u64, u32> = GraphView::from_adjacency(vec![(1, vec![2]), (2, vec![])]);
        let edges: Vec<_> = view.weighted_successors(0).collect();
        assert_eq!(edges, vec![(1, 1)]);
    }

    #[test]
    fn test_validate_weights() {
        let negative: GraphView<&str, i64> =
            GraphView::from_weighted_adjacency(vec![("a", vec![("b", -1)]), ("b", vec![])]);
        assert!(matches!(
            negative.validate_weights(),
            Err(AlgorithmError::NegativeWeight { .. })
        ));

        let nan: GraphView<&str, f64> =
            GraphView::from_weighted_adjacency(vec![("a", vec![("b", f64::NAN)]), ("b", vec![])]);
        assert_eq!(
            nan.validate_weights(),
            Err(AlgorithmError::InvalidWeight {
                from: "\"a\"".to_string(),
                to: "\"b\"".to_string(),
            })
        );

        let fine: GraphView<&str, f64> =
            GraphView::from_weighted_adjacency(vec![("a", vec![("b", 0.0)]), ("b", vec![])]);
        assert!(fine.validate_weights().is_ok());
    }
}

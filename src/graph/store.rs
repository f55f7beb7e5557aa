//! In-memory adjacency storage
//!
//! Two stores keyed by opaque vertex identifiers:
//! - `WeightedGraph`: vertex -> ordered `(target, weight)` edges
//! - `UnweightedGraph`: vertex -> ordered set of targets
//!
//! Adding an edge registers its source vertex but not its target. A target
//! that is never added as a vertex is a dangling reference; algorithms
//! tolerate it and never report it.

use dualpath_algorithms::AlgorithmError;
use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Algorithm error: {0}")]
    Algorithm(#[from] AlgorithmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported graph file format: {0}")]
    UnsupportedFormat(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Weighted directed graph
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph<V: Hash + Eq, W = f64> {
    adjacency: IndexMap<V, Vec<(V, W)>>,
}

impl<V: Clone + Hash + Eq, W: Copy + PartialEq> WeightedGraph<V, W> {
    pub fn new() -> Self {
        WeightedGraph { adjacency: IndexMap::new() }
    }

    /// Register a vertex. Returns false if it already existed.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Add `from -> to` with `weight`, registering `from` if needed.
    ///
    /// Exact duplicates are ignored; returns whether the edge was new.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        let edges = self.adjacency.entry(from).or_default();
        if edges.iter().any(|(target, w)| *target == to && *w == weight) {
            return false;
        }
        edges.push((to, weight));
        true
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Outgoing edges of `vertex` in insertion order (empty if unknown)
    pub fn edges(&self, vertex: &V) -> &[(V, W)] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, &[(V, W)])> {
        self.adjacency.iter().map(|(v, edges)| (v, edges.as_slice()))
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// `(from, to)` pairs whose target is not a vertex
    pub fn dangling_references(&self) -> Vec<(&V, &V)> {
        self.adjacency
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |(to, _)| (from, to)))
            .filter(|(_, to)| !self.adjacency.contains_key(*to))
            .collect()
    }

    /// Same topology with weights dropped
    pub fn to_unweighted(&self) -> UnweightedGraph<V> {
        let mut graph = UnweightedGraph::new();
        for (from, edges) in &self.adjacency {
            graph.add_vertex(from.clone());
            for (to, _) in edges {
                graph.add_edge(from.clone(), to.clone());
            }
        }
        graph
    }
}

impl<V: Clone + Hash + Eq, W: Copy + PartialEq> Default for WeightedGraph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, E> FromIterator<(V, E)> for WeightedGraph<V, W>
where
    V: Clone + Hash + Eq,
    W: Copy + PartialEq,
    E: IntoIterator<Item = (V, W)>,
{
    fn from_iter<I: IntoIterator<Item = (V, E)>>(iter: I) -> Self {
        let mut graph = WeightedGraph::new();
        for (from, edges) in iter {
            graph.add_vertex(from.clone());
            for (to, weight) in edges {
                graph.add_edge(from.clone(), to, weight);
            }
        }
        graph
    }
}

/// Unweighted directed graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnweightedGraph<V: Hash + Eq> {
    adjacency: IndexMap<V, IndexSet<V>>,
}

impl<V: Clone + Hash + Eq> UnweightedGraph<V> {
    pub fn new() -> Self {
        UnweightedGraph { adjacency: IndexMap::new() }
    }

    /// Register a vertex. Returns false if it already existed.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, IndexSet::new());
        true
    }

    /// Add `from -> to`, registering `from` if needed. Returns whether the edge was new.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        self.adjacency.entry(from).or_default().insert(to)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Outgoing targets of `vertex` in insertion order
    pub fn neighbors(&self, vertex: &V) -> impl Iterator<Item = &V> {
        self.adjacency.get(vertex).into_iter().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, &IndexSet<V>)> {
        self.adjacency.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexSet::len).sum()
    }

    /// `(from, to)` pairs whose target is not a vertex
    pub fn dangling_references(&self) -> Vec<(&V, &V)> {
        self.adjacency
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (from, to)))
            .filter(|(_, to)| !self.adjacency.contains_key(*to))
            .collect()
    }
}

impl<V: Clone + Hash + Eq> Default for UnweightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> FromIterator<(V, E)> for UnweightedGraph<V>
where
    V: Clone + Hash + Eq,
    E: IntoIterator<Item = V>,
{
    fn from_iter<I: IntoIterator<Item = (V, E)>>(iter: I) -> Self {
        let mut graph = UnweightedGraph::new();
        for (from, targets) in iter {
            graph.add_vertex(from.clone());
            for to in targets {
                graph.add_edge(from.clone(), to);
            }
        }
        graph
    }
}

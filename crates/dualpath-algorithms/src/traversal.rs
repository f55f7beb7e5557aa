//! Breadth-first parent trees and path reconstruction

use super::common::GraphView;
use super::error::{AlgoResult, AlgorithmError};
use indexmap::IndexMap;
use std::collections::VecDeque;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Parent pointers of a shortest-path tree.
///
/// Every vertex of the graph has an entry. The source and vertices that were
/// never reached map to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParentTable<V: Hash + Eq> {
    source: V,
    parents: IndexMap<V, Option<V>>,
}

impl<V: Clone + Hash + Eq> ParentTable<V> {
    /// Wrap an existing parent-pointer tree rooted at `source`.
    pub fn new(source: V, parents: IndexMap<V, Option<V>>) -> Self {
        ParentTable { source, parents }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn parent(&self, node: &V) -> Option<&V> {
        self.parents.get(node).and_then(Option::as_ref)
    }

    pub fn contains(&self, node: &V) -> bool {
        self.parents.contains_key(node)
    }

    /// True for the source and for every vertex with a parent
    pub fn is_reached(&self, node: &V) -> bool {
        *node == self.source || self.parent(node).is_some()
    }

    /// Hops from the root following parent links, `None` if unreached.
    pub fn depth(&self, node: &V) -> Option<usize> {
        if !self.is_reached(node) {
            return None;
        }
        let mut hops = 0;
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            hops += 1;
            if hops > self.parents.len() {
                return None;
            }
            current = parent;
        }
        Some(hops)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, Option<&V>)> {
        self.parents.iter().map(|(node, parent)| (node, parent.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Breadth-first search tree from `source`.
///
/// Edge weights, if the view has any, are ignored. Neighbors are visited in
/// stored order, so the first-discovered parent is deterministic. The source
/// is marked visited up front; a cycle back to it never gives it a parent.
pub fn bfs_tree<V, W>(view: &GraphView<V, W>, source: &V) -> AlgoResult<ParentTable<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    let source_idx = view
        .index_of(source)
        .ok_or_else(|| AlgorithmError::source_not_found(source))?;

    let mut queue = VecDeque::new();
    let mut visited = vec![false; view.node_count];
    let mut parent: Vec<Option<usize>> = vec![None; view.node_count];

    queue.push_back(source_idx);
    visited[source_idx] = true;

    while let Some(current_idx) = queue.pop_front() {
        for &next_idx in view.successors(current_idx) {
            if !visited[next_idx] {
                visited[next_idx] = true;
                parent[next_idx] = Some(current_idx);
                queue.push_back(next_idx);
            }
        }
    }

    let reached = visited.iter().filter(|&&v| v).count();
    tracing::debug!(source = ?source, nodes = view.node_count, reached, "bfs tree built");

    let parents = view
        .index_to_node
        .iter()
        .cloned()
        .zip(parent.into_iter().map(|p| p.map(|idx| view.index_to_node[idx].clone())))
        .collect();

    Ok(ParentTable::new(source.clone(), parents))
}

/// Path from the tree root up to, but not including, `destination`.
///
/// Returns an empty path when `destination` is the root, is unreached, or is
/// not in the table.
pub fn reconstruct_path<V>(parents: &ParentTable<V>, destination: &V) -> Vec<V>
where
    V: Clone + Hash + Eq + Debug,
{
    let mut path = Vec::new();
    if !parents.contains(destination) {
        return path;
    }

    let mut current = Some(destination);
    while let Some(node) = current {
        if path.len() == parents.len() {
            tracing::warn!(destination = ?destination, "parent cycle detected, path truncated");
            break;
        }
        path.push(node.clone());
        current = parents.parent(node);
    }

    path.reverse();
    path.pop();
    path
}

/// Full path from the root to `destination`, both ends included.
///
/// `None` when `destination` was not reached.
pub fn reconstruct_full_path<V>(parents: &ParentTable<V>, destination: &V) -> Option<Vec<V>>
where
    V: Clone + Hash + Eq + Debug,
{
    if !parents.is_reached(destination) {
        return None;
    }
    let mut path = reconstruct_path(parents, destination);
    path.push(destination.clone());
    Some(path)
}

/// Concatenate vertex labels, e.g. `["s", "b", "c"]` -> `"sbc"`
pub fn path_string<V: Display>(path: &[V]) -> String {
    path.iter().map(ToString::to_string).collect()
}

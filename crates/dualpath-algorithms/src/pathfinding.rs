//! Dual-criteria shortest paths
//!
//! For every vertex reachable from a source, finds the smallest total weight
//! and, among the paths achieving it, the smallest number of edges.

use super::common::GraphView;
use super::cost::{CostPair, Weight};
use super::error::{AlgoResult, AlgorithmError};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

/// Best (weight, edge count) per vertex, in graph order.
///
/// Every vertex of the graph has an entry; vertices not reachable from the
/// source map to `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceTable<V: Hash + Eq, W> {
    source: V,
    costs: IndexMap<V, Option<CostPair<W>>>,
}

impl<V: Hash + Eq, W: Weight> DistanceTable<V, W> {
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Cost of a reached vertex; `None` if unreached or not in the graph
    pub fn get(&self, node: &V) -> Option<&CostPair<W>> {
        self.costs.get(node).and_then(Option::as_ref)
    }

    pub fn contains(&self, node: &V) -> bool {
        self.costs.contains_key(node)
    }

    pub fn is_reachable(&self, node: &V) -> bool {
        self.get(node).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, Option<&CostPair<W>>)> {
        self.costs.iter().map(|(node, cost)| (node, cost.as_ref()))
    }

    /// Entries for reachable vertices only
    pub fn reachable(&self) -> impl Iterator<Item = (&V, &CostPair<W>)> {
        self.costs
            .iter()
            .filter_map(|(node, cost)| cost.as_ref().map(|cost| (node, cost)))
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<V, Option<CostPair<W>>> {
        self.costs
    }
}

/// Counters from one search run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Queue entries that were current when popped
    pub expanded: usize,
    /// Queue entries discarded because a better pair was recorded after the push
    pub stale: usize,
    /// Successful relaxations (record overwritten and entry pushed)
    pub relaxations: usize,
}

/// State for the priority queue
#[derive(Copy, Clone, Debug)]
struct State<W> {
    cost: CostPair<W>,
    node_idx: usize,
}

impl<W: Weight> PartialEq for State<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for State<W> {}

impl<W: Weight> Ord for State<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap. The index only makes the order total.
        other
            .cost
            .cmp_cost(&self.cost)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl<W: Weight> PartialOrd for State<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dual-criteria single-source shortest paths.
///
/// Pair A beats pair B iff `A.weight < B.weight`, or the weights are equal
/// and `A.edges < B.edges`. Views without weights count every edge as
/// `W::ONE`.
///
/// Fails with [`AlgorithmError::SourceNotFound`] if `source` is not a vertex
/// of the view, and with [`AlgorithmError::NegativeWeight`] /
/// [`AlgorithmError::InvalidWeight`] if any edge weight is negative or NaN.
/// Infinite float weights are ordinary values: the target is reached with
/// weight infinity.
///
/// Integer sums that do not fit in `W` are never recorded. If such a sum
/// was the only way to reach a vertex, the search fails with
/// [`AlgorithmError::WeightOverflow`] instead of reporting it unreachable.
pub fn dual_metric_shortest_paths<V, W>(
    view: &GraphView<V, W>,
    source: &V,
) -> AlgoResult<DistanceTable<V, W>>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    dual_metric_shortest_paths_with_stats(view, source).map(|(table, _)| table)
}

/// [`dual_metric_shortest_paths`], also returning the search counters.
pub fn dual_metric_shortest_paths_with_stats<V, W>(
    view: &GraphView<V, W>,
    source: &V,
) -> AlgoResult<(DistanceTable<V, W>, SearchStats)>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    let source_idx = view
        .index_of(source)
        .ok_or_else(|| AlgorithmError::source_not_found(source))?;
    view.validate_weights()?;

    let mut best: Vec<Option<CostPair<W>>> = vec![None; view.node_count];
    // Source of the first overflowing relaxation into each vertex
    let mut overflowed: Vec<Option<usize>> = vec![None; view.node_count];
    let mut heap = BinaryHeap::new();
    let mut stats = SearchStats::default();

    best[source_idx] = Some(CostPair::origin());
    heap.push(State { cost: CostPair::origin(), node_idx: source_idx });

    while let Some(State { cost, node_idx }) = heap.pop() {
        // No decrease-key: superseded entries are skipped here
        if best[node_idx].is_some_and(|recorded| cost.is_worse_than(&recorded)) {
            stats.stale += 1;
            continue;
        }
        stats.expanded += 1;

        for (next_idx, weight) in view.weighted_successors(node_idx) {
            // An overflowing sum is heavier than every representable weight
            let Some(candidate) = cost.extend(weight) else {
                overflowed[next_idx].get_or_insert(node_idx);
                continue;
            };

            if candidate.improves(best[next_idx].as_ref()) {
                best[next_idx] = Some(candidate);
                stats.relaxations += 1;
                heap.push(State { cost: candidate, node_idx: next_idx });
            }
        }
    }

    let lost = overflowed
        .iter()
        .enumerate()
        .find_map(|(v_idx, from)| from.filter(|_| best[v_idx].is_none()).map(|u_idx| (u_idx, v_idx)));
    if let Some((u_idx, v_idx)) = lost {
        return Err(AlgorithmError::WeightOverflow {
            from: format!("{:?}", view.index_to_node[u_idx]),
            to: format!("{:?}", view.index_to_node[v_idx]),
        });
    }

    tracing::debug!(
        source = ?source,
        nodes = view.node_count,
        expanded = stats.expanded,
        stale = stats.stale,
        relaxations = stats.relaxations,
        "dual-metric search finished"
    );

    let costs = view.index_to_node.iter().cloned().zip(best).collect();
    Ok((DistanceTable { source: source.clone(), costs }, stats))
}

//! Dualpath
//!
//! Shortest paths over directed graphs keyed by opaque vertex identifiers:
//!
//! - `shortest_shortest_path`: for every vertex reachable from a source, the
//!   minimum total weight and, among paths of that weight, the minimum number
//!   of edges.
//! - `bfs_path`: breadth-first parent tree from a source.
//! - `get_path`: walk a parent tree back to the root.
//!
//! # Example
//!
//! ```
//! use dualpath::{shortest_shortest_path, WeightedGraph};
//!
//! let graph: WeightedGraph<&str, u32> = vec![
//!     ("s", vec![("a", 1), ("c", 4)]),
//!     ("a", vec![("b", 2)]),
//!     ("b", vec![("c", 1), ("d", 4)]),
//!     ("c", vec![("d", 3)]),
//!     ("d", vec![]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let table = shortest_shortest_path(&graph, &"s").unwrap();
//! assert_eq!(table.get(&"d").unwrap().as_tuple(), (7, 2));
//! ```

pub mod algo;
pub mod graph;

pub use algo::{
    bfs_path, build_unweighted_view, build_weighted_view, get_path, path_string,
    shortest_shortest_path, AlgorithmError, CostPair, DistanceTable, ParentTable,
};
pub use graph::{
    load_unweighted_graph, load_weighted_graph, GraphError, GraphFormat, GraphResult,
    UnweightedGraph, WeightedGraph,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

/// Install a fmt subscriber filtered by `directives` (e.g. `"info"`,
/// `"dualpath=debug"`). Intended for binaries; the library itself never
/// installs one.
///
/// Returns `false` when a global subscriber was already set; the existing one
/// stays in place and the refusal is logged through it at debug level.
pub fn init_logging(directives: &str) -> bool {
    let filter = tracing_subscriber::EnvFilter::try_new(directives)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, directives, "tracing subscriber already installed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging("warn");
        // the first call may lose to another test in this binary
        assert!(!init_logging("debug"));
    }
}

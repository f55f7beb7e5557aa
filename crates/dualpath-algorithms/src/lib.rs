pub mod common;
pub mod cost;
pub mod error;
pub mod pathfinding;
pub mod traversal;

pub use common::GraphView;
pub use cost::{CostPair, Weight};
pub use error::{AlgoResult, AlgorithmError};
pub use pathfinding::{dual_metric_shortest_paths, dual_metric_shortest_paths_with_stats, DistanceTable, SearchStats};
pub use traversal::{bfs_tree, path_string, reconstruct_full_path, reconstruct_path, ParentTable};

//! Graph storage
//!
//! Adjacency-mapping stores keyed by opaque vertex identifiers, plus
//! loading them from JSON / YAML graph files.

pub mod file;
pub mod store;

pub use file::{
    load_unweighted_graph, load_weighted_graph, parse_unweighted_graph, parse_weighted_graph,
    GraphFormat,
};
pub use store::{GraphError, GraphResult, UnweightedGraph, WeightedGraph};

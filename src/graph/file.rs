//! Graph files (JSON / YAML)
//!
//! Weighted:
//! ```json
//! { "edges": { "s": [["a", 1], ["c", 4]], "a": [["b", 2]], "b": [] } }
//! ```
//! Unweighted:
//! ```json
//! { "edges": { "s": ["a", "b"], "a": ["b"], "b": [] } }
//! ```

use super::store::{GraphError, GraphResult, UnweightedGraph, WeightedGraph};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// On-disk encoding, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Yaml,
}

impl GraphFormat {
    pub fn from_path(path: &Path) -> GraphResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(GraphFormat::Json),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            _ => Err(GraphError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeightedGraphFile {
    edges: IndexMap<String, Vec<(String, f64)>>,
}

#[derive(Debug, Deserialize)]
struct UnweightedGraphFile {
    edges: IndexMap<String, Vec<String>>,
}

fn decode<T: for<'de> Deserialize<'de>>(text: &str, format: GraphFormat) -> GraphResult<T> {
    Ok(match format {
        GraphFormat::Json => serde_json::from_str(text)?,
        GraphFormat::Yaml => serde_yaml::from_str(text)?,
    })
}

fn report_dangling(dangling: &[(&String, &String)]) {
    for (from, to) in dangling {
        warn!(from = %from, to = %to, "edge target is not a vertex and will be ignored");
    }
}

pub fn parse_weighted_graph(text: &str, format: GraphFormat) -> GraphResult<WeightedGraph<String, f64>> {
    let file: WeightedGraphFile = decode(text, format)?;
    let graph: WeightedGraph<String, f64> = file.edges.into_iter().collect();
    report_dangling(&graph.dangling_references());
    debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), "weighted graph parsed");
    Ok(graph)
}

pub fn parse_unweighted_graph(text: &str, format: GraphFormat) -> GraphResult<UnweightedGraph<String>> {
    let file: UnweightedGraphFile = decode(text, format)?;
    let graph: UnweightedGraph<String> = file.edges.into_iter().collect();
    report_dangling(&graph.dangling_references());
    debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), "unweighted graph parsed");
    Ok(graph)
}

pub fn load_weighted_graph(path: impl AsRef<Path>) -> GraphResult<WeightedGraph<String, f64>> {
    let path = path.as_ref();
    let format = GraphFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    parse_weighted_graph(&text, format)
}

pub fn load_unweighted_graph(path: impl AsRef<Path>) -> GraphResult<UnweightedGraph<String>> {
    let path = path.as_ref();
    let format = GraphFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    parse_unweighted_graph(&text, format)
}

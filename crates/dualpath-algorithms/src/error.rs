//! Error types for graph algorithms

use std::fmt::Debug;
use thiserror::Error;

/// Precondition failures. All are detected before traversal starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// The requested source is not a vertex of the graph
    #[error("Source vertex not found in graph: {vertex}")]
    SourceNotFound { vertex: String },

    /// Relaxation requires non-negative weights
    #[error("Negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    /// NaN weights cannot be ordered
    #[error("Invalid (NaN) edge weight on {from} -> {to}")]
    InvalidWeight { from: String, to: String },

    /// A path weight does not fit in the weight type
    #[error("Path weight overflows on {from} -> {to}")]
    WeightOverflow { from: String, to: String },
}

impl AlgorithmError {
    pub fn source_not_found<V: Debug>(vertex: &V) -> Self {
        AlgorithmError::SourceNotFound {
            vertex: format!("{:?}", vertex),
        }
    }
}

pub type AlgoResult<T> = Result<T, AlgorithmError>;

//! Error types for the clustering core.
//!
//! Invalid inputs are fatal and reported immediately through [`AggloError`].
//! Two failure shapes are deliberately *not* errors: an invalid (NaN or
//! infinite) distance cell is skipped and logged during the nearest-pair
//! search, and a run that halts early because no valid pair remains returns
//! its partial roster through [`crate::clustering::ClusterResult`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AggloError>;

#[derive(Debug, Error)]
pub enum AggloError {
    /// Clustering or matrix construction was handed an empty vector slice.
    #[error("input vector set must not be empty")]
    EmptyInput,

    /// Two vectors of different dimension were compared.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A metric identifier that names no supported metric.
    #[error("unsupported distance metric: {0}")]
    UnknownMetric(String),

    /// A linkage identifier that names no supported linkage.
    #[error("unsupported linkage: {0}")]
    UnknownLinkage(String),

    /// `cut_to_k` called with `k < 1` or `k` above the leaf count.
    #[error("invalid cluster count {requested}: must be between 1 and {leaves}")]
    InvalidClusterCount { requested: usize, leaves: usize },

    /// `cut_by_distance` called with a negative threshold.
    #[error("distance threshold must be non-negative, got {0}")]
    NegativeThreshold(f64),

    /// Configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

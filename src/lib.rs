/// agglo: agglomerative hierarchical clustering in Rust
///
/// Builds a binary merge tree (dendrogram) over labeled fixed-dimension
/// vectors using an incremental Lance-Williams distance update, and cuts or
/// serializes the resulting tree.
///
/// # Modules
/// - `distances`: distance metrics and the pairwise distance matrix.
/// - `clustering`: the merge loop, linkage policies, statistics and config.
/// - `dendrogram`: the merge tree, cut algorithms and document serializer.
pub mod clustering;
pub mod core;
pub mod dendrogram;
pub mod distances;
pub mod error;
pub mod visualization;

pub use error::{AggloError, Result};

pub mod config;
pub mod engine;
pub mod lance_williams;
pub mod stats;

pub use config::Config;
pub use engine::{cluster, ClusterResult, ClusteringEngine, ClusteringParams};
pub use lance_williams::{LanceWilliamsUpdater, Linkage};
pub use stats::MergeStats;

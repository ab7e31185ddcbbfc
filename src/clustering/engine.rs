use crate::clustering::lance_williams::{LanceWilliamsUpdater, Linkage};
use crate::clustering::stats::MergeStats;
use crate::core::float::AggloFloat;
use crate::dendrogram::DendrogramNode;
use crate::distances::{DistanceMatrix, DistanceMatrixBuilder, DistanceMetric, LabeledVector};
use crate::error::{AggloError, Result};
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Instant;

pub struct ClusteringParams<F: AggloFloat> {
    pub metric: Arc<dyn DistanceMetric<F>>,
    pub linkage: Linkage,
}

/// Result of a clustering run.
///
/// A complete run ends with a single root. When no valid pair remains while
/// more than one cluster is active, the run halts early and `roots` holds
/// the partial roster; callers must check [`ClusterResult::is_complete`]
/// before treating the result as a full dendrogram.
#[derive(Debug)]
pub struct ClusterResult<F: AggloFloat> {
    pub roots: Vec<DendrogramNode<F>>,
    pub stats: MergeStats<F>,
}

impl<F: AggloFloat> ClusterResult<F> {
    pub fn is_complete(&self) -> bool {
        self.roots.len() == 1
    }

    pub fn root(&self) -> Option<&DendrogramNode<F>> {
        if self.is_complete() {
            self.roots.first()
        } else {
            None
        }
    }

    pub fn into_root(mut self) -> Option<DendrogramNode<F>> {
        if self.is_complete() {
            self.roots.pop()
        } else {
            None
        }
    }
}

/// The mutable roster of currently-unmerged clusters: each active index
/// holds the cluster's dendrogram node and element count, kept dense (no
/// holes) across merges. An active index doubles as a row/column id into
/// the distance matrix for the whole run.
struct ActiveClusterSet<F: AggloFloat> {
    nodes: Vec<DendrogramNode<F>>,
    sizes: Vec<usize>,
}

impl<F: AggloFloat> ActiveClusterSet<F> {
    fn from_vectors(vectors: &[LabeledVector<F>]) -> Self {
        Self {
            nodes: vectors
                .iter()
                .map(|v| DendrogramNode::leaf(v.label()))
                .collect(),
            sizes: vec![1; vectors.len()],
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Combines the clusters at `i` and `j` (with `i < j`) into a new
    /// internal node stored at slot `i`. Slot `j` is back-filled by the last
    /// active cluster; the caller must relocate the matching matrix row.
    fn merge(&mut self, i: usize, j: usize, distance: F) {
        debug_assert!(i < j);
        let right = self.nodes.swap_remove(j);
        let right_size = self.sizes.swap_remove(j);

        // The placeholder leaf is replaced on the next line.
        let left = std::mem::replace(&mut self.nodes[i], DendrogramNode::leaf(""));
        self.nodes[i] = DendrogramNode::internal(left, right, distance);
        self.sizes[i] += right_size;
    }

    fn into_nodes(self) -> Vec<DendrogramNode<F>> {
        self.nodes
    }
}

/// Orchestrates the agglomerative merge loop: nearest-pair search over the
/// distance matrix, node construction, and the Lance-Williams update, until
/// a single root remains.
pub struct ClusteringEngine<F: AggloFloat> {
    params: ClusteringParams<F>,
}

impl<F: AggloFloat> ClusteringEngine<F> {
    pub fn new(params: ClusteringParams<F>) -> Self {
        Self { params }
    }

    /// Runs the full clustering over `vectors`. Fails on an empty input or a
    /// dimension mismatch; a run with no valid pair left halts early with a
    /// partial roster (see [`ClusterResult`]).
    pub fn cluster(&self, vectors: &[LabeledVector<F>]) -> Result<ClusterResult<F>> {
        if vectors.is_empty() {
            return Err(AggloError::EmptyInput);
        }

        info!(
            "clustering {} vectors with {} linkage",
            vectors.len(),
            self.params.linkage
        );
        let start = Instant::now();

        let mut matrix = DistanceMatrixBuilder::new(self.params.metric.clone()).build(vectors)?;
        let mut active = ActiveClusterSet::from_vectors(vectors);
        let updater = LanceWilliamsUpdater::new(self.params.linkage);
        let mut stats = MergeStats::new();

        while active.len() > 1 {
            let k = active.len();
            let Some((i, j, distance)) = find_nearest_pair(&matrix, k) else {
                error!(
                    "no valid cluster pair among {} active clusters; halting early",
                    k
                );
                break;
            };
            debug!("merging clusters {} and {} at distance {:?}", i, j, distance);
            stats.record(distance);

            // The update reads the pre-merge rows of i and j, so it must run
            // before either index is retired.
            updater.update(&mut matrix, i, j, distance, active.sizes(), k);
            active.merge(i, j, distance);
            matrix.relocate(k - 1, j, active.len());
        }

        info!(
            "clustering completed in {:.3?}: {} merges, {} root(s)",
            start.elapsed(),
            stats.merge_count(),
            active.len()
        );
        Ok(ClusterResult {
            roots: active.into_nodes(),
            stats,
        })
    }
}

/// Convenience entry point: one engine invocation over `vectors`.
pub fn cluster<F: AggloFloat>(
    vectors: &[LabeledVector<F>],
    metric: Arc<dyn DistanceMetric<F>>,
    linkage: Linkage,
) -> Result<ClusterResult<F>> {
    ClusteringEngine::new(ClusteringParams { metric, linkage }).cluster(vectors)
}

/// Scans all unordered pairs among the first `k` indices in row-major order
/// and returns the first pair attaining the minimal valid distance. NaN and
/// infinite cells are skipped (and logged), not fatal.
fn find_nearest_pair<F: AggloFloat>(
    matrix: &DistanceMatrix<F>,
    k: usize,
) -> Option<(usize, usize, F)> {
    let mut best: Option<(usize, usize, F)> = None;
    for i in 0..k {
        for j in (i + 1)..k {
            let distance = matrix.get(i, j);
            if !distance.is_finite() {
                warn!("skipping invalid distance {:?} at [{}][{}]", distance, i, j);
                continue;
            }
            if best.map_or(true, |(_, _, b)| distance < b) {
                best = Some((i, j, distance));
            }
        }
    }
    best
}

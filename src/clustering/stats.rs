use crate::core::float::AggloFloat;
use serde::Serialize;

/// Merge distances in the order the merges occurred, with derived summary
/// values computed on demand. A complete run over n vectors records n−1
/// distances.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MergeStats<F: AggloFloat> {
    distances: Vec<F>,
}

impl<F: AggloFloat> MergeStats<F> {
    pub fn new() -> Self {
        Self {
            distances: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, distance: F) {
        self.distances.push(distance);
    }

    pub fn merge_count(&self) -> usize {
        self.distances.len()
    }

    pub fn distances(&self) -> &[F] {
        &self.distances
    }

    pub fn min(&self) -> Option<F> {
        self.distances
            .iter()
            .copied()
            .fold(None, |acc, d| match acc {
                Some(m) if m <= d => Some(m),
                _ => Some(d),
            })
    }

    pub fn max(&self) -> Option<F> {
        self.distances
            .iter()
            .copied()
            .fold(None, |acc, d| match acc {
                Some(m) if m >= d => Some(m),
                _ => Some(d),
            })
    }

    pub fn mean(&self) -> Option<F> {
        if self.distances.is_empty() {
            return None;
        }
        let sum = self
            .distances
            .iter()
            .fold(F::zero(), |acc, &d| acc + d);
        Some(sum / F::from_usize(self.distances.len()).unwrap_or_else(F::one))
    }
}

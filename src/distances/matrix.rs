use crate::core::float::AggloFloat;
use crate::distances::DistanceMetric;
use crate::error::{AggloError, Result};
use log::debug;
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An immutable fixed-length numeric vector with a string label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")] // AggloFloat already carries the serde impls
pub struct LabeledVector<F: AggloFloat> {
    data: Array1<F>,
    label: String,
}

impl<F: AggloFloat> LabeledVector<F> {
    pub fn new(label: impl Into<String>, data: Array1<F>) -> Self {
        Self {
            data,
            label: label.into(),
        }
    }

    pub fn from_slice(label: impl Into<String>, data: &[F]) -> Self {
        Self::new(label, Array1::from_vec(data.to_vec()))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn view(&self) -> ArrayView1<'_, F> {
        self.data.view()
    }
}

/// Dense symmetric n×n distance store with a zero diagonal.
///
/// Owned exclusively by one clustering run. During merges the engine
/// rewrites rows and columns in place; cells belonging to a retired cluster
/// index must not be read again for the rest of the run.
#[derive(Debug, Clone)]
pub struct DistanceMatrix<F: AggloFloat> {
    cells: Array2<F>,
}

impl<F: AggloFloat> DistanceMatrix<F> {
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::zeros((size, size)),
        }
    }

    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> F {
        self.cells[[i, j]]
    }

    /// Writes `value` into both `(i, j)` and `(j, i)`.
    #[inline]
    pub fn set_symmetric(&mut self, i: usize, j: usize, value: F) {
        self.cells[[i, j]] = value;
        self.cells[[j, i]] = value;
    }

    /// Checks `cell(i,j) == cell(j,i)` everywhere, within a small tolerance.
    pub fn is_symmetric(&self) -> bool {
        let tolerance = F::from(1e-9).unwrap_or_else(F::zero);
        let n = self.size();
        for i in 0..n {
            for j in (i + 1)..n {
                if (self.cells[[i, j]] - self.cells[[j, i]]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }

    /// Moves the row and column at `from` into `to`, restricted to the first
    /// `active` indices. Used when the cluster at `from` takes over the slot
    /// vacated by a retired cluster.
    pub(crate) fn relocate(&mut self, from: usize, to: usize, active: usize) {
        if from == to {
            return;
        }
        for r in 0..active {
            self.cells[[to, r]] = self.cells[[from, r]];
            self.cells[[r, to]] = self.cells[[r, from]];
        }
        self.cells[[to, to]] = F::zero();
    }
}

/// Computes the full pairwise distance matrix once, using a chosen metric.
///
/// Only the upper triangle is computed; values are mirrored and the diagonal
/// stays zero. Cost: O(n²·m) for n vectors of dimension m.
pub struct DistanceMatrixBuilder<F: AggloFloat> {
    metric: Arc<dyn DistanceMetric<F>>,
}

impl<F: AggloFloat> DistanceMatrixBuilder<F> {
    pub fn new(metric: Arc<dyn DistanceMetric<F>>) -> Self {
        Self { metric }
    }

    pub fn build(&self, vectors: &[LabeledVector<F>]) -> Result<DistanceMatrix<F>> {
        if vectors.is_empty() {
            return Err(AggloError::EmptyInput);
        }

        let n = vectors.len();
        debug!("computing {}x{} distance matrix", n, n);

        let mut matrix = DistanceMatrix::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let distance = self
                    .metric
                    .compute(&vectors[i].view(), &vectors[j].view())?;
                matrix.set_symmetric(i, j, distance);
            }
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distances::EuclideanDistance;

    fn points() -> Vec<LabeledVector<f64>> {
        vec![
            LabeledVector::from_slice("A", &[0.0]),
            LabeledVector::from_slice("B", &[1.0]),
            LabeledVector::from_slice("C", &[5.0]),
        ]
    }

    #[test]
    fn test_build_symmetric_zero_diagonal() {
        let builder = DistanceMatrixBuilder::new(Arc::new(EuclideanDistance));
        let matrix = builder.build(&points()).unwrap();

        assert_eq!(matrix.size(), 3);
        assert!(matrix.is_symmetric());
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 0.0);
        }
        assert_eq!(matrix.get(0, 1), 1.0);
        assert_eq!(matrix.get(0, 2), 5.0);
        assert_eq!(matrix.get(2, 1), 4.0);
    }

    #[test]
    fn test_build_empty_input() {
        let builder = DistanceMatrixBuilder::<f64>::new(Arc::new(EuclideanDistance));
        assert!(matches!(builder.build(&[]), Err(AggloError::EmptyInput)));
    }

    #[test]
    fn test_build_dimension_mismatch() {
        let vectors = vec![
            LabeledVector::from_slice("A", &[0.0, 1.0]),
            LabeledVector::from_slice("B", &[1.0]),
        ];
        let builder = DistanceMatrixBuilder::new(Arc::new(EuclideanDistance));
        assert!(matches!(
            builder.build(&vectors),
            Err(AggloError::DimensionMismatch { left: 2, right: 1 })
        ));
    }

    #[test]
    fn test_labeled_vector_serde_round_trip() {
        let vector = LabeledVector::<f64>::from_slice("A", &[1.0, 2.5]);
        let encoded = serde_json::to_string(&vector).unwrap();
        let decoded: LabeledVector<f64> = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.label(), "A");
        assert_eq!(decoded.dim(), 2);
        assert_eq!(decoded.view(), vector.view());
    }

    #[test]
    fn test_relocate_row_col() {
        let builder = DistanceMatrixBuilder::new(Arc::new(EuclideanDistance));
        let mut matrix = builder.build(&points()).unwrap();

        // Move cluster 2's distances into slot 1.
        matrix.relocate(2, 1, 2);
        assert_eq!(matrix.get(0, 1), 5.0);
        assert_eq!(matrix.get(1, 0), 5.0);
        assert_eq!(matrix.get(1, 1), 0.0);
    }
}

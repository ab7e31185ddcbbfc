use crate::core::float::AggloFloat;
use crate::error::{AggloError, Result};
use ndarray::ArrayView1;
use ndarray_stats::DeviationExt;

/// Trait defining the interface for distance metrics
pub trait DistanceMetric<F: AggloFloat>: Send + Sync {
    /// Computes the distance between two points. Errors if the points have
    /// different dimensions.
    fn compute(&self, point1: &ArrayView1<F>, point2: &ArrayView1<F>) -> Result<F>;
}

#[inline]
fn check_dims<F: AggloFloat>(point1: &ArrayView1<F>, point2: &ArrayView1<F>) -> Result<()> {
    if point1.len() != point2.len() {
        return Err(AggloError::DimensionMismatch {
            left: point1.len(),
            right: point2.len(),
        });
    }
    Ok(())
}

/// [Euclidean Distance](https://en.wikipedia.org/wiki/Euclidean_distance)
#[derive(Debug, Clone, Copy)]
pub struct EuclideanDistance;

impl<F: AggloFloat> DistanceMetric<F> for EuclideanDistance {
    #[inline]
    fn compute(&self, point1: &ArrayView1<F>, point2: &ArrayView1<F>) -> Result<F> {
        check_dims(point1, point2)?;
        if point1.is_empty() {
            return Ok(F::zero());
        }
        let squared = point1.sq_l2_dist(point2).map_err(|_| AggloError::DimensionMismatch {
            left: point1.len(),
            right: point2.len(),
        })?;
        Ok(squared.sqrt())
    }
}

/// [Manhattan Distance](https://en.wikipedia.org/wiki/Taxicab_geometry)
#[derive(Debug, Clone, Copy)]
pub struct ManhattanDistance;

impl<F: AggloFloat> DistanceMetric<F> for ManhattanDistance {
    #[inline]
    fn compute(&self, point1: &ArrayView1<F>, point2: &ArrayView1<F>) -> Result<F> {
        check_dims(point1, point2)?;
        if point1.is_empty() {
            return Ok(F::zero());
        }
        point1.l1_dist(point2).map_err(|_| AggloError::DimensionMismatch {
            left: point1.len(),
            right: point2.len(),
        })
    }
}

/// [Cosine Distance](https://en.wikipedia.org/wiki/Cosine_similarity):
/// `1 - (a·b)/(‖a‖·‖b‖)`. If either norm is exactly zero the distance is
/// `1.0` (maximal) instead of dividing by zero.
#[derive(Debug, Clone, Copy)]
pub struct CosineDistance;

impl<F: AggloFloat> DistanceMetric<F> for CosineDistance {
    fn compute(&self, point1: &ArrayView1<F>, point2: &ArrayView1<F>) -> Result<F> {
        check_dims(point1, point2)?;

        let mut dot = F::zero();
        let mut norm1 = F::zero();
        let mut norm2 = F::zero();
        for (&x, &y) in point1.iter().zip(point2.iter()) {
            dot += x * y;
            norm1 += x * x;
            norm2 += y * y;
        }
        let norm1 = norm1.sqrt();
        let norm2 = norm2.sqrt();

        if norm1 == F::zero() || norm2 == F::zero() {
            return Ok(F::one());
        }
        Ok(F::one() - dot / (norm1 * norm2))
    }
}

/// [Hamming Distance](https://en.wikipedia.org/wiki/Hamming_distance)
/// adapted for continuous data: counts positions where the components
/// differ by more than a small tolerance.
#[derive(Debug, Clone, Copy)]
pub struct HammingDistance;

impl HammingDistance {
    const TOLERANCE: f64 = 1e-9;
}

impl<F: AggloFloat> DistanceMetric<F> for HammingDistance {
    fn compute(&self, point1: &ArrayView1<F>, point2: &ArrayView1<F>) -> Result<F> {
        check_dims(point1, point2)?;

        let tolerance = F::from(Self::TOLERANCE).unwrap_or_else(F::zero);
        let differing = point1
            .iter()
            .zip(point2.iter())
            .filter(|&(&x, &y)| (x - y).abs() > tolerance)
            .count();
        Ok(F::from_usize(differing).unwrap_or_else(F::zero))
    }
}

/// Strict Hamming variant for genuinely binary data: counts positions where
/// the components are not exactly equal.
#[derive(Debug, Clone, Copy)]
pub struct BinaryHammingDistance;

impl<F: AggloFloat> DistanceMetric<F> for BinaryHammingDistance {
    fn compute(&self, point1: &ArrayView1<F>, point2: &ArrayView1<F>) -> Result<F> {
        check_dims(point1, point2)?;

        let differing = point1
            .iter()
            .zip(point2.iter())
            .filter(|&(&x, &y)| x != y)
            .count();
        Ok(F::from_usize(differing).unwrap_or_else(F::zero))
    }
}

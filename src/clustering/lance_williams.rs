use crate::core::float::AggloFloat;
use crate::distances::DistanceMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the distance between two clusters is derived from their members'
/// distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Linkage {
    Single,
    Complete,
    Average,
    Centroid,
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Linkage::Single => "Single",
            Linkage::Complete => "Complete",
            Linkage::Average => "Average",
            Linkage::Centroid => "Centroid",
        };
        f.write_str(name)
    }
}

/// Rewrites the distance matrix after a merge using the Lance-Williams
/// recurrence, in O(k) instead of recomputing from raw vectors:
///
/// `d(new, r) = αᵢ·d(i, r) + αⱼ·d(j, r) + γ·d(i, j)`
///
/// Centroid linkage can yield a merge distance below an earlier one (a
/// dendrogram inversion); the formula is applied as given, without a
/// monotonicity correction.
#[derive(Debug, Clone, Copy)]
pub struct LanceWilliamsUpdater {
    linkage: Linkage,
}

struct Coefficients<F> {
    alpha_i: F,
    alpha_j: F,
    gamma: F,
}

impl LanceWilliamsUpdater {
    pub fn new(linkage: Linkage) -> Self {
        Self { linkage }
    }

    pub fn linkage(&self) -> Linkage {
        self.linkage
    }

    /// Rewrites row/column `i` with the distances from the merged cluster to
    /// every other active cluster `r`. Must run before `i` and `j` are
    /// retired, since it reads their pre-merge rows.
    pub fn update<F: AggloFloat>(
        &self,
        matrix: &mut DistanceMatrix<F>,
        i: usize,
        j: usize,
        distance_ij: F,
        sizes: &[usize],
        active: usize,
    ) {
        let params = self.coefficients::<F>(sizes[i], sizes[j]);

        for r in 0..active {
            if r == i || r == j {
                continue;
            }
            let distance_ir = matrix.get(i, r);
            let distance_jr = matrix.get(j, r);
            let updated = params.alpha_i * distance_ir
                + params.alpha_j * distance_jr
                + params.gamma * distance_ij;
            matrix.set_symmetric(i, r, updated);
        }
    }

    fn coefficients<F: AggloFloat>(&self, ni: usize, nj: usize) -> Coefficients<F> {
        let half = F::from(0.5).unwrap_or_else(F::zero);
        let ni = F::from_usize(ni).unwrap_or_else(F::one);
        let nj = F::from_usize(nj).unwrap_or_else(F::one);

        match self.linkage {
            Linkage::Single => Coefficients {
                alpha_i: half,
                alpha_j: half,
                gamma: -half,
            },
            Linkage::Complete => Coefficients {
                alpha_i: half,
                alpha_j: half,
                gamma: half,
            },
            Linkage::Average => Coefficients {
                alpha_i: ni / (ni + nj),
                alpha_j: nj / (ni + nj),
                gamma: F::zero(),
            },
            Linkage::Centroid => Coefficients {
                alpha_i: ni / (ni + nj),
                alpha_j: nj / (ni + nj),
                gamma: -(ni * nj) / ((ni + nj) * (ni + nj)),
            },
        }
    }
}

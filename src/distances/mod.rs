pub mod distance;
pub mod matrix;

pub use distance::{
    BinaryHammingDistance, CosineDistance, DistanceMetric, EuclideanDistance, HammingDistance,
    ManhattanDistance,
};
pub use matrix::{DistanceMatrix, DistanceMatrixBuilder, LabeledVector};

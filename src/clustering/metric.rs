//! Distance metrics for the clustering engine
//!
//! Defines the metric trait the engine is polymorphic over, plus the
//! built-in Euclidean and Manhattan implementations

use crate::clustering::states::NVecD;

/// Trait for distance metrics over position vectors
/// Contract: non-negative, symmetric, zero iff the inputs are identical
pub trait DistanceMetric {
    fn distance(&self, a: &NVecD, b: &NVecD) -> f64;
}

/// Euclidean (L2) distance
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, a: &NVecD, b: &NVecD) -> f64 {
        (a - b).norm()
    }
}

/// Manhattan (L1) distance
pub struct Manhattan;

impl DistanceMetric for Manhattan {
    fn distance(&self, a: &NVecD, b: &NVecD) -> f64 {
        a.iter().zip(b.iter()).map(|(p, q)| (p - q).abs()).sum()
    }
}

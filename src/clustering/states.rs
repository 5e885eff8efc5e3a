//! Core state types for the gravitational clustering simulation.
//!
//! Defines the runtime particle struct:
//! - `Particle` using `NVecD` (runtime-dimensioned position vectors)
//!
//! Each particle keeps its mutable working position `x`, the immutable
//! original position `x0` it was built from, and its mass `m`.

use crate::clustering::metric::DistanceMetric;

use nalgebra::DVector;
pub type NVecD = DVector<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVecD, // working position, mutated by the simulation
    pub x0: NVecD, // original position, never mutated after construction
    pub m: f64, // mass
}

impl Particle {
    /// Build a particle from one dataset row and an optional mass.
    /// `x` and `x0` always share the row's dimension.
    pub fn new(row: &[f64], mass: Option<f64>) -> Self {
        Self {
            x: NVecD::from_row_slice(row),
            x0: NVecD::from_row_slice(row),
            m: mass.unwrap_or(1.0),
        }
    }

    /// Distance to another particle under the given metric. No mutation.
    pub fn distance(&self, other: &Particle, metric: &dyn DistanceMetric) -> f64 {
        metric.distance(&self.x, &other.x)
    }

    /// Pairwise displacement of `a` toward `b` under gravitational constant `g`.
    ///
    /// The metric's output is reused directly as the displacement magnitude,
    /// whatever metric is configured. For non-Euclidean metrics this no longer
    /// matches a physical force model; it is a known modeling limitation of
    /// the algorithm, kept as-is.
    ///
    /// The caller applies the result equal-and-opposite:
    /// `a.x += delta`, `b.x -= delta`.
    pub fn displacement(a: &Particle, b: &Particle, g: f64, metric: &dyn DistanceMetric) -> NVecD {
        // diff is the displacement vector from a to b.
        // a is pulled along +diff, b along -diff.
        let diff = &b.x - &a.x;

        let magnitude = metric.distance(&a.x, &b.x);

        // Inverse-cube scale:
        //   delta = diff * g * m_a * m_b / (2 |r|^3)
        // Coincident particles (magnitude <= 0) get a zero scale, never a
        // division by zero.
        let scale = if magnitude > 0.0 {
            (g * a.m * b.m) / (2.0 * magnitude * magnitude * magnitude)
        } else {
            0.0
        };

        diff * scale
    }
}

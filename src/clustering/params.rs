//! Numerical parameters for the clustering run
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and its per-iteration decay (`g`, `delta_g`),
//! - minimum cluster fraction and threshold scale (`alpha`, `gamma`),
//! - iteration count and random seed

use crate::clustering::error::ClusterError;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub unit_mass: bool, // report group mass as member count instead of summed mass
    pub g: f64, // initial gravitational constant
    pub delta_g: f64, // per-iteration decay factor: g *= 1 - delta_g
    pub alpha: f64, // minimum fraction of the dataset for a retained cluster
    pub gamma: f64, // fraction of the bounding-box diagonal used as merge radius
    pub iterations: usize, // number of full passes per train call
    pub seed: u64, // deterministic seed
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            unit_mass: true,
            g: 1e-4,
            delta_g: 1e-3,
            alpha: 0.03,
            gamma: 0.2,
            iterations: 100,
            seed: 42,
        }
    }
}

impl Parameters {
    /// Check every field against its valid range.
    pub fn validate(&self) -> Result<(), ClusterError> {
        if !(self.g > 0.0) {
            return Err(ClusterError::invalid_parameter(
                "gravitational constant must be > 0",
            ));
        }
        if !(0.0..1.0).contains(&self.delta_g) {
            return Err(ClusterError::invalid_parameter(
                "delta of the gravitational constant must be in [0, 1)",
            ));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ClusterError::invalid_parameter("alpha must be in (0, 1)"));
        }
        if !(self.gamma > 0.0) {
            return Err(ClusterError::invalid_parameter("gamma must be > 0"));
        }
        if self.iterations == 0 {
            return Err(ClusterError::invalid_parameter("iterations must be > 0"));
        }
        Ok(())
    }
}

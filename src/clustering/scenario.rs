//! Build a fully-initialized clustering run from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - a validated engine (`GravitationalClustering`) with the configured
//!   metric installed
//! - the dataset rows and optional masses to feed it
//!
//! The CLI loads a YAML file into `ScenarioConfig` and consumes the bundle
//! through [`Scenario::train`]

use crate::clustering::engine::{GravitationalClustering, RunResult};
use crate::clustering::error::ClusterError;
use crate::clustering::metric::{Euclidean, Manhattan};
use crate::clustering::params::Parameters;
use crate::configuration::config::{MetricConfig, ScenarioConfig};

/// Runtime bundle: engine plus the dataset it will be trained on
pub struct Scenario {
    pub engine: GravitationalClustering,
    pub points: Vec<Vec<f64>>,
    pub masses: Option<Vec<f64>>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ClusterError> {
        // Parameters (runtime) from OptionsConfig, with reference defaults
        // filled in for absent fields
        let defaults = Parameters::default();
        let o = cfg.options;
        let params = Parameters {
            unit_mass: o.unit_mass.unwrap_or(defaults.unit_mass),
            g: o.gravitational_constant.unwrap_or(defaults.g),
            delta_g: o
                .delta_gravitational_constant
                .unwrap_or(defaults.delta_g),
            alpha: o.alpha.unwrap_or(defaults.alpha),
            gamma: o.gamma.unwrap_or(defaults.gamma),
            iterations: o.iterations.unwrap_or(defaults.iterations),
            seed: o.seed.unwrap_or(defaults.seed),
        };

        let engine = GravitationalClustering::new(params)?;
        let engine = match o.dist.unwrap_or(MetricConfig::Euclidean) {
            MetricConfig::Euclidean => engine.with_metric(Euclidean),
            MetricConfig::Manhattan => engine.with_metric(Manhattan),
        };

        Ok(Self {
            engine,
            points: cfg.points,
            masses: cfg.masses,
        })
    }

    /// Train the engine on the bundled dataset
    pub fn train(&mut self) -> Result<RunResult, ClusterError> {
        self.engine.train(&self.points, self.masses.as_deref())
    }
}

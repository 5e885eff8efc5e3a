//! Configuration types for loading clustering scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! clustering scenario. A scenario consists of:
//!
//! - [`OptionsConfig`]  – engine options (constants, threshold fractions, seed)
//! - [`MetricConfig`]   – which distance metric to install
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! options:
//!   unit_mass: true                       # group mass = member count
//!   gravitational_constant: 1.0e-4        # initial G
//!   delta_gravitational_constant: 1.0e-3  # per-iteration decay, G *= 1 - delta
//!   alpha: 0.03                           # minimum cluster fraction
//!   gamma: 0.2                            # merge radius as bounding-box fraction
//!   dist: "euclidean"                     # or "manhattan"
//!   iterations: 100
//!   seed: 42
//!
//! points:
//!   - [ 0.0, 0.1 ]
//!   - [ 0.2, 0.0 ]
//!   - [ 5.0, 5.1 ]
//!   - [ 5.2, 5.0 ]
//!
//! masses: [ 1.0, 1.0, 2.0, 2.0 ]   # optional, parallel to points
//! ```
//!
//! Absent option fields fall back to the engine defaults when the scenario
//! is built into its runtime representation.

use serde::Deserialize;

/// Which distance metric the engine uses
/// `dist: "euclidean"` or `dist: "manhattan"`
#[derive(Deserialize, Debug, Clone)]
pub enum MetricConfig {
    #[serde(rename = "euclidean")] // L2 norm of the coordinate difference
    Euclidean,

    #[serde(rename = "manhattan")] // sum of absolute per-coordinate differences
    Manhattan,
}

/// Engine options for a scenario
/// Every field is optional; absent fields take the reference defaults
#[derive(Deserialize, Debug, Default)]
pub struct OptionsConfig {
    pub unit_mass: Option<bool>, // group mass as member count vs summed mass
    pub gravitational_constant: Option<f64>, // initial G (> 0)
    pub delta_gravitational_constant: Option<f64>, // decay per iteration, in [0, 1)
    pub alpha: Option<f64>, // minimum cluster fraction, in (0, 1)
    pub gamma: Option<f64>, // merge-threshold scale (> 0)
    pub dist: Option<MetricConfig>, // distance metric
    pub iterations: Option<usize>, // passes per train call (> 0)
    pub seed: Option<u64>, // deterministic seed
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub options: OptionsConfig, // engine options (all defaultable)
    pub points: Vec<Vec<f64>>, // dataset rows, one fixed dimension
    pub masses: Option<Vec<f64>>, // optional masses, parallel to points
}

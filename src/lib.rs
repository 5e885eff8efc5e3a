pub mod clustering;
pub mod configuration;
pub mod benchmark;

pub use clustering::states::{Particle, NVecD};
pub use clustering::params::Parameters;
pub use clustering::metric::{DistanceMetric, Euclidean, Manhattan};
pub use clustering::random::{RandomSource, SeededRng};
pub use clustering::connectivity::ConnectivityTracker;
pub use clustering::engine::{GravitationalClustering, RunResult};
pub use clustering::error::ClusterError;
pub use clustering::scenario::Scenario;

pub use configuration::config::{MetricConfig, OptionsConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_train, bench_train_curve};

//! The gravitational clustering engine
//!
//! Owns the configuration, the particle set, the connectivity tracker and the
//! iteration/grouping algorithm. `train` ingests a dataset and derives the
//! merge threshold, `run` performs the attraction passes and the final
//! grouping/outlier split.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::clustering::connectivity::ConnectivityTracker;
use crate::clustering::error::ClusterError;
use crate::clustering::metric::{DistanceMetric, Euclidean};
use crate::clustering::params::Parameters;
use crate::clustering::random::{RandomSource, SeededRng};
use crate::clustering::states::{NVecD, Particle};

/// Output of one `run` call
///
/// `x` and `y` are parallel: `y[i]` is the label of the retained point
/// `x[i]`. Labels are the group's position in the full group enumeration,
/// outlier slots included; they are not compacted to `0..k-1`. `outliers`
/// is the accumulated outlier list, which persists and grows across repeated
/// `run` calls without an intervening `train`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub outliers: Vec<NVecD>, // original positions of outlier-group members
    pub x: Vec<NVecD>, // original positions of retained points
    pub y: Vec<usize>, // cluster label per retained point
    pub clusters: usize, // total groups found, retained and outlier combined
}

/// Gravitational clustering engine
///
/// Each engine instance owns its mutable simulation state (particle
/// positions, connectivity, the decaying gravitational constant); nothing is
/// ambient or global. The engine is polymorphic only over the injected
/// distance metric and random source.
pub struct GravitationalClustering {
    params: Parameters,
    g: f64, // current gravitational constant, decays once per iteration
    eps: f64, // merge-distance threshold, derived from the bounding box
    particles: Vec<Particle>,
    tracker: ConnectivityTracker,
    outliers: Vec<NVecD>, // accumulated across run calls, cleared by train
    metric: Box<dyn DistanceMetric + Send + Sync>,
    rng: Box<dyn RandomSource + Send + Sync>,
}

impl GravitationalClustering {
    /// Create an engine with validated parameters, the Euclidean metric and
    /// a seeded default generator.
    pub fn new(params: Parameters) -> Result<Self, ClusterError> {
        params.validate()?;
        let seed = params.seed;
        Ok(Self {
            g: params.g,
            eps: 0.0,
            params,
            particles: Vec::new(),
            tracker: ConnectivityTracker::new(0),
            outliers: Vec::new(),
            metric: Box::new(Euclidean),
            rng: Box::new(SeededRng::new(seed)),
        })
    }

    /// Replace the distance metric
    pub fn with_metric(mut self, metric: impl DistanceMetric + Send + Sync + 'static) -> Self {
        self.metric = Box::new(metric);
        self
    }

    /// Replace the random source
    pub fn with_random(mut self, rng: impl RandomSource + Send + Sync + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Current merge threshold (0.0 before the first `train`)
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Current (decayed) gravitational constant
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Number of particles currently loaded
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Ingest a dataset and run the configured number of iterations.
    ///
    /// Validation happens before any state mutation: the call either fully
    /// succeeds or fails without touching the engine. On success the
    /// particle set, merge threshold and connectivity are rebuilt and the
    /// outlier accumulator is cleared; the decayed gravitational constant is
    /// deliberately left alone across `train` calls.
    pub fn train(
        &mut self,
        x: &[Vec<f64>],
        masses: Option<&[f64]>,
    ) -> Result<RunResult, ClusterError> {
        if x.is_empty() {
            return Err(ClusterError::EmptyInput);
        }

        let dim = x[0].len();
        for (i, row) in x.iter().enumerate() {
            if row.len() != dim {
                return Err(ClusterError::dimension_mismatch(i, dim, row.len()));
            }
        }

        if let Some(masses) = masses {
            if masses.len() != x.len() {
                return Err(ClusterError::invalid_parameter(format!(
                    "masses length {} does not match dataset length {}",
                    masses.len(),
                    x.len()
                )));
            }
        }

        // No distinct partner exists for rejection sampling below two
        // particles; reject eagerly instead of looping forever inside run.
        if x.len() < 2 {
            return Err(ClusterError::InsufficientParticles { actual: x.len() });
        }

        // Per-dimension bounding box, accumulated while building particles
        let mut lo = NVecD::from_element(dim, f64::INFINITY);
        let mut hi = NVecD::from_element(dim, f64::NEG_INFINITY);

        self.particles.clear();
        for (i, row) in x.iter().enumerate() {
            for (j, &c) in row.iter().enumerate() {
                lo[j] = lo[j].min(c);
                hi[j] = hi[j].max(c);
            }
            self.particles.push(Particle::new(row, masses.map(|m| m[i])));
        }

        // eps = gamma * metric(max corner, min corner); 0 for a degenerate
        // dataset, which keeps exact-zero distances from merging below
        self.eps = self.params.gamma * self.metric.distance(&hi, &lo);
        self.tracker = ConnectivityTracker::new(self.particles.len());
        self.outliers.clear();

        debug!(
            n = self.particles.len(),
            dim,
            eps = self.eps,
            "dataset ingested"
        );

        self.run(self.params.iterations)
    }

    /// Run `iterations` attraction passes and return the grouping.
    ///
    /// May be called again on an already-trained engine: particles, masses
    /// and connectivity carry over, only `train` resets them. Each pass
    /// visits every particle index `j` in ascending order, draws a distinct
    /// random partner `k`, displaces the pair toward each other, and merges
    /// their classes when the post-move distance falls strictly below eps.
    /// The gravitational constant decays once per pass.
    pub fn run(&mut self, iterations: usize) -> Result<RunResult, ClusterError> {
        let n = self.particles.len();
        if n < 2 {
            return Err(ClusterError::InsufficientParticles { actual: n });
        }

        for _ in 0..iterations {
            for j in 0..n {
                // rejection sampling: redraw until the partner is distinct;
                // terminates with probability 1 in expected O(1) draws for n >= 2
                let mut k = self.rng.next_int(n);
                while k == j {
                    k = self.rng.next_int(n);
                }

                self.attract(k, j);

                let d = self.particles[j].distance(&self.particles[k], self.metric.as_ref());
                if d < self.eps {
                    self.tracker.union(j, k);
                }
            }
            self.g *= 1.0 - self.params.delta_g;
        }

        debug!(g = self.g, "iteration passes complete");

        Ok(self.collect_groups())
    }

    /// Displace particles `a` and `b` toward each other with the current
    /// gravitational constant, applying equal and opposite moves.
    fn attract(&mut self, a: usize, b: usize) {
        let delta = Particle::displacement(
            &self.particles[a],
            &self.particles[b],
            self.g,
            self.metric.as_ref(),
        );
        self.particles[a].x += &delta;
        self.particles[b].x -= &delta;
    }

    /// Mass of one connectivity group: member count under `unit_mass`,
    /// summed particle mass otherwise.
    fn group_mass(&self, members: &[usize]) -> f64 {
        if self.params.unit_mass {
            members.len() as f64
        } else {
            members.iter().map(|&i| self.particles[i].m).sum()
        }
    }

    /// Partition particle indices by connectivity representative and split
    /// the groups into retained clusters and outliers.
    fn collect_groups(&mut self) -> RunResult {
        let n = self.particles.len();

        // groups enumerated in first-encounter order while scanning 0..n,
        // so members within a group stay in ascending particle-index order
        let mut slot: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for i in 0..n {
            let rep = self.tracker.find(i);
            let gi = *slot.entry(rep).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[gi].push(i);
        }

        let min_size = self.params.alpha * n as f64;
        let mut x = Vec::new();
        let mut y = Vec::new();
        let mut retained = 0usize;

        for (label, members) in groups.iter().enumerate() {
            debug!(
                label,
                size = members.len(),
                mass = self.group_mass(members),
                outlier = (members.len() as f64) < min_size,
                "group"
            );
            if (members.len() as f64) < min_size {
                for &i in members {
                    self.outliers.push(self.particles[i].x0.clone());
                }
            } else {
                retained += 1;
                for &i in members {
                    x.push(self.particles[i].x0.clone());
                    y.push(label);
                }
            }
        }

        info!(
            clusters = groups.len(),
            retained,
            labeled_points = x.len(),
            outliers = self.outliers.len(),
            "grouping complete"
        );

        RunResult {
            outliers: self.outliers.clone(),
            x,
            y,
            clusters: groups.len(),
        }
    }
}

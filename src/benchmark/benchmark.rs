use std::time::Instant;
use crate::clustering::engine::GravitationalClustering;
use crate::clustering::params::Parameters;

/// Helper to build a deterministic 2D dataset of size `n`
fn make_points(n: usize) -> Vec<Vec<f64>> {
    let mut points = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        points.push(vec![(i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0]);
    }

    points
}

/// Helper to build benchmark parameters
/// Fewer iterations than the default so large n stays tractable
fn make_params(iterations: usize) -> Parameters {
    Parameters {
        iterations,
        ..Parameters::default()
    }
}

pub fn bench_train() {
    // Different dataset sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let iterations = 20;

    for n in ns {
        let points = make_points(n);

        // Warm up
        let mut warm = GravitationalClustering::new(make_params(iterations))
            .expect("benchmark parameters are valid");
        warm.train(&points, None).expect("benchmark dataset is valid");

        let mut engine = GravitationalClustering::new(make_params(iterations))
            .expect("benchmark parameters are valid");

        let t0 = Instant::now();
        let result = engine.train(&points, None).expect("benchmark dataset is valid");
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, train = {:8.6} s, clusters = {}, outliers = {}",
            dt,
            result.clusters,
            result.outliers.len()
        );
    }
}

/// Benchmark train for a range of n
/// Paste output directly into excel to graph
pub fn bench_train_curve() {
    println!("N,train_ms");

    // Steps of 200 to give smoother graph
    for n in (200..=6400).step_by(200) {
        // Small n: average over a few runs to smooth noise
        // Large n: only 1 run to avoid minutes of runtime
        let runs = if n <= 800 { 5 } else { 1 };
        let iterations = 20;

        let points = make_points(n);

        let t0 = Instant::now();
        for _ in 0..runs {
            let mut engine = GravitationalClustering::new(make_params(iterations))
                .expect("benchmark parameters are valid");
            engine.train(&points, None).expect("benchmark dataset is valid");
        }
        let elapsed = t0.elapsed().as_secs_f64() * 1000.0; // ms total
        let ms = elapsed / runs as f64;

        println!("{},{:.6}", n, ms);
    }
}

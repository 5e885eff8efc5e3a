use gclust::{Scenario, ScenarioConfig};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "scenarios/clusters.yaml")]
    file_name: String,

    /// Run the scaling benchmarks instead of a scenario
    #[arg(long, default_value_t = false)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if args.bench {
        gclust::bench_train();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    let result = scenario.train()?;

    println!(
        "groups = {}, labeled points = {}, outliers = {}",
        result.clusters,
        result.x.len(),
        result.outliers.len()
    );
    for (point, label) in result.x.iter().zip(result.y.iter()) {
        println!("{label}: {:?}", point.as_slice());
    }
    for point in &result.outliers {
        println!("outlier: {:?}", point.as_slice());
    }

    Ok(())
}

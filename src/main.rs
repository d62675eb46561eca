use fallsim::{ScenarioConfig, Scenario};
use fallsim::bench_quadrature;

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "parachutist.yaml")]
    file_name: String,

    /// Seed for the non-uniform grid, overrides the scenario file
    #[arg(long)]
    seed: Option<u64>,

    /// Also print the absolute error of every entry
    #[arg(long)]
    errors: bool,

    /// Time the equally spaced rules instead of printing the report
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if args.seed.is_some() {
        scenario_cfg.run.seed = args.seed;
    }

    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.bench {
        bench_quadrature(&scenario.constants, scenario.target_time, scenario.analytical_solution)?;
        return Ok(());
    }

    let table = scenario.run();
    print!("{}", scenario.report(&table));

    if args.errors {
        println!();
        print!("{}", table.render_errors(scenario.analytical_solution));
    }

    Ok(())
}

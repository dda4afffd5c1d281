use orbitsim::{build_scenario, bench_step, ScenarioConfig};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Number of ticks to run
    #[arg(short = 'n', long, default_value_t = 10_000)]
    ticks: u64,

    /// Time the stepper instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut sim = build_scenario(scenario_cfg)?;
    log::info!("loaded {} with {} bodies", args.file_name, sim.len());

    let mass_before = sim.total_mass();
    for _ in 0..args.ticks {
        let report = sim.step();
        if !report.removed.is_empty() {
            log::info!(
                "t = {:.2} yr: merged {:?} into {:?}",
                sim.years(),
                report.removed,
                report.created
            );
        }
    }

    log::info!(
        "finished {} ticks: {:.2} years, {} bodies, mass drift {:e} kg",
        args.ticks,
        sim.years(),
        sim.len(),
        sim.total_mass() - mass_before
    );
    for b in sim.snapshot() {
        println!(
            "{} x = ({:.4e}, {:.4e}) m  v = ({:.4e}, {:.4e}) m/s",
            b.id, b.position.x, b.position.y, b.velocity.x, b.velocity.y
        );
    }

    Ok(())
}

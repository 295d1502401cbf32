use ropesim::{ScenarioConfig, Scenario};
use ropesim::bench_step_curve;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Mass-spring rope draped over a sphere")]
struct Args {
    /// Scenario file, looked up in `scenarios/` unless it is an existing path
    #[arg(short, default_value = "rope.yaml")]
    file_name: String,

    /// Run without a window even when the viewer is compiled in
    #[arg(long)]
    headless: bool,

    /// Number of ticks for the headless run
    #[arg(long, default_value_t = 200)]
    steps: u64,

    /// Print the final particle positions as YAML (headless only)
    #[arg(long)]
    dump: bool,

    /// Time `step` over a range of rope sizes and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    info!(path = %config_path.display(), "scenario loaded");

    Ok(scenario_cfg)
}

/// Drive the scenario without rendering: unpause, tick `steps` times
fn run_headless(mut scenario: Scenario, steps: u64, dump: bool) -> Result<()> {
    scenario.engine.paused = false;

    for _ in 0..steps {
        scenario.tick();
        if !scenario.simulator.is_finite() {
            warn!(step = scenario.simulator.step_count(), "rope state is no longer finite");
            break;
        }
    }

    let sim = &scenario.simulator;
    let lowest = sim.positions().map(|p| p.y).fold(f64::INFINITY, f64::min);
    info!(steps = sim.step_count(), lowest_y = lowest, "headless run finished");

    if dump {
        print!("{}", serde_yaml::to_string(&sim.snapshot())?);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    if !args.headless {
        #[cfg(feature = "viewer")]
        {
            ropesim::run_3d(scenario);
            return Ok(());
        }
        #[cfg(not(feature = "viewer"))]
        info!("built without the `viewer` feature, running headless");
    }

    run_headless(scenario, args.steps, args.dump)
}

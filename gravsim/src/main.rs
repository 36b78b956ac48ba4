use gravsim::{bench_field, bench_integrate};
use gravsim::{Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless 2D N-body gravity simulator")]
struct Args {
    /// Scenario file; bare names are looked up under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Number of ticks to run
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Log a status line every this many ticks
    #[arg(long, default_value_t = 10)]
    log_every: u64,

    /// Sample the whole-world gravity field after the run
    #[arg(long)]
    field: bool,

    /// Run the timing suite instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario(file_name: &str) -> Result<ScenarioConfig> {
    let path = scenario_path(file_name);
    debug!("loading scenario from {}", path.display());
    ScenarioConfig::load(&path).with_context(|| format!("failed to load scenario {}", path.display()))
}

fn mean_speed(scenario: &Scenario) -> f64 {
    let bodies = &scenario.universe.bodies;
    if bodies.is_empty() {
        return 0.0;
    }
    bodies.iter().map(|b| b.velocity.magnitude.abs()).sum::<f64>() / bodies.len() as f64
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    if args.bench {
        bench_integrate();
        bench_field();
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg);

    let log_every = args.log_every.max(1);
    for tick in 1..=args.ticks {
        scenario.tick();

        if tick % log_every == 0 {
            info!(
                "tick={} | bodies={} | G={} | mean speed={:.6}",
                tick,
                scenario.universe.len(),
                scenario.universe.gravitational_constant,
                mean_speed(&scenario)
            );
        }
    }

    if args.field {
        let grid = scenario.total_field();
        info!("field grid {}x{}, max={}", grid.width(), grid.height(), grid.max);
    }

    Ok(())
}

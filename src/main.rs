use chaosim::{ScenarioConfig, Scenario, AttractorKind};
use chaosim::{bench_tick, bench_generate, bench_trail_curve};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Integrate Lorenz / Rossler attractors headlessly")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "lorenz_live.yaml")]
    file_name: String,

    /// Override the number of live ticks
    #[arg(long)]
    steps: Option<u64>,

    /// Override the attractor (`lorenz` or `rossler`)
    #[arg(long)]
    attractor: Option<AttractorKind>,

    /// Override the live particle count
    #[arg(long, allow_negative_numbers = true)]
    particles: Option<i64>,

    /// Write the final snapshot as YAML
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,

    #[arg(short, long)]
    verbose: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    if args.bench {
        bench_tick();
        bench_generate();
        bench_trail_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    // CLI overrides go through the same validation as UI changes
    if let Some(kind) = args.attractor {
        scenario.set_attractor(kind)?;
    }
    if let Some(count) = args.particles {
        scenario.set_particle_count(count)?;
    }
    let steps = args.steps.unwrap_or(scenario.engine.steps);

    let diverged = scenario.run(steps)?;
    if diverged > 0 {
        warn!(diverged, "some trajectories left the finite range");
    }

    match scenario.preview() {
        Some(preview) => info!(
            points = preview.points().len(),
            finite = preview.is_finite(),
            "preview generated"
        ),
        None => {
            for (id, p) in scenario.particles().positions().enumerate() {
                info!(id, x = p.x, y = p.y, z = p.z, "final position");
            }
        }
    }

    if let Some(path) = args.output {
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        serde_yaml::to_writer(BufWriter::new(file), &scenario.snapshot())?;
        info!(path = %path.display(), "snapshot written");
    }

    scenario.teardown();

    Ok(())
}

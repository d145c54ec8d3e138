use chaosim::{AttractorKind, ConfigError, RunMode, Scenario, ScenarioConfig};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

fn parse(yaml: &str) -> ScenarioConfig {
    serde_yaml::from_str(yaml).expect("scenario yaml should parse")
}

fn build(yaml: &str) -> Result<Scenario, ConfigError> {
    Scenario::build_scenario(parse(yaml))
}

const MINIMAL: &str = r#"
engine:
  mode: "live"
attractor: "lorenz"
parameters:
  dt: 0.01
"#;

#[test]
fn minimal_scenario_takes_defaults() {
    let scenario = build(MINIMAL).unwrap();

    assert_eq!(scenario.attractor(), AttractorKind::Lorenz);
    assert_eq!(scenario.engine.mode, RunMode::Live);
    assert_eq!(scenario.engine.steps, 1000);
    assert_eq!(scenario.particles().len(), 1);
    assert_eq!(scenario.particles().trail_capacity(), 3000);
    assert_eq!(scenario.parameters().lorenz.rho, 28.0);
    assert_eq!(scenario.parameters().rossler.c, 5.7);
    assert!(scenario.engine.render.show_trail);
    assert_eq!(scenario.engine.render.trail_color, "#00ffff");
    assert!(scenario.preview().is_none());
}

#[test]
fn preview_scenario_generates_on_build() {
    let scenario = build(
        r##"
engine:
  mode: "preview"
attractor: "Rossler"
parameters:
  dt: 0.02
  rossler: { a: 0.1, b: 0.1, c: 14.0 }
preview:
  num_points: 250
  seed: [1.0, 1.0, 1.0]
render:
  trail_color: "#ff8800"
"##,
    )
    .unwrap();

    let preview = scenario.preview().unwrap();
    assert_eq!(preview.kind(), AttractorKind::Rossler);
    assert_eq!(preview.points().len(), 251);
    assert_eq!(preview.points()[0].x, 1.0);
    assert_eq!(scenario.parameters().rossler.c, 14.0);
    assert_eq!(scenario.engine.render.trail_color, "#ff8800");
}

#[test]
fn unknown_attractor_is_a_config_error() {
    let yaml = MINIMAL.replace("lorenz", "duffing");
    assert_eq!(build(&yaml).unwrap_err(), ConfigError::UnknownSystem("duffing".to_string()));
}

#[test]
fn non_positive_dt_is_a_config_error() {
    for dt in ["0.0", "-0.01"] {
        let yaml = MINIMAL.replace("0.01", dt);
        assert!(matches!(build(&yaml), Err(ConfigError::NonPositiveDt(_))));
    }
}

#[test]
fn negative_counts_are_config_errors() {
    let yaml = format!("{MINIMAL}particles:\n  count: -2\n");
    assert_eq!(build(&yaml).unwrap_err(), ConfigError::NegativeCount(-2));

    let yaml = format!("{MINIMAL}preview:\n  num_points: -1\n");
    assert_eq!(build(&yaml).unwrap_err(), ConfigError::NegativePointCount(-1));
}

#[test]
fn zero_trail_capacity_is_a_config_error() {
    let yaml = format!("{MINIMAL}particles:\n  count: 2\n  trail_capacity: 0\n");
    assert_eq!(build(&yaml).unwrap_err(), ConfigError::ZeroCapacity(0));
}

#[test]
fn unknown_mode_fails_to_parse() {
    let yaml = MINIMAL.replace("\"live\"", "\"paused\"");
    assert!(serde_yaml::from_str::<ScenarioConfig>(&yaml).is_err());
}

#[test]
fn shipped_scenarios_load() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["lorenz_live.yaml", "lorenz_swarm.yaml", "rossler_preview.yaml"] {
        let file = File::open(dir.join(name)).unwrap();
        let cfg: ScenarioConfig = serde_yaml::from_reader(BufReader::new(file)).unwrap();
        let mut scenario = Scenario::build_scenario(cfg).unwrap();

        scenario.run(100).unwrap();
        assert!(scenario.particles().diverged().is_empty(), "{name} diverged");
    }
}

#[test]
fn snapshot_serializes_to_yaml() {
    let mut scenario = build(MINIMAL).unwrap();
    scenario.run(3).unwrap();

    let text = serde_yaml::to_string(&scenario.snapshot()).unwrap();
    assert!(text.contains("attractor: lorenz"));
    assert!(text.contains("mode: live"));
    assert!(text.contains("ticks: 3"));
}

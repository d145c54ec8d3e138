pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Point3, Particle};
pub use simulation::params::{AttractorKind, LorenzParams, RosslerParams, SystemParams, Parameters};
pub use simulation::fields::{VectorField, derivative};
pub use simulation::integrator::{
    euler_step, step, euler_integrator, generate_trajectory, Trajectory,
};
pub use simulation::trail::{TrailBuffer, TrailView, DEFAULT_TRAIL_CAPACITY};
pub use simulation::particles::ParticleSet;
pub use simulation::preview::PreviewTrail;
pub use simulation::scenario::{Scenario, Snapshot, ParticleSnapshot};

pub use configuration::config::{
    RunMode, EngineConfig, ParametersConfig, ParticlesConfig, PreviewConfig, RenderConfig,
    ScenarioConfig,
};

pub use error::ConfigError;

pub use benchmark::benchmark::{bench_tick, bench_generate, bench_trail_curve};

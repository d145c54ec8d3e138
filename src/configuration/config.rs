//! Configuration types for loading attractor scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – run mode and headless step count
//! - [`ParametersConfig`] – time step and the Lorenz/Rössler coefficients
//! - [`ParticlesConfig`]  – live particle count and trail length
//! - [`PreviewConfig`]    – bulk preview point count and seed
//! - [`RenderConfig`]     – values passed through to the renderer
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   mode: "live"            # or "preview"
//!   steps: 5000             # ticks for a headless run
//!
//! attractor: "lorenz"       # or "rossler"
//!
//! parameters:
//!   dt: 0.01
//!   lorenz:                 # optional, defaults shown
//!     sigma: 10.0
//!     rho: 28.0
//!     beta: 2.6666666666666665
//!   rossler:                # optional, defaults shown
//!     a: 0.2
//!     b: 0.2
//!     c: 5.7
//!
//! particles:
//!   count: 3
//!   trail_capacity: 3000
//!
//! preview:
//!   num_points: 10000
//!   seed: [0.1, 0.0, 0.0]
//!
//! render:
//!   show_trail: true
//!   trail_color: "#00ffff"
//! ```
//!
//! Counts are signed and the attractor is a plain string so that bad values
//! surface as [`ConfigError`](crate::error::ConfigError)s when the runtime
//! `Scenario` is built, not as YAML parse failures.

use serde::{Deserialize, Serialize};

use crate::simulation::params::{LorenzParams, RosslerParams};

/// How the scenario produces trajectories
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    #[serde(rename = "live")] // particles advanced one tick per frame, bounded trails
    Live,

    #[serde(rename = "preview")] // one bulk trajectory recomputed on every change
    Preview,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub mode: RunMode,
    pub steps: Option<u64>, // ticks for a headless live run
}

#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // time step, must be > 0
    pub lorenz: Option<LorenzParams>,
    pub rossler: Option<RosslerParams>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ParticlesConfig {
    pub count: i64, // number of live particles
    pub trail_capacity: Option<i64>, // maximum trail length per particle
}

#[derive(Deserialize, Debug, Clone)]
pub struct PreviewConfig {
    pub num_points: i64, // Euler steps in the preview trail
    pub seed: Option<[f64; 3]>, // starting point, independent of live seeds
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RenderConfig {
    pub show_trail: Option<bool>,
    pub trail_color: Option<String>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub attractor: String,
    pub parameters: ParametersConfig,
    pub particles: Option<ParticlesConfig>,
    pub preview: Option<PreviewConfig>,
    pub render: Option<RenderConfig>,
}

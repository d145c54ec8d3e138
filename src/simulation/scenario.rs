//! Build fully-initialized attractor scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - engine settings (`Engine`)
//! - the active attractor and both parameter blocks (`Parameters`)
//! - the live particle set (`ParticleSet`)
//! - the preview trail when running in preview mode (`PreviewTrail`)
//!
//! `Scenario` is also the boundary the UI layer drives: every setter
//! validates its input first and leaves the scenario untouched on error.

use serde::Serialize;
use tracing::{debug, info};

use crate::configuration::config::{RenderConfig, RunMode, ScenarioConfig};
use crate::error::{check_dt, particle_count, point_count, trail_capacity, ConfigError};
use crate::simulation::engine::{palette_color, Engine, RenderSettings, DEFAULT_STEPS};
use crate::simulation::params::{AttractorKind, Parameters};
use crate::simulation::particles::ParticleSet;
use crate::simulation::preview::{default_preview_seed, PreviewTrail, DEFAULT_PREVIEW_POINTS};
use crate::simulation::states::Point3;
use crate::simulation::trail::DEFAULT_TRAIL_CAPACITY;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    attractor: AttractorKind,
    parameters: Parameters,
    particles: ParticleSet,
    preview: Option<PreviewTrail>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let attractor: AttractorKind = cfg.attractor.parse()?;

        // Parameters (runtime) from ParametersConfig, missing blocks take defaults
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            lorenz: p_cfg.lorenz.unwrap_or_default(),
            rossler: p_cfg.rossler.unwrap_or_default(),
            dt: p_cfg.dt,
        };
        parameters.validate()?;

        // Live particles
        let (count, capacity) = match cfg.particles {
            Some(pc) => (
                particle_count(pc.count)?,
                match pc.trail_capacity {
                    Some(raw) => trail_capacity(raw)?,
                    None => DEFAULT_TRAIL_CAPACITY,
                },
            ),
            None => (1, DEFAULT_TRAIL_CAPACITY),
        };
        let particles = ParticleSet::with_trail_capacity(count, attractor, capacity)?;

        // Preview settings
        let (preview_points, preview_seed) = match cfg.preview {
            Some(pc) => (
                point_count(pc.num_points)?,
                pc.seed.map(Point3::from).unwrap_or_else(default_preview_seed),
            ),
            None => (DEFAULT_PREVIEW_POINTS, default_preview_seed()),
        };

        // Engine (runtime) from EngineConfig
        let render = cfg.render.unwrap_or_default();
        let engine = Engine {
            mode: cfg.engine.mode,
            steps: cfg.engine.steps.unwrap_or(DEFAULT_STEPS),
            preview_points,
            preview_seed,
            render: render_settings(render),
        };

        let preview = match engine.mode {
            RunMode::Preview => {
                Some(PreviewTrail::new(attractor, parameters, preview_seed, preview_points)?)
            }
            RunMode::Live => None,
        };

        info!(
            %attractor,
            mode = ?engine.mode,
            particles = count,
            dt = parameters.dt,
            "scenario built"
        );

        Ok(Self {
            engine,
            attractor,
            parameters,
            particles,
            preview,
        })
    }

    /// Live scenario with default parameters and `count` particles
    pub fn live(attractor: AttractorKind, count: usize) -> Self {
        Self {
            engine: Engine {
                mode: RunMode::Live,
                steps: DEFAULT_STEPS,
                preview_points: DEFAULT_PREVIEW_POINTS,
                preview_seed: default_preview_seed(),
                render: RenderSettings::default(),
            },
            attractor,
            parameters: Parameters::default(),
            particles: ParticleSet::initialize(count, attractor),
            preview: None,
        }
    }

    // =========================================================================================
    // inbound changes from the UI layer
    // =========================================================================================

    /// Switch attractor; restarts the live set and regenerates the preview
    pub fn set_attractor(&mut self, kind: AttractorKind) -> Result<(), ConfigError> {
        if let Some(preview) = self.preview.as_mut() {
            preview.set_kind(kind)?;
        }
        self.particles.switch_system(kind);
        self.attractor = kind;
        Ok(())
    }

    /// Same as [`Scenario::set_attractor`] for an untyped tag
    pub fn set_attractor_str(&mut self, tag: &str) -> Result<(), ConfigError> {
        let kind: AttractorKind = tag.parse()?;
        self.set_attractor(kind)
    }

    /// Replace the parameter record; live particles keep their state
    pub fn set_parameters(&mut self, parameters: Parameters) -> Result<(), ConfigError> {
        parameters.validate()?;
        if let Some(preview) = self.preview.as_mut() {
            preview.set_parameters(parameters)?;
        }
        self.parameters = parameters;
        Ok(())
    }

    pub fn set_dt(&mut self, dt: f64) -> Result<(), ConfigError> {
        check_dt(dt)?;
        self.set_parameters(Parameters { dt, ..self.parameters })
    }

    /// Any count change restarts every live particle
    pub fn set_particle_count(&mut self, raw: i64) -> Result<(), ConfigError> {
        let count = particle_count(raw)?;
        self.particles.resize(count);
        Ok(())
    }

    pub fn set_trail_capacity(&mut self, raw: i64) -> Result<(), ConfigError> {
        let capacity = trail_capacity(raw)?;
        self.particles.set_trail_capacity(capacity)
    }

    pub fn set_num_points(&mut self, raw: i64) -> Result<(), ConfigError> {
        let num_points = point_count(raw)?;
        if let Some(preview) = self.preview.as_mut() {
            preview.set_num_points(num_points)?;
        }
        self.engine.preview_points = num_points;
        Ok(())
    }

    /// Switch between live and preview; either way the new mode starts from
    /// its own fixed seeds, nothing carries over from the other mode
    pub fn set_mode(&mut self, mode: RunMode) -> Result<(), ConfigError> {
        match mode {
            RunMode::Preview => {
                let preview = PreviewTrail::new(
                    self.attractor,
                    self.parameters,
                    self.engine.preview_seed,
                    self.engine.preview_points,
                )?;
                self.preview = Some(preview);
            }
            RunMode::Live => {
                self.preview = None;
                self.particles.resize(self.particles.len());
            }
        }
        debug!(?mode, "run mode changed");
        self.engine.mode = mode;
        Ok(())
    }

    // =========================================================================================
    // advancing
    // =========================================================================================

    /// One live step for every particle
    /// Returns how many particles diverged during this tick
    pub fn tick(&mut self) -> Result<usize, ConfigError> {
        let params = self.parameters.active(self.attractor);
        self.particles.tick(&params, self.parameters.dt)
    }

    /// Headless run of `steps` ticks; a preview scenario has nothing to advance
    /// Returns the number of particles that diverged along the way
    pub fn run(&mut self, steps: u64) -> Result<usize, ConfigError> {
        if self.engine.mode == RunMode::Preview {
            return Ok(0);
        }
        let mut diverged = 0;
        for _ in 0..steps {
            diverged += self.tick()?;
        }
        Ok(diverged)
    }

    pub fn attractor(&self) -> AttractorKind {
        self.attractor
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn preview(&self) -> Option<&PreviewTrail> {
        self.preview.as_ref()
    }

    /// Drop the preview and release every live particle and trail
    pub fn teardown(self) {
        debug!(attractor = %self.attractor, "scenario torn down");
        self.particles.teardown();
    }

    /// Serializable picture of the current state for an outside renderer
    pub fn snapshot(&self) -> Snapshot {
        let show_trail = self.engine.render.show_trail;

        let particles = self
            .particles
            .particles()
            .iter()
            .map(|p| ParticleSnapshot {
                id: p.id,
                color: palette_color(p.id),
                position: p.state,
                trail: if show_trail { p.trail.view().to_vec() } else { Vec::new() },
            })
            .collect();

        Snapshot {
            attractor: self.attractor,
            mode: self.engine.mode,
            dt: self.parameters.dt,
            ticks: self.particles.ticks(),
            show_trail,
            trail_color: self.engine.render.trail_color.clone(),
            particles,
            preview: self.preview.as_ref().map(|p| p.points().to_vec()),
        }
    }
}

fn render_settings(cfg: RenderConfig) -> RenderSettings {
    let defaults = RenderSettings::default();
    RenderSettings {
        show_trail: cfg.show_trail.unwrap_or(defaults.show_trail),
        trail_color: cfg.trail_color.unwrap_or(defaults.trail_color),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleSnapshot {
    pub id: usize,
    pub color: String,
    pub position: Point3,
    pub trail: Vec<Point3>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub attractor: AttractorKind,
    pub mode: RunMode,
    pub dt: f64,
    pub ticks: u64,
    pub show_trail: bool,
    pub trail_color: String,
    pub particles: Vec<ParticleSnapshot>,
    pub preview: Option<Vec<Point3>>,
}

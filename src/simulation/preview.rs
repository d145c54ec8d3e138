//! Static preview trails
//!
//! A `PreviewTrail` is the bulk counterpart of a live particle set: the whole
//! trajectory is recomputed from a fixed seed whenever the attractor, its
//! parameters or the point count change, and replaces the previous one
//! wholesale. It never shares state with the live particles.

use tracing::debug;

use super::integrator::generate_trajectory;
use super::params::{AttractorKind, Parameters};
use super::states::Point3;
use crate::error::ConfigError;

/// Default number of steps in a preview trail
pub const DEFAULT_PREVIEW_POINTS: usize = 10_000;

/// Default preview seed
pub fn default_preview_seed() -> Point3 {
    Point3::new(0.1, 0.0, 0.0)
}

#[derive(Debug, Clone)]
pub struct PreviewTrail {
    kind: AttractorKind,
    parameters: Parameters,
    seed: Point3,
    num_points: usize,
    points: Vec<Point3>, // num_points + 1 entries, seed first
}

impl PreviewTrail {
    pub fn new(
        kind: AttractorKind,
        parameters: Parameters,
        seed: Point3,
        num_points: usize,
    ) -> Result<Self, ConfigError> {
        let points = Self::compute(kind, &parameters, seed, num_points)?;
        Ok(Self {
            kind,
            parameters,
            seed,
            num_points,
            points,
        })
    }

    fn compute(
        kind: AttractorKind,
        parameters: &Parameters,
        seed: Point3,
        num_points: usize,
    ) -> Result<Vec<Point3>, ConfigError> {
        let active = parameters.active(kind);
        let points = generate_trajectory(&active, parameters.dt, seed, num_points)?;
        debug!(%kind, num_points, dt = parameters.dt, "preview trail regenerated");
        Ok(points)
    }

    /// Regenerate with new parameters; on error the old trail is kept
    pub fn set_parameters(&mut self, parameters: Parameters) -> Result<(), ConfigError> {
        self.points = Self::compute(self.kind, &parameters, self.seed, self.num_points)?;
        self.parameters = parameters;
        Ok(())
    }

    pub fn set_kind(&mut self, kind: AttractorKind) -> Result<(), ConfigError> {
        self.points = Self::compute(kind, &self.parameters, self.seed, self.num_points)?;
        self.kind = kind;
        Ok(())
    }

    pub fn set_num_points(&mut self, num_points: usize) -> Result<(), ConfigError> {
        self.points = Self::compute(self.kind, &self.parameters, self.seed, num_points)?;
        self.num_points = num_points;
        Ok(())
    }

    pub fn set_seed(&mut self, seed: Point3) -> Result<(), ConfigError> {
        self.points = Self::compute(self.kind, &self.parameters, seed, self.num_points)?;
        self.seed = seed;
        Ok(())
    }

    pub fn kind(&self) -> AttractorKind {
        self.kind
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn seed(&self) -> Point3 {
        self.seed
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// `false` if any generated point is NaN/Infinity
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.iter().all(|c| c.is_finite()))
    }
}

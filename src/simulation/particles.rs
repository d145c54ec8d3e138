//! Particle-set lifecycle
//!
//! A `ParticleSet` owns N independent trajectories of one attractor. Any
//! change to the particle count or the attractor rebuilds the whole set from
//! the deterministic seeds; there is no partial reuse. Advancing is purely
//! caller driven, one `tick` per external frame.

use tracing::debug;

use super::integrator::euler_integrator;
use super::params::{AttractorKind, SystemParams};
use super::states::{Particle, Point3};
use super::trail::{TrailBuffer, TrailView};
use crate::error::{check_dt, ConfigError};

/// Per-coordinate offset between consecutive particle seeds
pub const SEED_SPACING: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct ParticleSet {
    kind: AttractorKind, // system the particles were seeded for
    particles: Vec<Particle>,
    empty_trail: TrailBuffer, // template, carries the validated capacity
    ticks: u64, // steps taken since the last (re)initialization
}

impl ParticleSet {
    /// `count` particles with default-length trails
    pub fn initialize(count: usize, kind: AttractorKind) -> Self {
        Self::spawn(count, kind, TrailBuffer::default())
    }

    /// `count` particles whose trails keep at most `trail_capacity` points
    pub fn with_trail_capacity(
        count: usize,
        kind: AttractorKind,
        trail_capacity: usize,
    ) -> Result<Self, ConfigError> {
        let empty_trail = TrailBuffer::new(trail_capacity)?;
        Ok(Self::spawn(count, kind, empty_trail))
    }

    /// Starting point of particle `i`: (0.1, 0, 0) shifted by 0.1 * i on every axis
    pub fn seed_for(i: usize) -> Point3 {
        let offset = i as f64 * SEED_SPACING;
        Point3::new(0.1 + offset, offset, offset)
    }

    fn spawn(count: usize, kind: AttractorKind, empty_trail: TrailBuffer) -> Self {
        let particles = (0..count)
            .map(|id| Particle {
                id,
                state: Self::seed_for(id),
                trail: empty_trail.clone(),
            })
            .collect();

        debug!(count, %kind, capacity = empty_trail.capacity(), "particle set initialized");

        Self {
            kind,
            particles,
            empty_trail,
            ticks: 0,
        }
    }

    /// Advance every particle by exactly one step
    /// `params` must belong to the attractor this set was seeded for
    /// Returns the number of particles that diverged during this tick
    pub fn tick(&mut self, params: &SystemParams, dt: f64) -> Result<usize, ConfigError> {
        // validate everything before touching any particle
        check_dt(dt)?;
        if params.kind() != self.kind {
            return Err(ConfigError::MismatchedParameters {
                expected: self.kind,
                found: params.kind(),
            });
        }
        params.validate()?;

        let diverged = euler_integrator(&mut self.particles, params, dt);
        self.ticks += 1;
        Ok(diverged)
    }

    /// Discard every particle and reseed `new_count` of them
    pub fn resize(&mut self, new_count: usize) {
        *self = Self::spawn(new_count, self.kind, self.empty_trail.clone());
    }

    /// Discard every particle and reseed the same count for `kind`
    pub fn switch_system(&mut self, kind: AttractorKind) {
        *self = Self::spawn(self.particles.len(), kind, self.empty_trail.clone());
    }

    /// Change the trail length of every particle without restarting them
    pub fn set_trail_capacity(&mut self, capacity: usize) -> Result<(), ConfigError> {
        let template = TrailBuffer::new(capacity)?;
        for p in self.particles.iter_mut() {
            p.trail.set_capacity(capacity)?;
        }
        self.empty_trail = template;
        Ok(())
    }

    /// Release all particles and their trails
    pub fn teardown(self) {
        debug!(count = self.particles.len(), kind = %self.kind, "particle set torn down");
    }

    pub fn kind(&self) -> AttractorKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn trail_capacity(&self) -> usize {
        self.empty_trail.capacity()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn get(&self, id: usize) -> Option<&Particle> {
        self.particles.get(id)
    }

    /// Current position of every particle, in index order
    pub fn positions(&self) -> impl ExactSizeIterator<Item = &Point3> + '_ {
        self.particles.iter().map(|p| &p.state)
    }

    /// Read-only trail of every particle, in index order
    pub fn trails(&self) -> impl ExactSizeIterator<Item = TrailView<'_>> + '_ {
        self.particles.iter().map(|p| p.trail.view())
    }

    /// Ids of particles whose state is no longer finite
    pub fn diverged(&self) -> Vec<usize> {
        self.particles
            .iter()
            .filter(|p| !p.is_finite())
            .map(|p| p.id)
            .collect()
    }
}

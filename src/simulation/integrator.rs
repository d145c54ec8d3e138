//! Fixed-step explicit Euler integration
//!
//! One first-order step is the only integration method in the engine. It is
//! used for live per-tick advancement of a particle set and for one-shot bulk
//! trajectory generation, so both paths produce bit-identical points for the
//! same inputs.

use tracing::warn;

use super::fields::VectorField;
use super::params::SystemParams;
use super::states::{Particle, Point3};
use crate::error::{check_dt, ConfigError};

/// Explicit Euler update: x_n+1 = x_n + dt * f(x_n)
pub fn euler_step(state: &Point3, derivative: &Point3, dt: f64) -> Point3 {
    state + derivative * dt
}

/// Evaluate `field` at `state` and take one Euler step
pub fn step<F: VectorField + ?Sized>(field: &F, state: &Point3, dt: f64) -> Point3 {
    let d = field.derivative(state);
    euler_step(state, &d, dt)
}

/// Advance every particle by one step in index order and record the new
/// position in its trail
/// Returns how many particles turned non-finite during this step
pub fn euler_integrator<F: VectorField + ?Sized>(
    particles: &mut [Particle],
    field: &F,
    dt: f64,
) -> usize {
    let mut newly_diverged = 0;

    for p in particles.iter_mut() {
        let was_finite = p.is_finite();

        // x_n+1 from x_n, nothing shared between particles
        p.state = step(field, &p.state, dt);
        p.trail.push(p.state);

        if was_finite && !p.is_finite() {
            warn!(particle = p.id, "trajectory diverged to a non-finite state");
            newly_diverged += 1;
        }
    }

    newly_diverged
}

// =========================================================================================
// bulk generation
// =========================================================================================

/// Lazy trajectory: yields the seed, then each successive Euler step
/// Stopping early is allowed; running to the end yields `num_points + 1` points
pub struct Trajectory<'a, F: VectorField + ?Sized> {
    field: &'a F,
    dt: f64,
    next: Point3,
    remaining: usize, // points still to yield, seed included
}

impl<'a, F: VectorField + ?Sized> Trajectory<'a, F> {
    pub fn new(field: &'a F, dt: f64, initial: Point3, num_points: usize) -> Self {
        Self {
            field,
            dt,
            next: initial,
            remaining: num_points.saturating_add(1),
        }
    }
}

impl<F: VectorField + ?Sized> Iterator for Trajectory<'_, F> {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.next;
        // skip the extra derivative evaluation after the last point
        if self.remaining > 0 {
            self.next = step(self.field, &current, self.dt);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<F: VectorField + ?Sized> ExactSizeIterator for Trajectory<'_, F> {}

/// Generate a full trajectory of `num_points` steps from `initial`
/// Element 0 is the seed, element k is the k-th Euler step
pub fn generate_trajectory(
    params: &SystemParams,
    dt: f64,
    initial: Point3,
    num_points: usize,
) -> Result<Vec<Point3>, ConfigError> {
    check_dt(dt)?;
    params.validate()?;

    let mut points = Vec::with_capacity(num_points.saturating_add(1));
    points.extend(Trajectory::new(params, dt, initial, num_points));
    Ok(points)
}

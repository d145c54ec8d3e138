//! Core state types for the attractor engine
//!
//! - `Point3`   phase-space point / derivative vector (x, y, z)
//! - `Particle` one independently integrated trajectory and its trail

use nalgebra::Vector3;

use super::trail::TrailBuffer;

pub type Point3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub id: usize, // index within the set, 0..N-1
    pub state: Point3, // current position, advanced every tick
    pub trail: TrailBuffer, // bounded history of past positions
}

impl Particle {
    /// `false` once the trajectory has run off to NaN/Infinity
    pub fn is_finite(&self) -> bool {
        self.state.iter().all(|c| c.is_finite())
    }
}

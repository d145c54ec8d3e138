//! Vector fields of the supported attractors
//!
//! Each system implements [`VectorField`], a pure map from a phase-space
//! point to its instantaneous derivative. Nothing here mutates state.

use super::params::{LorenzParams, RosslerParams, SystemParams};
use super::states::Point3;

/// Trait for autonomous 3D vector fields dx/dt = f(x)
pub trait VectorField {
    fn derivative(&self, p: &Point3) -> Point3;
}

/// Lorenz system
/// dx/dt = σ(y - x)
/// dy/dt = x(ρ - z) - y
/// dz/dt = xy - βz
impl VectorField for LorenzParams {
    fn derivative(&self, p: &Point3) -> Point3 {
        let (x, y, z) = (p.x, p.y, p.z);

        let dx = self.sigma * (y - x);
        let dy = x * (self.rho - z) - y;
        let dz = x * y - self.beta * z;

        Point3::new(dx, dy, dz)
    }
}

/// Rössler system
/// dx/dt = -y - z
/// dy/dt = x + ay
/// dz/dt = b + z(x - c)
impl VectorField for RosslerParams {
    fn derivative(&self, p: &Point3) -> Point3 {
        let (x, y, z) = (p.x, p.y, p.z);

        let dx = -y - z;
        let dy = x + self.a * y;
        let dz = self.b + z * (x - self.c);

        Point3::new(dx, dy, dz)
    }
}

impl VectorField for SystemParams {
    fn derivative(&self, p: &Point3) -> Point3 {
        match self {
            SystemParams::Lorenz(l) => l.derivative(p),
            SystemParams::Rossler(r) => r.derivative(p),
        }
    }
}

/// Instantaneous derivative of the selected system at `state`
pub fn derivative(params: &SystemParams, state: &Point3) -> Point3 {
    params.derivative(state)
}

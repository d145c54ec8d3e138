//! Configuration errors reported at the engine boundary
//!
//! Every fallible engine operation validates its inputs first and returns one
//! of these without touching any simulation state. Numerical divergence is
//! not an error: non-finite states are handed back to the caller as-is.

use thiserror::Error;

use crate::simulation::params::AttractorKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("time step dt must be positive and finite, got {0}")]
    NonPositiveDt(f64),

    #[error("trail capacity must be greater than zero, got {0}")]
    ZeroCapacity(i64),

    #[error("particle count must not be negative, got {0}")]
    NegativeCount(i64),

    #[error("point count must not be negative, got {0}")]
    NegativePointCount(i64),

    #[error("unknown attractor `{0}` (expected `lorenz` or `rossler`)")]
    UnknownSystem(String),

    #[error("{found} parameters supplied to a {expected} particle set")]
    MismatchedParameters {
        expected: AttractorKind,
        found: AttractorKind,
    },

    #[error("parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
}

/// Validate a signed count coming from the UI/config layer
pub fn particle_count(raw: i64) -> Result<usize, ConfigError> {
    usize::try_from(raw).map_err(|_| ConfigError::NegativeCount(raw))
}

/// Validate a signed bulk point count
pub fn point_count(raw: i64) -> Result<usize, ConfigError> {
    usize::try_from(raw).map_err(|_| ConfigError::NegativePointCount(raw))
}

/// Validate a signed trail capacity (must be at least one point)
pub fn trail_capacity(raw: i64) -> Result<usize, ConfigError> {
    match usize::try_from(raw) {
        Ok(cap) if cap > 0 => Ok(cap),
        _ => Err(ConfigError::ZeroCapacity(raw)),
    }
}

/// Reject zero, negative and non-finite step sizes
pub fn check_dt(dt: f64) -> Result<f64, ConfigError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(dt)
    } else {
        Err(ConfigError::NonPositiveDt(dt))
    }
}

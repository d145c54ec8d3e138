//! Attractor selection and parameter blocks
//!
//! `Parameters` keeps both parameter blocks around so switching attractors
//! and back restores the previous values, while `SystemParams` is the
//! discriminated view handed to the evaluator: a Lorenz field can only ever
//! see Lorenz parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{check_dt, ConfigError};

/// Which chaotic system is being integrated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttractorKind {
    Lorenz,
    Rossler,
}

impl AttractorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttractorKind::Lorenz => "lorenz",
            AttractorKind::Rossler => "rossler",
        }
    }
}

impl fmt::Display for AttractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AttractorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lorenz" => Ok(AttractorKind::Lorenz),
            "rossler" | "rössler" => Ok(AttractorKind::Rossler),
            _ => Err(ConfigError::UnknownSystem(s.to_string())),
        }
    }
}

/// Lorenz system coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzParams {
    pub sigma: f64, // Prandtl number
    pub rho: f64, // Rayleigh number
    pub beta: f64, // geometric factor
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

/// Rössler system coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RosslerParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for RosslerParams {
    fn default() -> Self {
        Self { a: 0.2, b: 0.2, c: 5.7 }
    }
}

/// Parameters of exactly one system, tagged by the system they belong to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SystemParams {
    Lorenz(LorenzParams),
    Rossler(RosslerParams),
}

impl SystemParams {
    pub fn kind(&self) -> AttractorKind {
        match self {
            SystemParams::Lorenz(_) => AttractorKind::Lorenz,
            SystemParams::Rossler(_) => AttractorKind::Rossler,
        }
    }

    /// Every coefficient must be a finite number
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named: [(&'static str, f64); 3] = match self {
            SystemParams::Lorenz(p) => [("sigma", p.sigma), ("rho", p.rho), ("beta", p.beta)],
            SystemParams::Rossler(p) => [("a", p.a), ("b", p.b), ("c", p.c)],
        };
        for (name, value) in named {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParameter { name, value });
            }
        }
        Ok(())
    }
}

impl From<LorenzParams> for SystemParams {
    fn from(p: LorenzParams) -> Self {
        SystemParams::Lorenz(p)
    }
}

impl From<RosslerParams> for SystemParams {
    fn from(p: RosslerParams) -> Self {
        SystemParams::Rossler(p)
    }
}

/// Full parameter record held by the caller: both blocks plus the shared step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub lorenz: LorenzParams,
    pub rossler: RosslerParams,
    pub dt: f64, // time increment per step
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            lorenz: LorenzParams::default(),
            rossler: RosslerParams::default(),
            dt: 0.01,
        }
    }
}

impl Parameters {
    /// The block that drives `kind`
    pub fn active(&self, kind: AttractorKind) -> SystemParams {
        match kind {
            AttractorKind::Lorenz => SystemParams::Lorenz(self.lorenz),
            AttractorKind::Rossler => SystemParams::Rossler(self.rossler),
        }
    }

    /// Check dt and both parameter blocks
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dt(self.dt)?;
        SystemParams::Lorenz(self.lorenz).validate()?;
        SystemParams::Rossler(self.rossler).validate()
    }
}

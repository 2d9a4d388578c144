//! Statically validated environment configuration.
//!
//! The reference implementation configured environments through an untyped
//! key-value mapping; here every recognised option is an enum or a checked
//! positive real, and anything else fails at parse/validate time.

use std::str::FromStr;

use crate::{EnvError, EnvResult};

// ── Dimensionality ────────────────────────────────────────────────────────────

/// Whether the arena is a 1D track or a 2D rectangle.
///
/// Governs the number of meaningful position components.  There is no 3D
/// variant: parsing `"3D"` is an error by design.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimensionality {
    OneD,
    #[default]
    TwoD,
}

impl Dimensionality {
    /// Number of position components: 1 or 2.
    #[inline]
    pub fn dims(self) -> usize {
        match self {
            Dimensionality::OneD => 1,
            Dimensionality::TwoD => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dimensionality::OneD => "1D",
            Dimensionality::TwoD => "2D",
        }
    }
}

impl FromStr for Dimensionality {
    type Err = EnvError;

    fn from_str(s: &str) -> EnvResult<Self> {
        match s {
            "1D" | "1d" => Ok(Dimensionality::OneD),
            "2D" | "2d" => Ok(Dimensionality::TwoD),
            other => Err(EnvError::UnknownDimensionality(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── BoundaryConditions ────────────────────────────────────────────────────────

/// How motion behaves at the arena edge.
///
/// The environment only *stores* this flag; the agent's stepping logic asks
/// the environment to project candidate positions accordingly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryConditions {
    /// Impenetrable walls: positions are clamped into the arena.
    #[default]
    Solid,
    /// Torus topology: positions wrap around to the opposite edge.
    Periodic,
}

impl BoundaryConditions {
    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryConditions::Solid => "solid",
            BoundaryConditions::Periodic => "periodic",
        }
    }
}

impl FromStr for BoundaryConditions {
    type Err = EnvError;

    fn from_str(s: &str) -> EnvResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "solid" => Ok(BoundaryConditions::Solid),
            "periodic" => Ok(BoundaryConditions::Periodic),
            other => Err(EnvError::UnknownBoundaryConditions(other.to_owned())),
        }
    }
}

impl std::fmt::Display for BoundaryConditions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── EnvironmentConfig ─────────────────────────────────────────────────────────

/// Every recognised environment option, with types and ranges checked by
/// [`validate`][Self::validate].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentConfig {
    pub dimensionality: Dimensionality,
    pub boundary_conditions: BoundaryConditions,

    /// Spatial extent along y (2D) or the track length (1D), in metres.
    pub scale: f64,

    /// x/y aspect ratio of the rectangular 2D arena.  Ignored in 1D.
    pub aspect: f64,

    /// Discretisation step for rate-map rasterisation, in metres.
    ///
    /// Used only by reporting; it must never influence simulation dynamics.
    pub dx: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            dimensionality: Dimensionality::TwoD,
            boundary_conditions: BoundaryConditions::Solid,
            scale: 1.0,
            aspect: 1.0,
            dx: 0.01,
        }
    }
}

impl EnvironmentConfig {
    /// Reject non-positive or non-finite reals.
    pub fn validate(&self) -> EnvResult<()> {
        for (field, value) in [
            ("scale", self.scale),
            ("aspect", self.aspect),
            ("dx", self.dx),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EnvError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}

//! `nav-env` — environment geometry and boundary policy for the rust_nav
//! framework.
//!
//! An [`Environment`] is a passive, immutable description of the arena an
//! agent moves through: its dimensionality (1D track or 2D rectangle), its
//! boundary behaviour (solid walls or periodic wrap-around), its spatial
//! extent, and a discretisation step used only when rasterising rate maps.
//!
//! Construction goes through [`EnvironmentConfig`], which validates every
//! option eagerly — an unrecognised dimensionality or a non-positive scale
//! is rejected before any simulation state exists.
//!
//! ```rust,ignore
//! let env = Environment::new(EnvironmentConfig {
//!     dimensionality:      Dimensionality::TwoD,
//!     boundary_conditions: BoundaryConditions::Solid,
//!     scale:               1.0,
//!     aspect:              1.0,
//!     dx:                  0.01,
//! })?;
//! ```

pub mod config;
pub mod environment;
pub mod error;

#[cfg(test)]
mod tests;

pub use config::{BoundaryConditions, Dimensionality, EnvironmentConfig};
pub use environment::Environment;
pub use error::{EnvError, EnvResult};

//! `nav-cells` — rate-coded model neurons for the rust_nav framework.
//!
//! A cell model implements [`RateModel`]: one capability, *compute a firing
//! rate per unit given a position*.  Two models are provided:
//!
//! | Model        | Tuning                                                |
//! |--------------|-------------------------------------------------------|
//! | [`PlaceCells`] | distance-to-centre curves (Gaussian, thresholded, top-hat) |
//! | [`GridCells`]  | three-cosine interference pattern (2D only)         |
//!
//! Models are wrapped in a [`RatePopulation`], which owns the `firingrate`
//! history log.  `RatePopulation::update` takes the agent's position as an
//! **explicit parameter** — there is no back-reference into the agent, so
//! the "cells must be updated after the agent" hazard cannot arise by
//! construction; the driver is the single place that sequences the two.
//!
//! [`CellKind`] is the registry of named model variants for applications
//! that select cell types from configuration.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Per-cell rate evaluation on Rayon's thread pool.  |

pub mod error;
pub mod grid;
pub mod model;
pub mod place;
pub mod population;
pub mod registry;

#[cfg(test)]
mod tests;

pub use error::{CellsError, CellsResult};
pub use grid::{GridCellParams, GridCells};
pub use model::{rate_map, RateModel};
pub use place::{PlaceCellParams, PlaceCells, TuningCurve};
pub use population::{RateHistory, RatePopulation};
pub use registry::CellKind;

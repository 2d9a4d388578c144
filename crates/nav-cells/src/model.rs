//! The `RateModel` trait — the main extension point for cell types.

use nav_core::{CellId, Point};
use nav_env::Environment;

/// Pluggable rate-coded cell model.
///
/// Implement this trait to define a new cell type.  The contract is
/// deliberately small: given a position, produce one non-negative firing
/// rate per unit.  Models are immutable after construction — all mutable
/// per-run state (the history log) lives in
/// [`RatePopulation`][crate::RatePopulation].
///
/// # Thread safety
///
/// The `parallel` feature evaluates [`rate_at`][Self::rate_at] for many
/// cells concurrently via Rayon, so implementations must be `Send + Sync`.
pub trait RateModel: Send + Sync + 'static {
    /// Number of units in the model.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Firing rate of one unit at `pos`, in Hz.  Must be non-negative.
    fn rate_at(&self, cell: CellId, pos: Point) -> f64;

    /// Number of spatial dimensions this model requires, if it is picky.
    ///
    /// `None` means the model works in any environment.  The sim builder
    /// checks this against the agent's environment so a 2D-only model cannot
    /// be driven with 1D positions.
    fn required_dims(&self) -> Option<usize> {
        None
    }

    /// Firing rate of every unit at `pos`, in unit order.
    ///
    /// The default implementation maps [`rate_at`][Self::rate_at] over all
    /// units (in parallel with the `parallel` feature).  Models with a
    /// cheaper vectorised form may override it.
    fn rates(&self, pos: Point) -> Vec<f64> {
        #[cfg(not(feature = "parallel"))]
        {
            (0..self.len() as u32)
                .map(|i| self.rate_at(CellId(i), pos))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            (0..self.len() as u32)
                .into_par_iter()
                .map(|i| self.rate_at(CellId(i), pos))
                .collect()
        }
    }
}

/// Rasterise a model over the environment's `dx` grid.
///
/// Returns one rate vector per bin centre, in the row-major order of
/// [`Environment::bin_centres`].  Reporting-only: nothing in the driver
/// loop calls this, so `dx` cannot influence dynamics.
pub fn rate_map(model: &dyn RateModel, env: &Environment) -> Vec<Vec<f64>> {
    env.bin_centres()
        .into_iter()
        .map(|c| model.rates(c))
        .collect()
}

//! Grid cells: hexagonal-lattice tuning from three-cosine interference.

use std::f64::consts::PI;
use std::sync::Arc;

use nav_core::{CellId, ComponentRng, Point};
use nav_env::{Dimensionality, Environment};

use crate::model::RateModel;
use crate::{CellsError, CellsResult};

/// Grid-cell population parameters.
#[derive(Clone, Debug)]
pub struct GridCellParams {
    /// Number of cells.
    pub n: usize,
    /// Lattice period, metres.
    pub gridscale: f64,
    /// Peak firing rate, Hz.
    pub max_fr: f64,
}

impl Default for GridCellParams {
    fn default() -> Self {
        Self {
            n: 100,
            gridscale: 0.45,
            max_fr: 1.0,
        }
    }
}

impl GridCellParams {
    pub fn validate(&self) -> CellsResult<()> {
        if self.n == 0 {
            return Err(CellsError::NoCells);
        }
        for (field, value) in [("gridscale", self.gridscale), ("max_fr", self.max_fr)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CellsError::NonPositiveParam { field, value });
            }
        }
        Ok(())
    }
}

/// A population of grid cells, each a rectified sum of three plane-wave
/// cosines 60° apart.
///
/// Each cell gets a random lattice orientation in `[0, π/3)` and a random
/// spatial phase offset, giving the population uniform coverage of the
/// arena.  2D only: the interference pattern has no 1D analogue, so
/// constructing against a 1D environment is a configuration error.
pub struct GridCells {
    params: GridCellParams,
    /// Per-cell lattice orientation, radians.
    orientations: Vec<f64>,
    /// Per-cell spatial phase offset.
    offsets: Vec<Point>,
}

impl GridCells {
    pub fn new(
        env: Arc<Environment>,
        params: GridCellParams,
        rng: &mut ComponentRng,
    ) -> CellsResult<Self> {
        params.validate()?;
        if env.dimensionality() != Dimensionality::TwoD {
            return Err(CellsError::RequiresTwoD { kind: "grid cells" });
        }

        let orientations = (0..params.n)
            .map(|_| rng.gen_range(0.0..PI / 3.0))
            .collect();
        let offsets = (0..params.n)
            .map(|_| env.sample_position(rng.inner()))
            .collect();

        Ok(Self {
            params,
            orientations,
            offsets,
        })
    }

    #[inline]
    pub fn params(&self) -> &GridCellParams {
        &self.params
    }

    /// Per-cell lattice orientations, radians in `[0, π/3)`.
    #[inline]
    pub fn orientations(&self) -> &[f64] {
        &self.orientations
    }

    /// Per-cell spatial phase offsets.  Every cell fires at `max_fr` at its
    /// own offset.
    #[inline]
    pub fn offsets(&self) -> &[Point] {
        &self.offsets
    }
}

impl RateModel for GridCells {
    fn len(&self) -> usize {
        self.orientations.len()
    }

    fn required_dims(&self) -> Option<usize> {
        Some(2)
    }

    fn rate_at(&self, cell: CellId, pos: Point) -> f64 {
        let i = cell.index();
        let d = pos - self.offsets[i];

        // Wave number for a hexagonal lattice of period `gridscale`.
        let k = 4.0 * PI / (self.params.gridscale * 3.0_f64.sqrt());

        let sum: f64 = (0..3)
            .map(|j| {
                let theta = self.orientations[i] + j as f64 * PI / 3.0;
                let u = Point::from_angle(theta);
                (k * u.dot(d)).cos()
            })
            .sum();

        // Rectified and normalised so peaks hit max_fr and troughs are 0.
        self.params.max_fr * (sum / 3.0).max(0.0)
    }
}

//! Place cells: units tuned to a location in the environment.

use std::sync::Arc;

use nav_core::{CellId, ComponentRng, Point};
use nav_env::Environment;

use crate::model::RateModel;
use crate::{CellsError, CellsResult};

/// Shape of the distance-to-centre tuning curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TuningCurve {
    /// `max_fr * exp(-d² / 2σ²)`.
    #[default]
    Gaussian,
    /// Gaussian cut off at one σ and renormalised to peak at `max_fr`,
    /// so the field has a hard edge and exact zeros outside it.
    GaussianThreshold,
    /// `max_fr` inside one σ, zero outside.
    TopHat,
}

/// Place-cell population parameters.
#[derive(Clone, Debug)]
pub struct PlaceCellParams {
    /// Number of cells.
    pub n: usize,
    /// Field width σ, metres.
    pub widths: f64,
    /// Peak firing rate, Hz.
    pub max_fr: f64,
    pub tuning: TuningCurve,
}

impl Default for PlaceCellParams {
    fn default() -> Self {
        Self {
            n: 100,
            widths: 0.2,
            max_fr: 1.0,
            tuning: TuningCurve::Gaussian,
        }
    }
}

impl PlaceCellParams {
    pub fn validate(&self) -> CellsResult<()> {
        if self.n == 0 {
            return Err(CellsError::NoCells);
        }
        for (field, value) in [("widths", self.widths), ("max_fr", self.max_fr)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CellsError::NonPositiveParam { field, value });
            }
        }
        Ok(())
    }
}

/// A population of place cells with uniformly scattered tuning centres.
///
/// Distances are computed through the environment's topology, so under
/// periodic boundaries a field near one edge also responds near the
/// opposite edge.
pub struct PlaceCells {
    env: Arc<Environment>,
    params: PlaceCellParams,
    centres: Vec<Point>,
}

impl PlaceCells {
    /// Scatter `params.n` tuning centres uniformly over the environment.
    pub fn new(
        env: Arc<Environment>,
        params: PlaceCellParams,
        rng: &mut ComponentRng,
    ) -> CellsResult<Self> {
        params.validate()?;
        let centres = (0..params.n)
            .map(|_| env.sample_position(rng.inner()))
            .collect();
        Ok(Self { env, params, centres })
    }

    /// Use explicit tuning centres (e.g. a regular grid for analysis runs).
    pub fn with_centres(
        env: Arc<Environment>,
        params: PlaceCellParams,
        centres: Vec<Point>,
    ) -> CellsResult<Self> {
        let params = PlaceCellParams {
            n: centres.len(),
            ..params
        };
        params.validate()?;
        if let Some(&outside) = centres.iter().find(|&&c| !env.contains(c)) {
            return Err(CellsError::CentreOutsideEnvironment(outside));
        }
        Ok(Self { env, params, centres })
    }

    #[inline]
    pub fn centres(&self) -> &[Point] {
        &self.centres
    }

    #[inline]
    pub fn params(&self) -> &PlaceCellParams {
        &self.params
    }
}

impl RateModel for PlaceCells {
    fn len(&self) -> usize {
        self.centres.len()
    }

    fn rate_at(&self, cell: CellId, pos: Point) -> f64 {
        let sigma = self.params.widths;
        let max_fr = self.params.max_fr;
        let d = self.env.distance(self.centres[cell.index()], pos);

        match self.params.tuning {
            TuningCurve::Gaussian => max_fr * (-d * d / (2.0 * sigma * sigma)).exp(),
            TuningCurve::GaussianThreshold => {
                let cut = (-0.5_f64).exp();
                let g = (-d * d / (2.0 * sigma * sigma)).exp();
                max_fr * ((g - cut).max(0.0) / (1.0 - cut))
            }
            TuningCurve::TopHat => {
                if d <= sigma {
                    max_fr
                } else {
                    0.0
                }
            }
        }
    }
}

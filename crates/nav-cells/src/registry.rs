//! Named registry of cell-model variants.
//!
//! Applications that pick cell types from configuration go through
//! [`CellKind`] instead of naming concrete types — one explicit enum rather
//! than a namespace full of implicitly imported classes.

use std::str::FromStr;
use std::sync::Arc;

use nav_core::ComponentRng;
use nav_env::Environment;

use crate::model::RateModel;
use crate::{CellsError, CellsResult, GridCellParams, GridCells, PlaceCellParams, PlaceCells};

/// Names accepted by [`CellKind::from_str`].
pub const KNOWN_KINDS: &[&str] = &["place_cells", "grid_cells"];

/// The registered cell-model variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellKind {
    Place,
    Grid,
}

impl CellKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CellKind::Place => "place_cells",
            CellKind::Grid => "grid_cells",
        }
    }

    /// Build a model of this kind with `n` units and default parameters.
    pub fn build(
        self,
        env: &Arc<Environment>,
        n: usize,
        rng: &mut ComponentRng,
    ) -> CellsResult<Box<dyn RateModel>> {
        match self {
            CellKind::Place => {
                let params = PlaceCellParams {
                    n,
                    ..PlaceCellParams::default()
                };
                Ok(Box::new(PlaceCells::new(Arc::clone(env), params, rng)?))
            }
            CellKind::Grid => {
                let params = GridCellParams {
                    n,
                    ..GridCellParams::default()
                };
                Ok(Box::new(GridCells::new(Arc::clone(env), params, rng)?))
            }
        }
    }
}

impl FromStr for CellKind {
    type Err = CellsError;

    fn from_str(s: &str) -> CellsResult<Self> {
        match s {
            "place_cells" => Ok(CellKind::Place),
            "grid_cells" => Ok(CellKind::Grid),
            other => Err(CellsError::UnknownCellKind(other.to_owned())),
        }
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

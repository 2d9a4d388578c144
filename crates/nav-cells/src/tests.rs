//! Unit tests for nav-cells.

use std::sync::Arc;

use nav_core::{CellId, ComponentRng, Point};
use nav_env::{BoundaryConditions, Dimensionality, Environment, EnvironmentConfig};

use crate::{
    CellKind, CellsError, GridCellParams, GridCells, PlaceCellParams, PlaceCells, RateModel,
    RatePopulation, TuningCurve,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn square_env(bc: BoundaryConditions) -> Arc<Environment> {
    Arc::new(
        Environment::new(EnvironmentConfig {
            boundary_conditions: bc,
            ..EnvironmentConfig::default()
        })
        .unwrap(),
    )
}

fn track_env() -> Arc<Environment> {
    Arc::new(
        Environment::new(EnvironmentConfig {
            dimensionality: Dimensionality::OneD,
            ..EnvironmentConfig::default()
        })
        .unwrap(),
    )
}

fn rng() -> ComponentRng {
    ComponentRng::new(42, 1)
}

// ── PlaceCells ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod place_cells {
    use super::*;

    #[test]
    fn centres_sampled_inside_environment() {
        let env = square_env(BoundaryConditions::Solid);
        let pcs = PlaceCells::new(Arc::clone(&env), PlaceCellParams::default(), &mut rng()).unwrap();
        assert_eq!(pcs.len(), 100);
        assert!(pcs.centres().iter().all(|&c| env.contains(c)));
    }

    #[test]
    fn gaussian_peaks_at_centre_and_decays() {
        let env = square_env(BoundaryConditions::Solid);
        let params = PlaceCellParams {
            widths: 0.1,
            max_fr: 2.0,
            ..PlaceCellParams::default()
        };
        let pcs =
            PlaceCells::with_centres(env, params, vec![Point::new(0.5, 0.5)]).unwrap();

        let at_centre = pcs.rate_at(CellId(0), Point::new(0.5, 0.5));
        assert!((at_centre - 2.0).abs() < 1e-12);

        let near = pcs.rate_at(CellId(0), Point::new(0.55, 0.5));
        let far = pcs.rate_at(CellId(0), Point::new(0.9, 0.5));
        assert!(at_centre > near && near > far);
        assert!(far >= 0.0);
    }

    #[test]
    fn threshold_tuning_is_zero_outside_one_sigma() {
        let env = square_env(BoundaryConditions::Solid);
        let params = PlaceCellParams {
            widths: 0.1,
            tuning: TuningCurve::GaussianThreshold,
            ..PlaceCellParams::default()
        };
        let pcs =
            PlaceCells::with_centres(env, params, vec![Point::new(0.5, 0.5)]).unwrap();
        assert!(pcs.rate_at(CellId(0), Point::new(0.75, 0.5)).abs() < 1e-12);
        assert!((pcs.rate_at(CellId(0), Point::new(0.5, 0.5)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn top_hat_is_binary() {
        let env = square_env(BoundaryConditions::Solid);
        let params = PlaceCellParams {
            widths: 0.1,
            tuning: TuningCurve::TopHat,
            ..PlaceCellParams::default()
        };
        let pcs =
            PlaceCells::with_centres(env, params, vec![Point::new(0.5, 0.5)]).unwrap();
        assert_eq!(pcs.rate_at(CellId(0), Point::new(0.55, 0.5)), 1.0);
        assert_eq!(pcs.rate_at(CellId(0), Point::new(0.7, 0.5)), 0.0);
    }

    #[test]
    fn periodic_field_wraps_across_seam() {
        let env = square_env(BoundaryConditions::Periodic);
        let params = PlaceCellParams {
            widths: 0.1,
            ..PlaceCellParams::default()
        };
        let pcs =
            PlaceCells::with_centres(env, params, vec![Point::new(0.05, 0.5)]).unwrap();
        // 0.95 is 0.1 away around the torus, not 0.9 across the box.
        let wrapped = pcs.rate_at(CellId(0), Point::new(0.95, 0.5));
        let expected = (-0.1_f64.powi(2) / (2.0 * 0.1 * 0.1)).exp();
        assert!((wrapped - expected).abs() < 1e-12);
    }

    #[test]
    fn invalid_params_rejected() {
        let env = square_env(BoundaryConditions::Solid);
        let zero_cells = PlaceCellParams {
            n: 0,
            ..PlaceCellParams::default()
        };
        assert!(matches!(
            PlaceCells::new(Arc::clone(&env), zero_cells, &mut rng()),
            Err(CellsError::NoCells)
        ));

        let bad_width = PlaceCellParams {
            widths: 0.0,
            ..PlaceCellParams::default()
        };
        assert!(PlaceCells::new(env, bad_width, &mut rng()).is_err());
    }

    #[test]
    fn centre_outside_environment_rejected() {
        let env = square_env(BoundaryConditions::Solid);
        let result = PlaceCells::with_centres(
            env,
            PlaceCellParams::default(),
            vec![Point::new(1.5, 0.5)],
        );
        assert!(matches!(result, Err(CellsError::CentreOutsideEnvironment(_))));
    }

    #[test]
    fn works_in_one_d() {
        let env = track_env();
        let pcs = PlaceCells::new(env, PlaceCellParams::default(), &mut rng()).unwrap();
        let rates = pcs.rates(Point::new(0.5, 0.0));
        assert_eq!(rates.len(), 100);
        assert!(rates.iter().all(|&r| r >= 0.0));
    }
}

// ── GridCells ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_cells {
    use super::*;

    #[test]
    fn rates_are_bounded() {
        let env = square_env(BoundaryConditions::Solid);
        let gcs = GridCells::new(env, GridCellParams::default(), &mut rng()).unwrap();
        for &p in &[
            Point::new(0.1, 0.1),
            Point::new(0.5, 0.5),
            Point::new(0.9, 0.2),
        ] {
            for r in gcs.rates(p) {
                assert!((0.0..=1.0).contains(&r), "rate {r} out of [0, max_fr]");
            }
        }
    }

    #[test]
    fn peak_rate_at_each_cell_offset() {
        let env = square_env(BoundaryConditions::Solid);
        let params = GridCellParams {
            n: 5,
            max_fr: 3.0,
            ..GridCellParams::default()
        };
        let gcs = GridCells::new(env, params, &mut rng()).unwrap();
        for (i, &offset) in gcs.offsets().iter().enumerate() {
            let r = gcs.rate_at(CellId(i as u32), offset);
            assert!((r - 3.0).abs() < 1e-9, "cell {i} peaked at {r}, not max_fr");
        }
    }

    #[test]
    fn rate_repeats_along_the_lattice() {
        let env = square_env(BoundaryConditions::Solid);
        let params = GridCellParams {
            n: 1,
            gridscale: 0.2,
            ..GridCellParams::default()
        };
        let gcs = GridCells::new(env, params, &mut rng()).unwrap();
        // Translating by gridscale·√3 along the first grating axis shifts
        // the three cosine phases by (4π, 2π, -2π), leaving the rate fixed.
        let step = Point::from_angle(gcs.orientations()[0]) * (0.2 * 3.0_f64.sqrt());
        for &p in &[Point::new(0.1, 0.3), Point::new(0.4, 0.2)] {
            let a = gcs.rate_at(CellId(0), p);
            let b = gcs.rate_at(CellId(0), p + step);
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn one_d_environment_rejected() {
        let env = track_env();
        let result = GridCells::new(env, GridCellParams::default(), &mut rng());
        assert!(matches!(result, Err(CellsError::RequiresTwoD { .. })));
    }

    #[test]
    fn invalid_gridscale_rejected() {
        let env = square_env(BoundaryConditions::Solid);
        let params = GridCellParams {
            gridscale: -0.1,
            ..GridCellParams::default()
        };
        assert!(GridCells::new(env, params, &mut rng()).is_err());
    }
}

// ── RatePopulation ────────────────────────────────────────────────────────────

#[cfg(test)]
mod population {
    use super::*;

    #[test]
    fn update_appends_one_rate_vector() {
        let env = square_env(BoundaryConditions::Solid);
        let pcs = PlaceCells::new(env, PlaceCellParams::default(), &mut rng()).unwrap();
        let mut pop = RatePopulation::new("pcs", pcs);

        assert_eq!(pop.history().len(), 0);
        for i in 1..=10 {
            pop.update(Point::new(0.5, 0.5));
            assert_eq!(pop.history().len(), i);
        }
        assert_eq!(pop.history().rate_vectors()[0].len(), 100);
    }

    #[test]
    fn update_uses_the_position_it_is_given() {
        let env = square_env(BoundaryConditions::Solid);
        let params = PlaceCellParams {
            widths: 0.1,
            ..PlaceCellParams::default()
        };
        let pcs = PlaceCells::with_centres(env, params, vec![Point::new(0.5, 0.5)]).unwrap();
        let mut pop = RatePopulation::new("pcs", pcs);

        pop.update(Point::new(0.5, 0.5));
        pop.update(Point::new(0.9, 0.9));
        let h = pop.history().rate_vectors();
        assert!((h[0][0] - 1.0).abs() < 1e-12);
        assert!(h[1][0] < h[0][0]);
        // Probing is side-effect free.
        let probed = pop.probe(Point::new(0.5, 0.5));
        assert_eq!(pop.history().len(), 2);
        assert!((probed[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn head_is_idempotent_and_clamped() {
        let env = square_env(BoundaryConditions::Solid);
        let pcs = PlaceCells::new(env, PlaceCellParams::default(), &mut rng()).unwrap();
        let mut pop = RatePopulation::new("pcs", pcs);
        for _ in 0..3 {
            pop.update(Point::new(0.2, 0.2));
        }
        let a = pop.history().head(10).to_vec();
        let b = pop.history().head(10).to_vec();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn known_kinds_parse_and_build() {
        let env = square_env(BoundaryConditions::Solid);
        for name in crate::registry::KNOWN_KINDS {
            let kind = CellKind::from_str(name).unwrap();
            assert_eq!(kind.as_str(), *name);
            let model = kind.build(&env, 10, &mut rng()).unwrap();
            assert_eq!(model.len(), 10);
        }
    }

    #[test]
    fn unknown_kind_rejected() {
        let err = CellKind::from_str("boundary_vector_cells").unwrap_err();
        assert!(matches!(err, CellsError::UnknownCellKind(_)));
    }

    #[test]
    fn grid_kind_respects_dimensionality() {
        let env = track_env();
        assert!(CellKind::Grid.build(&env, 10, &mut rng()).is_err());
        assert!(CellKind::Place.build(&env, 10, &mut rng()).is_ok());
    }
}

// ── Rate maps ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rate_maps {
    use super::*;
    use crate::rate_map;

    #[test]
    fn map_covers_every_bin() {
        let env = Arc::new(
            Environment::new(EnvironmentConfig {
                dx: 0.1,
                ..EnvironmentConfig::default()
            })
            .unwrap(),
        );
        let pcs = PlaceCells::new(Arc::clone(&env), PlaceCellParams::default(), &mut rng()).unwrap();
        let map = rate_map(&pcs, &env);
        assert_eq!(map.len(), 100); // 10 × 10 bins
        assert!(map.iter().all(|rates| rates.len() == 100));
    }
}

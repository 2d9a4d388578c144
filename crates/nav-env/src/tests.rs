//! Unit tests for nav-env.

use nav_core::Point;

use crate::{BoundaryConditions, Dimensionality, Environment, EnvironmentConfig};

fn square_solid() -> Environment {
    Environment::new(EnvironmentConfig::default()).unwrap()
}

fn square_periodic() -> Environment {
    Environment::new(EnvironmentConfig {
        boundary_conditions: BoundaryConditions::Periodic,
        ..EnvironmentConfig::default()
    })
    .unwrap()
}

fn track_1d(bc: BoundaryConditions) -> Environment {
    Environment::new(EnvironmentConfig {
        dimensionality: Dimensionality::OneD,
        boundary_conditions: bc,
        scale: 2.0,
        ..EnvironmentConfig::default()
    })
    .unwrap()
}

#[cfg(test)]
mod config {
    use std::str::FromStr;

    use super::*;
    use crate::EnvError;

    #[test]
    fn default_config_is_valid() {
        assert!(EnvironmentConfig::default().validate().is_ok());
    }

    #[test]
    fn dimensionality_parses() {
        assert_eq!(Dimensionality::from_str("1D").unwrap(), Dimensionality::OneD);
        assert_eq!(Dimensionality::from_str("2d").unwrap(), Dimensionality::TwoD);
    }

    #[test]
    fn three_d_is_rejected() {
        let err = Dimensionality::from_str("3D").unwrap_err();
        assert!(matches!(err, EnvError::UnknownDimensionality(_)));
    }

    #[test]
    fn boundary_parses() {
        assert_eq!(
            BoundaryConditions::from_str("solid").unwrap(),
            BoundaryConditions::Solid
        );
        assert_eq!(
            BoundaryConditions::from_str("PERIODIC").unwrap(),
            BoundaryConditions::Periodic
        );
        assert!(BoundaryConditions::from_str("reflective").is_err());
    }

    #[test]
    fn non_positive_reals_rejected() {
        for (scale, aspect, dx) in [(0.0, 1.0, 0.01), (1.0, -2.0, 0.01), (1.0, 1.0, 0.0)] {
            let cfg = EnvironmentConfig {
                scale,
                aspect,
                dx,
                ..EnvironmentConfig::default()
            };
            assert!(cfg.validate().is_err(), "({scale}, {aspect}, {dx}) accepted");
            assert!(Environment::new(cfg).is_err());
        }
    }

    #[test]
    fn nan_scale_rejected() {
        let cfg = EnvironmentConfig {
            scale: f64::NAN,
            ..EnvironmentConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod geometry {
    use super::*;

    #[test]
    fn extent_follows_scale_and_aspect() {
        let env = Environment::new(EnvironmentConfig {
            scale: 2.0,
            aspect: 1.5,
            ..EnvironmentConfig::default()
        })
        .unwrap();
        assert!((env.width() - 3.0).abs() < 1e-12);
        assert!((env.height() - 2.0).abs() < 1e-12);
        assert_eq!(env.dims(), 2);
    }

    #[test]
    fn one_d_extent() {
        let env = track_1d(BoundaryConditions::Solid);
        assert!((env.width() - 2.0).abs() < 1e-12);
        assert_eq!(env.height(), 0.0);
        assert_eq!(env.dims(), 1);
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let env = square_solid();
        assert!(env.contains(Point::new(0.0, 0.0)));
        assert!(env.contains(Point::new(1.0, 1.0)));
        assert!(env.contains(Point::new(0.5, 0.5)));
        assert!(!env.contains(Point::new(1.01, 0.5)));
        assert!(!env.contains(Point::new(0.5, -0.01)));
    }

    #[test]
    fn solid_boundary_clamps() {
        let env = square_solid();
        let p = env.apply_boundary(Point::new(1.3, -0.2));
        assert_eq!(p, Point::new(1.0, 0.0));
        assert!(env.contains(p));
    }

    #[test]
    fn periodic_boundary_wraps() {
        let env = square_periodic();
        let p = env.apply_boundary(Point::new(1.25, -0.25));
        assert!((p.x - 0.25).abs() < 1e-12);
        assert!((p.y - 0.75).abs() < 1e-12);
    }

    #[test]
    fn one_d_projection_zeroes_y() {
        let env = track_1d(BoundaryConditions::Solid);
        let p = env.apply_boundary(Point::new(2.5, 0.7));
        assert_eq!(p, Point::new(2.0, 0.0));
    }

    #[test]
    fn interior_points_unchanged() {
        for env in [square_solid(), square_periodic()] {
            let p = Point::new(0.4, 0.6);
            assert_eq!(env.apply_boundary(p), p);
        }
    }

    #[test]
    fn periodic_distance_takes_short_way() {
        let env = square_periodic();
        let a = Point::new(0.05, 0.5);
        let b = Point::new(0.95, 0.5);
        // Across the seam: 0.1, not 0.9.
        assert!((env.distance(a, b) - 0.1).abs() < 1e-12);

        let solid = square_solid();
        assert!((solid.distance(a, b) - 0.9).abs() < 1e-12);
    }
}

#[cfg(test)]
mod sampling {
    use nav_core::ComponentRng;

    use super::*;

    #[test]
    fn samples_stay_inside() {
        let env = square_solid();
        let mut rng = ComponentRng::new(3, 0);
        for _ in 0..1000 {
            let p = env.sample_position(rng.inner());
            assert!(env.contains(p), "sampled {p} outside arena");
        }
    }

    #[test]
    fn one_d_samples_have_zero_y() {
        let env = track_1d(BoundaryConditions::Periodic);
        let mut rng = ComponentRng::new(3, 0);
        for _ in 0..100 {
            assert_eq!(env.sample_position(rng.inner()).y, 0.0);
        }
    }

    #[test]
    fn bin_centres_tile_the_arena() {
        let env = Environment::new(EnvironmentConfig {
            scale: 1.0,
            aspect: 1.0,
            dx: 0.1,
            ..EnvironmentConfig::default()
        })
        .unwrap();
        let centres = env.bin_centres();
        assert_eq!(centres.len(), 100);
        assert!(centres.iter().all(|&c| env.contains(c)));
        assert_eq!(centres[0], Point::new(0.05, 0.05));
    }

    #[test]
    fn one_d_bin_centres() {
        let env = Environment::new(EnvironmentConfig {
            dimensionality: Dimensionality::OneD,
            scale: 1.0,
            dx: 0.25,
            ..EnvironmentConfig::default()
        })
        .unwrap();
        let centres = env.bin_centres();
        assert_eq!(centres.len(), 4);
        assert!((centres[3].x - 0.875).abs() < 1e-12);
    }
}

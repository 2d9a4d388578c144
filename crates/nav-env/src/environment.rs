//! The `Environment`: an immutable rectangular arena.

use rand::Rng;

use nav_core::Point;

use crate::{BoundaryConditions, Dimensionality, EnvResult, EnvironmentConfig};

/// A passive spatial description shared by the agent and cell populations.
///
/// Immutable after construction.  The arena is the axis-aligned box
/// `[0, width] × [0, height]` where:
///
/// - 1D: `width = scale`, `height = 0` (positions live on the x axis);
/// - 2D: `width = scale * aspect`, `height = scale`.
///
/// All geometry queries are read-only; the only policy decision the
/// environment owns is how [`apply_boundary`][Self::apply_boundary] treats a
/// candidate position that left the box.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    config: EnvironmentConfig,
    width: f64,
    height: f64,
}

impl Environment {
    /// Validate `config` and build the arena.  Fails fast on any invalid
    /// option; a constructed `Environment` cannot error afterwards.
    pub fn new(config: EnvironmentConfig) -> EnvResult<Self> {
        config.validate()?;
        let (width, height) = match config.dimensionality {
            Dimensionality::OneD => (config.scale, 0.0),
            Dimensionality::TwoD => (config.scale * config.aspect, config.scale),
        };
        Ok(Self { config, width, height })
    }

    // ── Read-only geometry queries ────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    #[inline]
    pub fn dimensionality(&self) -> Dimensionality {
        self.config.dimensionality
    }

    /// Number of meaningful position components (1 or 2).
    #[inline]
    pub fn dims(&self) -> usize {
        self.config.dimensionality.dims()
    }

    #[inline]
    pub fn boundary_conditions(&self) -> BoundaryConditions {
        self.config.boundary_conditions
    }

    /// Arena extent along x, in metres.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Arena extent along y, in metres.  Zero in 1D.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// `true` if `p` lies inside the arena (boundary inclusive).
    pub fn contains(&self, p: Point) -> bool {
        match self.config.dimensionality {
            Dimensionality::OneD => (0.0..=self.width).contains(&p.x),
            Dimensionality::TwoD => {
                (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
            }
        }
    }

    // ── Boundary policy ───────────────────────────────────────────────────

    /// Project a candidate position back into the arena according to the
    /// boundary conditions: clamp for [`Solid`], wrap for [`Periodic`].
    ///
    /// In 1D the y component is forced to zero regardless of policy.
    ///
    /// [`Solid`]: BoundaryConditions::Solid
    /// [`Periodic`]: BoundaryConditions::Periodic
    pub fn apply_boundary(&self, p: Point) -> Point {
        let project = |v: f64, max: f64| match self.config.boundary_conditions {
            BoundaryConditions::Solid => v.clamp(0.0, max),
            BoundaryConditions::Periodic => wrap(v, max),
        };
        match self.config.dimensionality {
            Dimensionality::OneD => Point::new(project(p.x, self.width), 0.0),
            Dimensionality::TwoD => {
                Point::new(project(p.x, self.width), project(p.y, self.height))
            }
        }
    }

    /// Displacement from `a` to `b`, taking the short way around under
    /// periodic boundaries.  Cell tuning curves use this so that a place
    /// field near one edge of a torus also responds near the opposite edge.
    pub fn shortest_displacement(&self, a: Point, b: Point) -> Point {
        let mut d = b - a;
        if self.config.boundary_conditions == BoundaryConditions::Periodic {
            d.x = periodic_component(d.x, self.width);
            if self.config.dimensionality == Dimensionality::TwoD {
                d.y = periodic_component(d.y, self.height);
            }
        }
        d
    }

    /// Distance from `a` to `b` under this environment's topology.
    #[inline]
    pub fn distance(&self, a: Point, b: Point) -> f64 {
        self.shortest_displacement(a, b).norm()
    }

    // ── Sampling and discretisation ───────────────────────────────────────

    /// A position drawn uniformly from the arena.
    pub fn sample_position<R: Rng>(&self, rng: &mut R) -> Point {
        match self.config.dimensionality {
            Dimensionality::OneD => Point::new(rng.gen_range(0.0..=self.width), 0.0),
            Dimensionality::TwoD => Point::new(
                rng.gen_range(0.0..=self.width),
                rng.gen_range(0.0..=self.height),
            ),
        }
    }

    /// Centres of the `dx`-sized bins tiling the arena, row-major.
    ///
    /// This is the rasterisation grid for rate maps and occupancy plots.
    /// Nothing in the simulation loop reads it — `dx` must never affect
    /// dynamics.
    pub fn bin_centres(&self) -> Vec<Point> {
        let dx = self.config.dx;
        let nx = (self.width / dx).ceil().max(1.0) as usize;
        match self.config.dimensionality {
            Dimensionality::OneD => (0..nx)
                .map(|i| Point::new((i as f64 + 0.5) * dx, 0.0))
                .collect(),
            Dimensionality::TwoD => {
                let ny = (self.height / dx).ceil().max(1.0) as usize;
                let mut centres = Vec::with_capacity(nx * ny);
                for j in 0..ny {
                    for i in 0..nx {
                        centres.push(Point::new((i as f64 + 0.5) * dx, (j as f64 + 0.5) * dx));
                    }
                }
                centres
            }
        }
    }
}

/// Wrap `v` into `[0, max)` (torus coordinate).
fn wrap(v: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    let r = v.rem_euclid(max);
    // rem_euclid can return `max` itself when v is a tiny negative number.
    if r >= max { r - max } else { r }
}

/// Map a displacement component into `[-max/2, max/2)`.
fn periodic_component(d: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return d;
    }
    let half = max / 2.0;
    (d + half).rem_euclid(max) - half
}

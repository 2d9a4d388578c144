//! The `Agent` and its stepping logic.

use std::sync::Arc;

use nav_core::{ComponentRng, Point};
use nav_env::{Dimensionality, Environment};

use crate::motion::ornstein_uhlenbeck;
use crate::{AgentError, AgentHistory, AgentParams, AgentResult};

/// A stateful entity moving through a shared [`Environment`].
///
/// Created once, updated N times, read at the end.  Only
/// [`update`][Self::update] mutates position/velocity/history; everything
/// else is a read-only accessor.
pub struct Agent {
    env: Arc<Environment>,
    params: AgentParams,
    rng: ComponentRng,

    time: f64,
    position: Point,
    /// Intended velocity driven by the OU processes.
    velocity: Point,
    /// Signed rotational velocity, rad/s.  2D only; stays 0 in 1D.
    rotational_velocity: f64,
    distance_travelled: f64,

    history: AgentHistory,
}

impl Agent {
    /// Construct an agent at a uniformly random position with a
    /// `speed_mean`-magnitude initial velocity in a random direction.
    ///
    /// The environment is shared, not owned: the caller keeps its own
    /// `Arc` and may hand clones to cell populations and the driver.
    pub fn new(
        env: Arc<Environment>,
        params: AgentParams,
        mut rng: ComponentRng,
    ) -> AgentResult<Self> {
        params.validate()?;

        let position = env.sample_position(rng.inner());
        let velocity = match env.dimensionality() {
            Dimensionality::OneD => Point::new(params.speed_mean, 0.0),
            Dimensionality::TwoD => {
                let angle = rng.gen_range(0.0..std::f64::consts::TAU);
                Point::from_angle(angle) * params.speed_mean
            }
        };

        Ok(Self {
            env,
            params,
            rng,
            time: 0.0,
            position,
            velocity,
            rotational_velocity: 0.0,
            distance_travelled: 0.0,
            history: AgentHistory::new(),
        })
    }

    /// Place the agent at an explicit starting position.
    ///
    /// Errors if `position` lies outside the environment; this is a setup
    /// mistake, not something to silently project away.
    pub fn set_position(&mut self, position: Point) -> AgentResult<()> {
        if !self.env.contains(position) {
            return Err(AgentError::PositionOutsideEnvironment(position));
        }
        self.position = position;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Current (most recent) position.
    #[inline]
    pub fn pos(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Point {
        self.velocity
    }

    /// Simulated time, seconds (number of updates × dt).
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Integration time step, seconds.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.params.dt
    }

    /// Total path length travelled, metres.
    #[inline]
    pub fn distance_travelled(&self) -> f64 {
        self.distance_travelled
    }

    #[inline]
    pub fn params(&self) -> &AgentParams {
        &self.params
    }

    #[inline]
    pub fn environment(&self) -> &Arc<Environment> {
        &self.env
    }

    #[inline]
    pub fn history(&self) -> &AgentHistory {
        &self.history
    }

    /// Discard the recorded history without touching the kinematic state.
    pub fn reset_history(&mut self) {
        self.history.clear();
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one time step.
    ///
    /// Updates the velocity via the OU motion model, proposes
    /// `pos + vel * dt`, projects the proposal through the environment's
    /// boundary policy, and appends exactly one entry to the history.
    /// Infallible: every candidate position has a valid projection.
    pub fn update(&mut self) {
        let dt = self.params.dt;
        self.update_velocity(dt);

        let prev = self.position;
        let proposed = prev + self.velocity * dt;
        self.position = self.env.apply_boundary(proposed);

        // Measured velocity reflects the projected displacement, which can
        // differ from the intended velocity when a wall clamps the step.
        let displacement = self.env.shortest_displacement(prev, self.position);
        let measured = displacement * (1.0 / dt);
        self.distance_travelled += displacement.norm();

        self.time += dt;
        self.history.record(self.time, self.position, measured);
    }

    /// One OU step of the velocity state.
    fn update_velocity(&mut self, dt: f64) {
        match self.env.dimensionality() {
            Dimensionality::OneD => {
                // A single signed-speed OU process relaxing toward
                // speed_mean.  Negative excursions turn the agent around.
                let speed = ornstein_uhlenbeck(
                    self.velocity.x,
                    self.params.speed_mean,
                    self.params.speed_std,
                    self.params.speed_coherence_time,
                    dt,
                    &mut self.rng,
                );
                self.velocity = Point::new(speed, 0.0);
            }
            Dimensionality::TwoD => {
                // Heading: OU on rotational velocity, then rotate.
                self.rotational_velocity = ornstein_uhlenbeck(
                    self.rotational_velocity,
                    0.0,
                    self.params.rotational_velocity_std,
                    self.params.rotational_velocity_coherence_time,
                    dt,
                    &mut self.rng,
                );
                self.velocity = self.velocity.rotated(self.rotational_velocity * dt);

                // Magnitude: OU on speed, kept non-negative.
                let speed = self.velocity.norm();
                let new_speed = if self.params.speed_std == 0.0 {
                    self.params.speed_mean
                } else {
                    ornstein_uhlenbeck(
                        speed,
                        self.params.speed_mean,
                        self.params.speed_std,
                        self.params.speed_coherence_time,
                        dt,
                        &mut self.rng,
                    )
                    .max(0.0)
                };

                self.velocity = match self.velocity.normalized() {
                    Some(dir) => dir * new_speed,
                    // Stalled: restart in a random direction.
                    None => {
                        let angle = self.rng.gen_range(0.0..std::f64::consts::TAU);
                        Point::from_angle(angle) * new_speed
                    }
                };
            }
        }
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("dimensionality", &self.env.dimensionality())
            .field("time", &self.time)
            .field("position", &self.position)
            .field("history_len", &self.history.len())
            .finish()
    }
}

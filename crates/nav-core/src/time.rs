//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Step` counter.  The
//! mapping to simulated seconds is held in `SimClock`:
//!
//!   sim_time = step * dt_secs
//!
//! Using an integer step as the canonical time unit means the driver loop and
//! all history indexing are exact; `dt` only enters when converting to
//! seconds for the motion model or for output.
//!
//! The default step duration is 0.05 s, the update interval of the reference
//! rate-coded navigation models.  Applications that need coarser or finer
//! resolution set `dt_secs` accordingly; the rest of the framework is
//! agnostic.

use std::fmt;

use crate::{NavError, NavResult};

// ── Step ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
///
/// Stored as `u64`: at the default 0.05 s per step, a u64 lasts ~29 billion
/// years of simulated time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// Return the step `n` iterations after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Step {
        Step(self.0 + n)
    }

    /// Steps elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Step) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u64) -> Step {
        Step(self.0 + rhs)
    }
}

impl std::ops::Sub for Step {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Step) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between step counts and simulated seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated seconds one step represents.
    pub dt_secs: f64,
    /// The current step — advanced by `SimClock::advance()` each iteration.
    pub current_step: Step,
}

impl SimClock {
    /// Create a clock at step 0 with the given resolution.
    pub fn new(dt_secs: f64) -> Self {
        Self {
            dt_secs,
            current_step: Step::ZERO,
        }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_step = Step(self.current_step.0 + 1);
    }

    /// Elapsed simulated seconds since step 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_step.0 as f64 * self.dt_secs
    }

    /// Simulated seconds corresponding to an arbitrary step.
    #[inline]
    pub fn secs_at(&self, step: Step) -> f64 {
        step.0 as f64 * self.dt_secs
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t = {:.2} s)", self.current_step, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically constructed inline by the application crate and passed to
/// `SimBuilder`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total simulated duration in seconds.
    pub duration_secs: f64,

    /// Seconds per step.  Must be positive.  Default: 0.05.
    pub dt_secs: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit an observer snapshot every N steps.  1 = every step;
    /// 0 = never snapshot.
    pub snapshot_interval_steps: u64,
}

impl SimConfig {
    /// Number of driver-loop iterations: `duration_secs / dt_secs`,
    /// **truncated** toward zero.
    ///
    /// Truncation (rather than rounding) is a deliberate contract: a run of
    /// 2000 s at dt = 1 s performs exactly 2000 steps, and a duration that
    /// is not an exact multiple of `dt` simulates slightly *less* than
    /// requested, never more.
    #[inline]
    pub fn steps(&self) -> u64 {
        (self.duration_secs / self.dt_secs) as u64
    }

    /// The step at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.steps())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.dt_secs)
    }

    /// Reject non-positive or non-finite time parameters.
    pub fn validate(&self) -> NavResult<()> {
        if !self.dt_secs.is_finite() || self.dt_secs <= 0.0 {
            return Err(NavError::Config(format!(
                "dt_secs must be positive and finite, got {}",
                self.dt_secs
            )));
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(NavError::Config(format!(
                "duration_secs must be non-negative and finite, got {}",
                self.duration_secs
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            duration_secs: 60.0,
            dt_secs: 0.05,
            seed: 0,
            snapshot_interval_steps: 0,
        }
    }
}

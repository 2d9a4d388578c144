//! Deterministic per-component and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each stochastic component (the agent's motion model, each cell
//! population's centre sampling) gets its own independent `SmallRng` seeded
//! by:
//!
//!   seed = global_seed XOR (stream_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive stream IDs uniformly across the seed space.
//! This means:
//!
//! - Components never share RNG state, so adding a population to a run does
//!   not disturb the agent's trajectory.
//! - The same (seed, stream) pair always reproduces the same sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── ComponentRng ──────────────────────────────────────────────────────────────

/// Per-component deterministic RNG.
///
/// Create one per stochastic component at construction time, keyed by a
/// stream ID the application chooses (0 = agent, 1.. = populations is the
/// convention used by `rust_nav` itself).
pub struct ComponentRng(SmallRng);

impl ComponentRng {
    /// Seed deterministically from the run's global seed and a stream ID.
    pub fn new(global_seed: u64, stream: u64) -> Self {
        let seed = global_seed ^ stream.wrapping_mul(MIXING_CONSTANT);
        ComponentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A sample from the unit normal distribution N(0, 1).
    ///
    /// The Ornstein–Uhlenbeck motion model draws one of these per velocity
    /// component per step.
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        self.0.sample(StandardNormal)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (initial placement, exogenous
/// perturbations, etc.).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `ComponentRng` with a different stream offset — useful
    /// for seeding component RNGs deterministically from the root seed.
    pub fn child(&mut self, stream: u64) -> ComponentRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ stream.wrapping_mul(MIXING_CONSTANT);
        ComponentRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

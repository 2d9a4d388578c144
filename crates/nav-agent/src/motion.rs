//! Ornstein–Uhlenbeck integration for the random-walk motion model.
//!
//! The OU process relaxes a value toward `mean` with coherence time `tau`
//! while injecting Gaussian noise scaled so the stationary distribution has
//! standard deviation `std`:
//!
//!   x' = x + (mean - x) * dt/tau + std * sqrt(2 dt / tau) * N(0, 1)
//!
//! Speed (both dimensionalities) and rotational velocity (2D) are each one
//! OU process; the 2D velocity vector is rebuilt from the two each step.

use nav_core::ComponentRng;

/// One Euler–Maruyama step of an OU process.
///
/// `tau` must be positive (enforced by `AgentParams::validate`).
pub fn ornstein_uhlenbeck(
    current: f64,
    mean: f64,
    std: f64,
    tau: f64,
    dt: f64,
    rng: &mut ComponentRng,
) -> f64 {
    let drift = (mean - current) * (dt / tau);
    let noise = std * (2.0 * dt / tau).sqrt() * rng.standard_normal();
    current + drift + noise
}

//! Motion-model parameters.

use crate::{AgentError, AgentResult};

/// Parameters of the smooth random-walk motion model.
///
/// Defaults reproduce rodent-like open-field foraging statistics (speeds in
/// m/s, times in seconds, angles in radians).
#[derive(Clone, Debug)]
pub struct AgentParams {
    /// Integration time step, seconds.
    pub dt: f64,

    /// Mean speed the OU process relaxes toward, m/s.
    pub speed_mean: f64,

    /// Standard deviation of the speed OU process, m/s.  Zero pins the
    /// speed to `speed_mean` exactly.
    pub speed_std: f64,

    /// Coherence time of the speed OU process, seconds.
    pub speed_coherence_time: f64,

    /// Standard deviation of the rotational-velocity OU process, rad/s.
    /// Only used in 2D.
    pub rotational_velocity_std: f64,

    /// Coherence time of the rotational-velocity OU process, seconds.
    /// Only used in 2D.
    pub rotational_velocity_coherence_time: f64,
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            dt: 0.05,
            speed_mean: 0.08,
            speed_std: 0.08,
            speed_coherence_time: 0.7,
            rotational_velocity_std: (120.0_f64).to_radians(),
            rotational_velocity_coherence_time: 0.08,
        }
    }
}

impl AgentParams {
    /// Reject parameter combinations the motion model cannot integrate.
    pub fn validate(&self) -> AgentResult<()> {
        for (field, value) in [
            ("dt", self.dt),
            ("speed_coherence_time", self.speed_coherence_time),
            (
                "rotational_velocity_coherence_time",
                self.rotational_velocity_coherence_time,
            ),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AgentError::NonPositiveParam { field, value });
            }
        }
        for (field, value) in [
            ("speed_mean", self.speed_mean),
            ("speed_std", self.speed_std),
            ("rotational_velocity_std", self.rotational_velocity_std),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AgentError::NegativeParam { field, value });
            }
        }
        Ok(())
    }
}

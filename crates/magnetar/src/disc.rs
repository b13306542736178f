use serde::{Deserialize, Serialize};

use units::{Length, Mass, MassRate, Time, Velocity};

/// Supernova debris disc feeding the magnetar.
///
/// Material that failed to reach escape velocity circularises at a fixed
/// radius and drains inward on the viscous timescale, while the tail of
/// the fallback keeps topping the disc up. `epsilon` and `delta` rescale
/// the fallback timescale and mass budget relative to the disc itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackDisc {
    /// Disc mass at birth
    pub initial_mass: Mass,
    /// Circularisation radius of the disc
    pub radius: Length,
    /// Dimensionless viscosity parameter
    ///
    /// # References
    /// - Shakura & Sunyaev (1973), A&A 24, 337
    pub alpha: f64,
    /// Sound speed in the disc
    pub sound_speed: Velocity,
    /// Fallback timescale in units of the viscous timescale
    pub epsilon: f64,
    /// Fallback mass budget in units of the initial disc mass
    pub delta: f64,
}

impl FallbackDisc {
    /// Creates a disc with the fiducial viscosity (α = 0.1), sound speed
    /// (10⁷ cm/s), and fallback matched to the disc (ε = δ = 1).
    pub fn new(initial_mass: Mass, radius: Length) -> Self {
        Self {
            initial_mass,
            radius,
            alpha: 0.1,
            sound_speed: Velocity::from_cm_per_sec(1.0e7),
            epsilon: 1.0,
            delta: 1.0,
        }
    }

    /// Viscous accretion timescale t_ν = R_disc/(α c_s).
    pub fn viscous_timescale(&self) -> Time {
        Time::from_seconds(self.radius.to_cm() / (self.alpha * self.sound_speed.to_cm_per_sec()))
    }

    /// Fallback timescale t_fb = ε t_ν.
    pub fn fallback_timescale(&self) -> Time {
        self.viscous_timescale() * self.epsilon
    }

    /// Total mass budget of the fallback flow, δ M_disc,i.
    pub fn fallback_budget(&self) -> Mass {
        self.initial_mass * self.delta
    }

    /// Fallback accretion rate (M₀/t_fb)((t + t_fb)/t_fb)^(−5/3) at time
    /// `t` after the explosion.
    ///
    /// # References
    /// - Chevalier (1989), ApJ 346, 847
    pub fn fallback_rate(&self, t: Time) -> MassRate {
        let t_fb = self.fallback_timescale();
        let m0 = self.fallback_budget();
        let rate =
            m0.to_grams() / t_fb.to_seconds() * ((t + t_fb) / t_fb).powf(-5.0 / 3.0);
        MassRate::from_grams_per_sec(rate)
    }
}

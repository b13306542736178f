//! Coupling between the magnetosphere and the disc inflow.
//!
//! Material reaching the Alfvén radius is either funnelled onto the star
//! or centrifugally ejected, depending on whether the magnetosphere
//! rotates slower or faster than the local Keplerian flow. A smooth tanh
//! gate partitions the inflow between the two channels so the integrator
//! never sees a discontinuity at corotation.

use serde::{Deserialize, Serialize};

use units::{Length, MassRate};

use crate::star::Magnetar;

/// Rotation parameter β = T/|W| above which the accretion torque is
/// switched off.
///
/// Past this value the star is unstable to triaxial deformation and
/// accretion can no longer spin it up.
///
/// # References
/// - Piro & Ott (2011), ApJ 736, 108
pub const BETA_MAX: f64 = 0.27;

/// Fastness parameter ω_f = (R_m/R_c)^(3/2).
///
/// Values above one put the magnetosphere in the propeller regime.
pub fn fastness(alfven_radius: Length, corotation_radius: Length) -> f64 {
    (alfven_radius / corotation_radius).powf(1.5)
}

/// Smooth partition of the disc inflow between accretion and ejection.
///
/// `sharpness` controls how abruptly the partition switches around
/// corotation; large values approach a step function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropellerGate {
    pub sharpness: f64,
}

impl Default for PropellerGate {
    fn default() -> Self {
        Self { sharpness: 1.0 }
    }
}

impl PropellerGate {
    pub fn new(sharpness: f64) -> Self {
        Self { sharpness }
    }

    /// Fraction of the inflow ejected by the propeller,
    /// η₂ = ½(1 + tanh(n(ω_f − 1))).
    pub fn ejected_fraction(&self, fastness: f64) -> f64 {
        0.5 * (1.0 + (self.sharpness * (fastness - 1.0)).tanh())
    }

    /// Accreted and ejected fractions (η₁, η₂); the two sum to one.
    pub fn split(&self, fastness: f64) -> (f64, f64) {
        let eta2 = self.ejected_fraction(fastness);
        (1.0 - eta2, eta2)
    }
}

/// Torque exerted by matter moving through the magnetosphere,
/// N_acc = (GM R_eff)^(1/2) (Ṁ_acc − Ṁ_prop) (g·cm²/s²).
///
/// The lever arm R_eff is the Alfvén radius, floored at the stellar
/// surface when the magnetosphere is crushed inside the star. The sign
/// follows the net mass flow: positive while accretion dominates and
/// negative in the propeller regime. Once the rotation parameter exceeds
/// [`BETA_MAX`] the torque shuts off entirely.
pub fn accretion_torque(
    star: &Magnetar,
    alfven_radius: Length,
    accretion_rate: MassRate,
    propeller_rate: MassRate,
    rotation_parameter: f64,
) -> f64 {
    if rotation_parameter > BETA_MAX {
        return 0.0;
    }
    let lever_arm = alfven_radius.max(star.radius);
    let net_rate = accretion_rate.to_grams_per_sec() - propeller_rate.to_grams_per_sec();
    (star.gm() * lever_arm.to_cm()).sqrt() * net_rate
}

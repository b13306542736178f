use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::time::Time;

/// A physical angular velocity quantity using f64 precision.
///
/// The `AngularVelocity` struct represents rotation rates with radians
/// per second as the base unit, the natural variable of the spin-down
/// torque balance. Spin-period conversions cover the observational side.
///
/// # Examples
///
/// ```rust
/// use units::{AngularVelocity, Time};
///
/// let omega = AngularVelocity::from_spin_period(Time::from_milliseconds(5.0));
/// assert!((omega.to_rad_per_sec() - 1256.6370614359173).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngularVelocity(f64); // Base unit: rad/s

impl AngularVelocity {
    /// Creates a new `AngularVelocity` from a value in radians per second.
    pub fn from_rad_per_sec(value: f64) -> Self {
        Self(value)
    }

    /// Angular frequency of a rotator with the given spin period, 2π/P.
    pub fn from_spin_period(period: Time) -> Self {
        Self(TAU / period.to_seconds())
    }

    /// Returns the angular velocity in radians per second.
    pub fn to_rad_per_sec(&self) -> f64 {
        self.0
    }

    /// Spin period of a rotator with this angular frequency.
    pub fn spin_period(&self) -> Time {
        Time::from_seconds(TAU / self.0)
    }
}

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in grams (1.99 × 10³³ g).
///
/// The two-figure value is kept deliberately: the fallback-disc torque
/// balance was published with it, and trajectory comparisons assume it.
pub const SOLAR_MASS_G: f64 = 1.99e33;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct represents mass values with grams as the base unit.
/// CGS grams keep the quantity directly usable inside accretion-rate and
/// torque expressions, while the solar-mass constructor stays convenient
/// for stellar and disc inputs.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let star = Mass::from_solar_masses(1.4);
/// let disc = Mass::from_solar_masses(1.0e-3);
///
/// assert!(star.to_grams() > disc.to_grams());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Mass(f64); // Base unit: grams

impl Mass {
    /// Creates a new `Mass` from a value in grams.
    ///
    /// This is the most direct constructor since grams are the base unit.
    pub fn from_grams(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in solar masses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let neutron_star = Mass::from_solar_masses(1.4);
    /// let debris_disc = Mass::from_solar_masses(1.0e-3);
    /// ```
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value * SOLAR_MASS_G)
    }

    pub fn from_kg(value: f64) -> Self {
        Self(value * 1000.0)
    }

    /// Returns the mass value in grams.
    pub fn to_grams(&self) -> f64 {
        self.0
    }

    /// Converts the mass to solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0 / SOLAR_MASS_G
    }

    pub fn to_kg(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Mass (commutative multiplication)
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub(crate) const CM_PER_KM: f64 = 1.0e5;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with centimetres as the
/// base unit, matching the CGS convention of the magnetospheric radius
/// formulas. Kilometre constructors cover the natural inputs (stellar and
/// disc radii).
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let stellar_radius = Length::from_km(10.0);
/// assert_eq!(stellar_radius.to_cm(), 1.0e6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: centimetres

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in centimetres.
    pub fn from_cm(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometres.
    pub fn from_km(value: f64) -> Self {
        Self(value * CM_PER_KM)
    }

    /// Returns the length in centimetres.
    pub fn to_cm(&self) -> f64 {
        self.0
    }

    /// Converts the length to kilometres.
    pub fn to_km(&self) -> f64 {
        self.0 / CM_PER_KM
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}

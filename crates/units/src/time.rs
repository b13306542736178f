use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0; // 365.25 days per year

const MILLISECONDS_PER_SECOND: f64 = 1_000.0;

/// A physical time quantity using f64 precision.
///
/// The `Time` struct represents time with seconds as the base unit, which
/// is natural for spin periods and early fallback timescales. Millisecond
/// constructors cover spin periods; day and year conversions cover the
/// late evolution.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// // Create times in different units
/// let spin_period = Time::from_milliseconds(5.0);
/// let viscous = Time::from_seconds(10.0);
/// let late = Time::from_days(11.6);
///
/// // Convert between units
/// let seconds = spin_period.to_seconds();
/// let days = late.to_days();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: seconds

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in milliseconds.
    pub fn from_milliseconds(value: f64) -> Self {
        Self(value / MILLISECONDS_PER_SECOND)
    }

    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value * SECONDS_PER_DAY)
    }

    /// Creates a new `Time` from a value in years.
    pub fn from_years(value: f64) -> Self {
        Self(value * SECONDS_PER_YEAR)
    }

    /// Returns the time in seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    /// Converts the time to milliseconds.
    pub fn to_milliseconds(&self) -> f64 {
        self.0 * MILLISECONDS_PER_SECOND
    }

    /// Converts the time to days.
    pub fn to_days(&self) -> f64 {
        self.0 / SECONDS_PER_DAY
    }

    /// Converts the time to years.
    pub fn to_years(&self) -> f64 {
        self.0 / SECONDS_PER_YEAR
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Time (commutative multiplication)
impl Mul<Time> for f64 {
    type Output = Time;

    fn mul(self, rhs: Time) -> Time {
        rhs * self
    }
}

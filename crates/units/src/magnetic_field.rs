use serde::{Deserialize, Serialize};

/// A physical magnetic field strength quantity using f64 precision.
///
/// Base unit is Gauss; magnetar-strength dipole fields are usually
/// quoted in units of 10¹⁵ G.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MagneticField(f64); // Base unit: Gauss

impl MagneticField {
    pub fn from_gauss(value: f64) -> Self {
        Self(value)
    }

    /// Field strength quoted in units of 10¹⁵ G.
    pub fn from_units_of_1e15_gauss(value: f64) -> Self {
        Self(value * 1.0e15)
    }

    pub fn to_gauss(&self) -> f64 {
        self.0
    }
}

//! Physical constants in CGS units.
//!
//! Values are kept at the precision the spin-down model was published
//! with; tightening them shifts the trajectories.

/// Gravitational constant (cm³/(g·s²))
pub const G: f64 = 6.674e-8;

/// Speed of light (cm/s)
pub const SPEED_OF_LIGHT: f64 = 3.0e10;

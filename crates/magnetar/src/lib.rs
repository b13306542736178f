//! Torque balance for a newly born millisecond magnetar with a fallback
//! disc.
//!
//! A supernova leaves behind a rapidly rotating, highly magnetised neutron
//! star and a debris disc of material that failed to escape. The disc
//! drains inward on its viscous timescale while fresh material falls back
//! onto it; at the magnetospheric boundary the inflow is either accreted
//! (spinning the star up) or flung out by the propeller effect, and the
//! magnetic dipole brakes the star throughout. This crate evaluates that
//! torque balance; the `spindown` crate integrates it.
//!
//! # References
//! - Gompertz, O'Brien & Wynn (2014), MNRAS 438, 240
//! - Piro & Ott (2011), ApJ 736, 108

pub mod constants;
pub mod disc;
pub mod model;
pub mod propeller;
pub mod star;

#[cfg(test)]
mod model_test;

pub use disc::FallbackDisc;
pub use model::{initial_state, Evaluation, SpinDownModel, SpinState};
pub use propeller::{accretion_torque, fastness, PropellerGate, BETA_MAX};
pub use star::Magnetar;

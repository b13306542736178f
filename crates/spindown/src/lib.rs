//! Numerical integration of the magnetar fallback-disc torque balance.
//!
//! The [`magnetar`] crate defines the instantaneous torque balance; this
//! crate advances it in time. A [`TimeGrid`] fixes the output points,
//! [`integrate`] drives an ODE stepper between them, and the resulting
//! [`Trajectory`] holds the disc mass and spin history ready for
//! diagnostics or export.
//!
//! ```
//! use magnetar::{initial_state, SpinDownModel};
//! use spindown::{integrate, Method, TimeGrid};
//! use units::{Mass, Time};
//!
//! let model = SpinDownModel::fiducial();
//! let y0 = initial_state(Time::from_milliseconds(5.0), Mass::from_solar_masses(1.0e-3));
//!
//! let grid = TimeGrid::logarithmic(1.0, 1.0e3, 101);
//! let trajectory = integrate(&model, y0, &grid, Method::default()).unwrap();
//!
//! assert_eq!(trajectory.len(), grid.len());
//! ```

pub mod grid;
pub mod solver;
pub mod trajectory;

#[cfg(test)]
mod grid_test;

pub use grid::TimeGrid;
pub use solver::{integrate, Method, SolverError};
pub use trajectory::Trajectory;

pub mod angular_velocity;
pub mod length;
pub mod magnetic_field;
pub mod mass;
pub mod mass_rate;
pub mod time;
pub mod velocity;

#[cfg(test)]
mod angular_velocity_test;
#[cfg(test)]
mod mass_rate_test;
#[cfg(test)]
mod time_test;

pub use angular_velocity::AngularVelocity;
pub use length::Length;
pub use magnetic_field::MagneticField;
pub use mass::{Mass, SOLAR_MASS_G};
pub use mass_rate::MassRate;
pub use time::Time;
pub use velocity::Velocity;

use serde::{Deserialize, Serialize};

use units::{AngularVelocity, Length, MagneticField, Mass, MassRate};

use crate::constants::{G, SPEED_OF_LIGHT};

/// A newly born, rapidly rotating neutron star with a magnetar-strength
/// dipole field.
///
/// All derived quantities are evaluated in CGS from the three fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Magnetar {
    /// Gravitational mass
    pub mass: Mass,
    /// Stellar radius
    pub radius: Length,
    /// Surface dipole field strength
    pub magnetic_field: MagneticField,
}

impl Magnetar {
    /// Creates a magnetar with the fiducial mass (1.4 M☉) and radius
    /// (10 km).
    pub fn new(magnetic_field: MagneticField) -> Self {
        Self {
            mass: Mass::from_solar_masses(1.4),
            radius: Length::from_km(10.0),
            magnetic_field,
        }
    }

    /// Standard gravitational parameter GM (cm³/s²).
    pub fn gm(&self) -> f64 {
        G * self.mass.to_grams()
    }

    /// Moment of inertia 0.8 M R² (g·cm²).
    pub fn moment_of_inertia(&self) -> f64 {
        0.8 * self.mass.to_grams() * self.radius.to_cm().powi(2)
    }

    /// Magnetic dipole moment μ = B R³ (G·cm³).
    pub fn dipole_moment(&self) -> f64 {
        self.magnetic_field.to_gauss() * self.radius.to_cm().powi(3)
    }

    /// Light-cylinder radius c/ω, beyond which corotation would exceed the
    /// speed of light.
    pub fn light_cylinder_radius(&self, spin: AngularVelocity) -> Length {
        Length::from_cm(SPEED_OF_LIGHT / spin.to_rad_per_sec())
    }

    /// Corotation radius, where material on a Keplerian orbit corotates
    /// with the star.
    pub fn corotation_radius(&self, spin: AngularVelocity) -> Length {
        // 2/3 exponent follows the published model (not the Keplerian 1/3).
        let omega = spin.to_rad_per_sec();
        Length::from_cm((self.gm() / omega.powi(2)).powf(2.0 / 3.0))
    }

    /// Alfvén radius, where magnetic pressure balances the ram pressure of
    /// the inflow: μ^(4/7) (GM)^(-1/7) Ṁ^(-2/7).
    pub fn alfven_radius(&self, inflow: MassRate) -> Length {
        let mu = self.dipole_moment();
        let mdot = inflow.to_grams_per_sec();
        Length::from_cm(
            mu.powf(4.0 / 7.0) * self.gm().powf(-1.0 / 7.0) * mdot.powf(-2.0 / 7.0),
        )
    }

    /// Rotational kinetic energy ½ I ω² (erg).
    pub fn rotational_energy(&self, spin: AngularVelocity) -> f64 {
        0.5 * self.moment_of_inertia() * spin.to_rad_per_sec().powi(2)
    }

    /// Gravitational binding energy 0.6 M c² x/(1 − 0.5x) with
    /// x = GM/(R c²) (erg).
    ///
    /// # References
    /// - Lattimer & Prakash (2001), ApJ 550, 426
    pub fn binding_energy(&self) -> f64 {
        let compactness = self.gm() / (self.radius.to_cm() * SPEED_OF_LIGHT.powi(2));
        0.6 * self.mass.to_grams() * SPEED_OF_LIGHT.powi(2) * compactness
            / (1.0 - 0.5 * compactness)
    }

    /// Rotation parameter β = T/|W|, the ratio of rotational to binding
    /// energy.
    pub fn rotation_parameter(&self, spin: AngularVelocity) -> f64 {
        self.rotational_energy(spin) / self.binding_energy()
    }

    /// Magnetic dipole braking torque −μ²ω³/(6c³) (g·cm²/s²).
    ///
    /// Always negative: the dipole only ever spins the star down.
    pub fn dipole_torque(&self, spin: AngularVelocity) -> f64 {
        let mu = self.dipole_moment();
        let omega = spin.to_rad_per_sec();
        -(mu.powi(2) * omega.powi(3)) / (6.0 * SPEED_OF_LIGHT.powi(3))
    }
}

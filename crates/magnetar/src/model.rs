use serde::{Deserialize, Serialize};

use units::{AngularVelocity, Length, MagneticField, Mass, MassRate, Time};

use crate::disc::FallbackDisc;
use crate::propeller::{self, PropellerGate};
use crate::star::Magnetar;

/// Integration state: disc mass in grams and spin frequency in rad/s.
pub type SpinState = [f64; 2];

/// Initial integration state for a star born with the given spin period
/// and disc mass.
pub fn initial_state(spin_period: Time, disc_mass: Mass) -> SpinState {
    [
        disc_mass.to_grams(),
        AngularVelocity::from_spin_period(spin_period).to_rad_per_sec(),
    ]
}

/// The coupled magnetar + fallback-disc system.
///
/// # Physics
///
/// The disc loses mass to the magnetosphere at the viscous rate and gains
/// it through fallback; the star is torqued by accretion and braked by
/// its dipole:
///
/// ```text
/// dM_disc/dt = Ṁ_fb − Ṁ_prop − Ṁ_acc
/// dω/dt      = (N_acc + N_dip)/I
/// ```
///
/// # References
/// - Gompertz, O'Brien & Wynn (2014), MNRAS 438, 240
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinDownModel {
    pub star: Magnetar,
    pub disc: FallbackDisc,
    pub gate: PropellerGate,
    /// Alfvén radius ceiling in units of the light-cylinder radius
    pub capping_fraction: f64,
}

impl SpinDownModel {
    /// Composes a model with the default gate sharpness (n = 1) and
    /// Alfvén cap (k = 0.9).
    pub fn new(star: Magnetar, disc: FallbackDisc) -> Self {
        Self {
            star,
            disc,
            gate: PropellerGate::default(),
            capping_fraction: 0.9,
        }
    }

    /// The fiducial configuration: B = 10¹⁵ G, M_disc,i = 10⁻³ M☉,
    /// R_disc = 100 km, ε = δ = 1.
    pub fn fiducial() -> Self {
        let star = Magnetar::new(MagneticField::from_gauss(1.0e15));
        let disc = FallbackDisc::new(Mass::from_solar_masses(1.0e-3), Length::from_km(100.0));
        Self::new(star, disc)
    }

    /// Evaluates the full torque balance at time `t` (seconds), exposing
    /// every intermediate quantity.
    ///
    /// The evaluation is pure: it reads only the model parameters and its
    /// arguments, so it may be called concurrently. Degenerate inputs
    /// (zero disc mass, zero spin) propagate as non-finite values rather
    /// than errors.
    pub fn evaluate(&self, t: f64, state: SpinState) -> Evaluation {
        let [disc_mass_g, omega] = state;
        let spin = AngularVelocity::from_rad_per_sec(omega);

        let t_visc = self.disc.viscous_timescale();
        let inflow = MassRate::from_grams_per_sec(disc_mass_g / t_visc.to_seconds());

        // Magnetospheric radius, capped near the light cylinder where the
        // field can no longer enforce corotation.
        let light_cylinder_radius = self.star.light_cylinder_radius(spin);
        let cap = light_cylinder_radius * self.capping_fraction;
        let mut alfven_radius = self.star.alfven_radius(inflow);
        if alfven_radius >= cap {
            alfven_radius = cap;
        }
        let corotation_radius = self.star.corotation_radius(spin);

        let fastness = propeller::fastness(alfven_radius, corotation_radius);
        let (accreted_fraction, ejected_fraction) = self.gate.split(fastness);
        let accretion_rate = inflow * accreted_fraction;
        let propeller_rate = inflow * ejected_fraction;
        let fallback_rate = self.disc.fallback_rate(Time::from_seconds(t));

        let rotation_parameter = self.star.rotation_parameter(spin);
        let dipole_torque = self.star.dipole_torque(spin);
        let accretion_torque = propeller::accretion_torque(
            &self.star,
            alfven_radius,
            accretion_rate,
            propeller_rate,
            rotation_parameter,
        );

        let disc_mass_rate = fallback_rate - propeller_rate - accretion_rate;
        let spin_rate = (accretion_torque + dipole_torque) / self.star.moment_of_inertia();

        Evaluation {
            alfven_radius,
            corotation_radius,
            light_cylinder_radius,
            fastness,
            accreted_fraction,
            ejected_fraction,
            fallback_rate,
            accretion_rate,
            propeller_rate,
            dipole_torque,
            accretion_torque,
            rotation_parameter,
            disc_mass_rate,
            spin_rate,
        }
    }

    /// Time derivative of the state vector, (dM_disc/dt, dω/dt).
    pub fn derivatives(&self, t: f64, state: SpinState) -> SpinState {
        let eval = self.evaluate(t, state);
        [eval.disc_mass_rate.to_grams_per_sec(), eval.spin_rate]
    }
}

/// Snapshot of the torque balance at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Alfvén radius after light-cylinder capping
    pub alfven_radius: Length,
    pub corotation_radius: Length,
    pub light_cylinder_radius: Length,
    /// (R_m/R_c)^(3/2)
    pub fastness: f64,
    /// Fraction of the inflow reaching the stellar surface
    pub accreted_fraction: f64,
    /// Fraction of the inflow ejected by the propeller
    pub ejected_fraction: f64,
    pub fallback_rate: MassRate,
    pub accretion_rate: MassRate,
    pub propeller_rate: MassRate,
    /// Magnetic dipole torque (g·cm²/s²)
    pub dipole_torque: f64,
    /// Accretion torque (g·cm²/s²)
    pub accretion_torque: f64,
    /// β = T/|W|
    pub rotation_parameter: f64,
    /// dM_disc/dt
    pub disc_mass_rate: MassRate,
    /// dω/dt (rad/s²)
    pub spin_rate: f64,
}

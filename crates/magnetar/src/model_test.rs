mod tests {
    use approx::assert_relative_eq;

    use units::{Mass, Time};

    use crate::model::{initial_state, SpinDownModel};
    use crate::propeller::BETA_MAX;

    fn birth_state() -> [f64; 2] {
        initial_state(Time::from_milliseconds(5.0), Mass::from_solar_masses(1.0e-3))
    }

    #[test]
    fn test_initial_state() {
        let y = birth_state();

        // 1e-3 M☉ in grams, and ω = 2π/P for a 5 ms period
        assert_relative_eq!(y[0], 1.99e30, max_relative = 1e-12);
        assert_relative_eq!(y[1], 1256.6370614, max_relative = 1e-9);
    }

    #[test]
    fn test_fiducial_parameters() {
        let model = SpinDownModel::fiducial();

        assert_relative_eq!(model.star.magnetic_field.to_gauss(), 1.0e15);
        assert_relative_eq!(model.disc.radius.to_cm(), 1.0e7);
        assert_relative_eq!(model.disc.alpha, 0.1);
        assert_relative_eq!(model.disc.sound_speed.to_cm_per_sec(), 1.0e7);
        assert_relative_eq!(model.gate.sharpness, 1.0);
        assert_relative_eq!(model.capping_fraction, 0.9);
    }

    #[test]
    fn test_torque_balance_at_birth() {
        let model = SpinDownModel::fiducial();
        let eval = model.evaluate(1.0, birth_state());

        // Characteristic radii: R_m well inside the light cylinder, R_c far out
        assert_relative_eq!(eval.alfven_radius.to_cm(), 5.411e6, max_relative = 1e-3);
        assert_relative_eq!(
            eval.light_cylinder_radius.to_cm(),
            2.38732e7,
            max_relative = 1e-4
        );
        assert_relative_eq!(
            eval.corotation_radius.to_cm(),
            2.402e13,
            max_relative = 1e-3
        );

        // Deeply sub-corotating, so the gate sits on its slow-rotator shoulder
        assert!(eval.fastness > 0.0);
        assert!(eval.fastness < 1.0e-9);
        assert_relative_eq!(eval.ejected_fraction, 0.1192029, max_relative = 1e-6);
        assert_relative_eq!(eval.accreted_fraction, 0.8807971, max_relative = 1e-6);

        // Mass flow
        assert_relative_eq!(
            eval.fallback_rate.to_grams_per_sec(),
            1.69772e29,
            max_relative = 1e-4
        );
        assert_relative_eq!(
            eval.accretion_rate.to_grams_per_sec(),
            1.75279e29,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            eval.propeller_rate.to_grams_per_sec(),
            2.37214e28,
            max_relative = 1e-5
        );

        // Torques: accretion spin-up beats dipole braking at birth
        assert_relative_eq!(eval.dipole_torque, -1.2249e43, max_relative = 1e-3);
        assert_relative_eq!(eval.accretion_torque, 4.807e45, max_relative = 1e-3);
        assert_relative_eq!(eval.rotation_parameter, 5.077e-3, max_relative = 1e-3);

        // Net rates: the disc drains while the star spins up
        assert_relative_eq!(
            eval.disc_mass_rate.to_grams_per_sec(),
            -2.923e28,
            max_relative = 5e-3
        );
        assert_relative_eq!(eval.spin_rate, 2.151, max_relative = 5e-3);
    }

    #[test]
    fn test_derivatives_match_the_evaluation() {
        let model = SpinDownModel::fiducial();
        let y = birth_state();

        let eval = model.evaluate(1.0, y);
        let dy = model.derivatives(1.0, y);

        assert_eq!(dy[0], eval.disc_mass_rate.to_grams_per_sec());
        assert_eq!(dy[1], eval.spin_rate);
    }

    #[test]
    fn test_alfven_radius_never_exceeds_the_cap() {
        let model = SpinDownModel::fiducial();
        let omega = birth_state()[1];

        for disc_mass_g in [1.0e10, 1.0e20, 1.0e25, 1.99e30, 1.0e33] {
            let eval = model.evaluate(1.0, [disc_mass_g, omega]);
            let cap = eval.light_cylinder_radius * model.capping_fraction;
            assert!(eval.alfven_radius <= cap);
        }

        // A starved disc pushes the magnetosphere out to the cap itself
        let starved = model.evaluate(1.0, [1.0e10, omega]);
        let cap = starved.light_cylinder_radius * model.capping_fraction;
        assert_relative_eq!(
            starved.alfven_radius.to_cm(),
            cap.to_cm(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_accretion_shuts_off_above_the_spin_instability() {
        let model = SpinDownModel::fiducial();
        let eval = model.evaluate(1.0, [1.99e30, 2.0e4]);

        assert!(eval.rotation_parameter > BETA_MAX);
        assert_eq!(eval.accretion_torque, 0.0);

        // Only the dipole is left to brake the star
        assert_eq!(
            eval.spin_rate,
            eval.dipole_torque / model.star.moment_of_inertia()
        );
        assert!(eval.spin_rate < 0.0);
    }

    #[test]
    fn test_drained_disc_still_evaluates_finitely() {
        let model = SpinDownModel::fiducial();
        let omega = birth_state()[1];

        let eval = model.evaluate(100.0, [0.0, omega]);
        let dy = model.derivatives(100.0, [0.0, omega]);

        // Nothing flows through the magnetosphere, but fallback keeps landing
        assert_eq!(eval.accretion_rate.to_grams_per_sec(), 0.0);
        assert_eq!(eval.propeller_rate.to_grams_per_sec(), 0.0);
        assert!(dy[0] > 0.0);
        assert!(dy[0].is_finite() && dy[1].is_finite());
    }

    #[test]
    fn test_unphysical_inputs_propagate_as_nan() {
        let model = SpinDownModel::fiducial();
        let dy = model.derivatives(1.0, [-1.0, 1256.6370614]);

        assert!(dy[0].is_nan());
        assert!(dy[1].is_nan());
    }
}

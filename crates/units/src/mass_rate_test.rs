mod tests {
    use approx::assert_relative_eq;

    use crate::mass_rate::MassRate;
    use crate::time::Time;

    #[test]
    fn test_mass_rate_conversions() {
        // Test grams per second to solar masses per year
        let inflow = MassRate::from_grams_per_sec(1.99e29);
        let solar_rate = inflow.to_solar_masses_per_year();

        // Round trip test
        let round_trip = MassRate::from_solar_masses_per_year(solar_rate);
        assert_relative_eq!(round_trip.to_grams_per_sec(), 1.99e29, epsilon = 1e20);

        // One solar mass per year in CGS
        let rate_solar = MassRate::from_solar_masses_per_year(1.0);
        assert_relative_eq!(
            rate_solar.to_grams_per_sec(),
            1.99e33 / 31_557_600.0,
            epsilon = 1e18
        );
    }

    #[test]
    fn test_mass_rate_integration() {
        // Test that integrating mass rate over time gives correct mass
        let inflow = MassRate::from_grams_per_sec(1.99e29);
        let duration = Time::from_seconds(10.0); // A viscous timescale

        let total_mass = inflow.integrate(duration);
        assert_relative_eq!(total_mass.to_grams(), 1.99e30);

        // Test with a different time scale
        let slow = MassRate::from_solar_masses_per_year(1e-10);
        let long = Time::from_years(1_000.0);
        let mass_slow = slow.integrate(long);

        assert_relative_eq!(
            mass_slow.to_solar_masses(),
            1e-10 * 1000.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_mass_rate_arithmetic() {
        let rate1 = MassRate::from_grams_per_sec(6.0e28);
        let rate2 = MassRate::from_grams_per_sec(4.0e28);

        // Test addition and subtraction
        assert_relative_eq!((rate1 + rate2).to_grams_per_sec(), 1.0e29);
        assert_relative_eq!((rate1 - rate2).to_grams_per_sec(), 2.0e28);

        // Test multiplication and division
        let doubled = rate1 * 2.0;
        assert_relative_eq!(doubled.to_grams_per_sec(), 1.2e29);

        let halved = rate1 / 2.0;
        assert_relative_eq!(halved.to_grams_per_sec(), 3.0e28);

        // Dimensionless ratio
        assert_relative_eq!(rate1 / rate2, 1.5);
    }
}

mod tests {
    use approx::assert_relative_eq;

    use crate::angular_velocity::AngularVelocity;
    use crate::time::Time;

    #[test]
    fn test_spin_period_conversion() {
        // A 5 ms rotator spins at 2π/0.005 ≈ 1256.6 rad/s
        let spin = AngularVelocity::from_spin_period(Time::from_milliseconds(5.0));
        assert_relative_eq!(spin.to_rad_per_sec(), 1256.6370614, epsilon = 1e-6);

        // Round trip back to the period
        assert_relative_eq!(spin.spin_period().to_milliseconds(), 5.0);
    }

    #[test]
    fn test_faster_spin_means_shorter_period() {
        let slow = AngularVelocity::from_rad_per_sec(100.0);
        let fast = AngularVelocity::from_rad_per_sec(1000.0);

        assert!(fast.spin_period().to_seconds() < slow.spin_period().to_seconds());
    }
}

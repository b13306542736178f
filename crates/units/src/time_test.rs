mod tests {
    use approx::assert_relative_eq;

    use crate::time::{Time, SECONDS_PER_DAY, SECONDS_PER_YEAR};

    #[test]
    fn test_time_conversions() {
        // Test milliseconds to seconds
        let spin_period = Time::from_milliseconds(5.0);
        assert_relative_eq!(spin_period.to_seconds(), 5.0e-3);

        // Test seconds to milliseconds
        let time_seconds = Time::from_seconds(0.005);
        assert_relative_eq!(time_seconds.to_milliseconds(), 5.0);

        // Test days
        let days = 30.0;
        let time_days = Time::from_days(days);
        assert_relative_eq!(time_days.to_seconds(), days * SECONDS_PER_DAY);
        assert_relative_eq!(time_days.to_days(), days);

        // Test years
        let time_years = Time::from_years(1.0);
        assert_relative_eq!(time_years.to_seconds(), SECONDS_PER_YEAR);

        // Test addition
        let a = Time::from_seconds(10.0);
        let b = Time::from_seconds(5.0);
        let sum = a + b;
        assert_relative_eq!(sum.to_seconds(), 15.0);
    }

    #[test]
    fn test_time_ratio() {
        // (t + tfb)/tfb shows up inside the fallback power law
        let t = Time::from_seconds(90.0);
        let tfb = Time::from_seconds(10.0);
        assert_relative_eq!((t + tfb) / tfb, 10.0);
    }
}

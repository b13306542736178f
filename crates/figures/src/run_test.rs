mod tests {
    use approx::assert_relative_eq;

    use magnetar::SpinDownModel;
    use spindown::{Method, TimeGrid};
    use units::Time;

    use crate::run::RunConfig;

    #[test]
    fn test_captures_the_model_parameters() {
        let model = SpinDownModel::fiducial();
        let grid = TimeGrid::fiducial();
        let config = RunConfig::new(
            "spin_evolution",
            &model,
            Time::from_milliseconds(5.0),
            &grid,
            Method::default(),
        );

        assert_eq!(config.figure, "spin_evolution");
        assert_eq!(config.magnetic_field_gauss, 1.0e15);
        assert_eq!(config.spin_period_ms, 5.0);
        assert_relative_eq!(config.disc_mass_msol, 1.0e-3, max_relative = 1e-12);
        assert_eq!(config.disc_radius_km, 100.0);
        assert_eq!(config.grid_start_s, 1.0);
        assert_eq!(config.grid_end_s, 1.0e6);
        assert_eq!(config.grid_points, 10_001);
    }

    #[test]
    fn test_serializes_to_json() {
        let model = SpinDownModel::fiducial();
        let grid = TimeGrid::logarithmic(1.0, 100.0, 11);
        let config = RunConfig::new(
            "mass_flow",
            &model,
            Time::from_milliseconds(5.0),
            &grid,
            Method::Rk4 { step: 0.1 },
        );

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["figure"], "mass_flow");
        assert_eq!(value["epsilon"], 1.0);
        assert_eq!(value["delta"], 1.0);
        assert_eq!(value["method"]["Rk4"]["step"], 0.1);
    }
}

mod tests {
    use approx::assert_relative_eq;

    use crate::grid::TimeGrid;

    #[test]
    fn test_logarithmic_hits_both_endpoints() {
        let grid = TimeGrid::logarithmic(1.0, 1.0e6, 10_001);

        assert_eq!(grid.len(), 10_001);
        assert_eq!(grid.points()[0], 1.0);
        assert_eq!(grid.points()[10_000], 1.0e6);
    }

    #[test]
    fn test_logarithmic_spacing_is_uniform_in_log_time() {
        let grid = TimeGrid::logarithmic(1.0, 1.0e6, 10_001);
        let points = grid.points();

        let expected_ratio = 10.0_f64.powf(6.0 / 10_000.0);
        assert_relative_eq!(points[1] / points[0], expected_ratio, max_relative = 1e-9);
        assert_relative_eq!(
            points[5_001] / points[5_000],
            expected_ratio,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_fiducial_grid() {
        let grid = TimeGrid::fiducial();

        assert_eq!(grid.len(), 10_001);
        assert_eq!(grid.points()[0], 1.0);
        assert_eq!(grid.points()[10_000], 1.0e6);
        assert!(grid.is_strictly_increasing());
    }

    #[test]
    fn test_degenerate_lengths() {
        assert!(TimeGrid::logarithmic(1.0, 1.0e6, 0).is_empty());

        let single = TimeGrid::logarithmic(5.0, 10.0, 1);
        assert_eq!(single.points(), &[5.0]);
    }

    #[test]
    fn test_is_strictly_increasing() {
        assert!(TimeGrid::from_points(vec![1.0, 2.0, 3.0]).is_strictly_increasing());
        assert!(!TimeGrid::from_points(vec![1.0, 1.0, 2.0]).is_strictly_increasing());
        assert!(!TimeGrid::from_points(vec![2.0, 1.0]).is_strictly_increasing());
        assert!(!TimeGrid::from_points(vec![1.0, f64::NAN]).is_strictly_increasing());
    }
}

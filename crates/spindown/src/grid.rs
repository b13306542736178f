use serde::{Deserialize, Serialize};

/// Output grid for an integration run, in seconds.
///
/// The grid fixes where the trajectory is sampled; the stepper is free to
/// take whatever internal steps it needs between points. Spin-down
/// evolution spans decades in time, so the usual choice is logarithmic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    points: Vec<f64>,
}

impl TimeGrid {
    /// Grid of `len` points spaced evenly in log time from `start` to
    /// `end` (both in seconds, both included).
    pub fn logarithmic(start: f64, end: f64, len: usize) -> Self {
        if len < 2 {
            return Self {
                points: vec![start; len],
            };
        }

        let log_start = start.log10();
        let log_step = (end.log10() - log_start) / (len - 1) as f64;

        let mut points: Vec<f64> = (0..len)
            .map(|i| 10.0_f64.powf(log_start + i as f64 * log_step))
            .collect();
        points[0] = start;
        points[len - 1] = end;

        Self { points }
    }

    /// The canonical grid for reproducing the published light curves:
    /// 10001 points from 1 s to 10⁶ s.
    pub fn fiducial() -> Self {
        Self::logarithmic(1.0, 1.0e6, 10_001)
    }

    /// Wraps an explicit list of sample times.
    pub fn from_points(points: Vec<f64>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when every point is finite and later than the one before it.
    pub fn is_strictly_increasing(&self) -> bool {
        self.points.iter().all(|t| t.is_finite())
            && self.points.windows(2).all(|pair| pair[0] < pair[1])
    }
}

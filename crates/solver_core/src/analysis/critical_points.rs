//! Zero crossings and discontinuities found by dense sampling.

use tracing::{debug, trace};

use super::ScanConfig;
use crate::math::solvers::Bisection;
use crate::traits::ScalarFunction;

/// Locates the points that split the real line into constant-sign pieces.
///
/// The detector evaluates `f` at `samples + 1` evenly spaced points of the
/// configured window and walks consecutive pairs left to right:
///
/// - either value non-finite: both abscissae are recorded, bracketing the
///   discontinuity without trying to pin it down
/// - left value exactly zero: the left abscissa is recorded
/// - values of opposite sign: the crossing is refined by [`Bisection`] and the
///   refined midpoint is recorded
///
/// The result is ascending with no two points closer than
/// `boundary_tolerance`.
///
/// # Example
///
/// ```
/// use solver_core::analysis::CriticalPointDetector;
///
/// let points = CriticalPointDetector::with_defaults().find(&|x: f64| x * x - 2.0);
/// assert_eq!(points.len(), 2);
/// assert!((points[1] - 2f64.sqrt()).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CriticalPointDetector {
    config: ScanConfig,
}

impl CriticalPointDetector {
    /// Create a detector with the given configuration.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Create a detector sampling `[-50, 50]` at 1000 sub-intervals.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Returns a reference to the detector configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Find the critical points of `f` inside the sampling window.
    ///
    /// A function with no finite sample yields an empty vector, so the whole
    /// line is later treated as a single interval.
    pub fn find<F>(&self, f: &F) -> Vec<f64>
    where
        F: ScalarFunction + ?Sized,
    {
        let bisection = Bisection::new(self.config.bisection_iterations);
        let mut points: Vec<f64> = Vec::new();

        let mut samples = self.config.sample_points().map(|x| (x, f.evaluate(x)));
        let Some(mut prev) = samples.next() else {
            return points;
        };
        let mut any_finite = prev.1.is_finite();

        for curr in samples {
            any_finite |= curr.1.is_finite();

            let (x_prev, y_prev) = prev;
            let (x_curr, y_curr) = curr;

            if !y_prev.is_finite() || !y_curr.is_finite() {
                trace!(x_prev, x_curr, "discontinuity bracket");
                points.push(x_prev);
                points.push(x_curr);
            } else if y_prev == 0.0 {
                points.push(x_prev);
            } else if y_prev * y_curr < 0.0 {
                match bisection.refine(f, prev, curr) {
                    Ok(root) => points.push(root),
                    Err(err) => trace!(x_prev, x_curr, %err, "crossing not refined"),
                }
            }

            prev = curr;
        }

        if !any_finite {
            debug!("no finite sample in window");
            return Vec::new();
        }

        points.sort_by(f64::total_cmp);
        let tolerance = self.config.boundary_tolerance;
        points.dedup_by(|later, kept| (*later - *kept).abs() < tolerance);

        debug!(count = points.len(), "critical points found");
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linear_crossing() {
        let points = CriticalPointDetector::with_defaults().find(&|x: f64| x - 1.05);

        assert_eq!(points.len(), 1);
        assert_abs_diff_eq!(points[0], 1.05, epsilon = 1e-6);
    }

    #[test]
    fn test_exact_zero_at_sample() {
        // x = 1 is a sample point, so it is recorded exactly.
        let points = CriticalPointDetector::with_defaults().find(&|x: f64| x - 1.0);

        assert_eq!(points.len(), 1);
        assert_abs_diff_eq!(points[0], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_no_sign_change() {
        let points = CriticalPointDetector::with_defaults().find(&|x: f64| x * x + 1.0);
        assert!(points.is_empty());
    }

    #[test]
    fn test_nowhere_finite() {
        let points = CriticalPointDetector::with_defaults().find(&|_x: f64| f64::NAN);
        assert!(points.is_empty());
    }

    #[test]
    fn test_pole_on_grid_is_bracketed() {
        let points = CriticalPointDetector::with_defaults().find(&|x: f64| 1.0 / (x - 3.0));

        let below = points.iter().filter(|&&p| p < 3.0 - 0.05).count();
        let above = points.iter().filter(|&&p| p > 3.0 + 0.05).count();
        assert_eq!(below, 1, "points: {:?}", points);
        assert_eq!(above, 1, "points: {:?}", points);
        assert!(points.iter().all(|&p| (p - 3.0).abs() <= 0.1 + 1e-9));
    }

    #[test]
    fn test_undefined_range_is_bracketed() {
        // Undefined on (2.95, 3.25): samples 3.0, 3.1, 3.2 are non-finite.
        let f = |x: f64| {
            if x > 2.95 && x < 3.25 {
                f64::NAN
            } else {
                1.0
            }
        };
        let points = CriticalPointDetector::with_defaults().find(&f);

        assert_abs_diff_eq!(points[0], 2.9, epsilon = 1e-9);
        assert_abs_diff_eq!(*points.last().unwrap(), 3.3, epsilon = 1e-9);
        assert!(points.windows(2).all(|w| w[1] - w[0] >= 1e-6));
    }

    #[test]
    fn test_outside_window_is_ignored() {
        let points = CriticalPointDetector::with_defaults().find(&|x: f64| x - 75.0);
        assert!(points.is_empty());
    }

    #[test]
    fn test_custom_window() {
        let config = ScanConfig {
            domain_min: 70.0,
            domain_max: 80.0,
            ..ScanConfig::default()
        };
        let points = CriticalPointDetector::new(config).find(&|x: f64| x - 75.5);
        assert_eq!(points.len(), 1);
        assert_abs_diff_eq!(points[0], 75.5, epsilon = 1e-6);
    }
}

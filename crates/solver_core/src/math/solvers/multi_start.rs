//! Multi-start Newton-Raphson root isolation.

use tracing::{debug, trace};

use super::{MultiStartConfig, NewtonRaphsonSolver};
use crate::traits::ScalarFunction;

/// Finds several real roots by running Newton-Raphson from a grid of seeds.
///
/// One Newton run only finds the root whose basin of attraction contains its
/// starting point. Scanning a fixed grid of seeds approximates a global
/// search without bracketing every root first.
///
/// # Algorithm
///
/// For each seed in ascending order:
/// 1. Run [`NewtonRaphsonSolver::find_root_by_step`] with the configured step
///    tolerance, iteration cap, and derivative floor.
/// 2. Drop the seed if the run fails (flat derivative, non-finite iterate,
///    iteration cap).
/// 3. Accept the converged point unless an accepted root lies within
///    `dedup_tolerance` of it.
/// 4. Stop seeding once `max_roots` roots are accepted.
///
/// The accepted roots are returned sorted ascending.
///
/// # Example
///
/// ```
/// use solver_core::math::solvers::MultiStartNewton;
///
/// let finder = MultiStartNewton::with_defaults();
/// let roots = finder.find_roots(&|x: f64| x * x - 4.0, &|x: f64| 2.0 * x);
///
/// assert_eq!(roots.len(), 2);
/// assert!((roots[0] + 2.0).abs() < 1e-6);
/// assert!((roots[1] - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MultiStartNewton {
    config: MultiStartConfig,
}

impl MultiStartNewton {
    /// Create a finder with the given configuration.
    pub fn new(config: MultiStartConfig) -> Self {
        Self { config }
    }

    /// Create a finder with default configuration (41 seeds in `[-10, 10]`).
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Returns a reference to the finder configuration.
    pub fn config(&self) -> &MultiStartConfig {
        &self.config
    }

    /// Find the real roots of `f` given its derivative `f_prime`.
    ///
    /// Returns at most `max_roots` roots, strictly ascending, pairwise at
    /// least `dedup_tolerance` apart. An empty vector means no seed
    /// converged; it is not an error.
    pub fn find_roots<F, G>(&self, f: &F, f_prime: &G) -> Vec<f64>
    where
        F: ScalarFunction + ?Sized,
        G: ScalarFunction + ?Sized,
    {
        let newton = NewtonRaphsonSolver::new(self.config.newton());
        let mut roots: Vec<f64> = Vec::new();

        for seed in self.config.seeds() {
            match newton.find_root_by_step(|x| f.evaluate(x), |x| f_prime.evaluate(x), seed) {
                Ok(root) => {
                    let duplicate = roots
                        .iter()
                        .any(|r| (r - root).abs() < self.config.dedup_tolerance);
                    if duplicate {
                        trace!(seed, root, "duplicate root discarded");
                    } else {
                        trace!(seed, root, "root accepted");
                        roots.push(root);
                    }
                }
                Err(err) => trace!(seed, %err, "seed abandoned"),
            }

            if roots.len() >= self.config.max_roots {
                debug!(max_roots = self.config.max_roots, "root cap reached");
                break;
            }
        }

        roots.sort_by(f64::total_cmp);
        debug!(count = roots.len(), "multi-start Newton finished");
        roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_quadratic_two_roots() {
        let roots = MultiStartNewton::with_defaults()
            .find_roots(&|x: f64| x * x - 4.0, &|x: f64| 2.0 * x);

        assert_eq!(roots.len(), 2);
        assert_abs_diff_eq!(roots[0], -2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(roots[1], 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cubic_three_roots() {
        let f = |x: f64| x * x * x - 4.0 * x + 1.0;
        let f_prime = |x: f64| 3.0 * x * x - 4.0;

        let roots = MultiStartNewton::with_defaults().find_roots(&f, &f_prime);

        assert_eq!(roots.len(), 3);
        assert_abs_diff_eq!(roots[0], -2.114_907_541, epsilon = 1e-4);
        assert_abs_diff_eq!(roots[1], 0.254_101_688, epsilon = 1e-4);
        assert_abs_diff_eq!(roots[2], 1.860_805_853, epsilon = 1e-4);
    }

    #[test]
    fn test_no_real_roots() {
        let roots = MultiStartNewton::with_defaults()
            .find_roots(&|x: f64| x * x + 1.0, &|x: f64| 2.0 * x);
        assert!(roots.is_empty());
    }

    #[test]
    fn test_root_cap() {
        // sin has 7 roots in [-10, 10]; cap at 3.
        let config = MultiStartConfig {
            max_roots: 3,
            ..MultiStartConfig::default()
        };
        let roots = MultiStartNewton::new(config).find_roots(&|x: f64| x.sin(), &|x: f64| x.cos());

        assert_eq!(roots.len(), 3);
        assert!(roots.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_roots_are_deduplicated() {
        let roots = MultiStartNewton::with_defaults()
            .find_roots(&|x: f64| x - 3.0, &|_x: f64| 1.0);

        // Every seed converges to 3.
        assert_eq!(roots, vec![3.0]);
    }

    #[test]
    fn test_constant_function_has_no_roots() {
        let roots = MultiStartNewton::with_defaults().find_roots(&|_x: f64| 5.0, &|_x: f64| 0.0);
        assert!(roots.is_empty());
    }

    #[test]
    fn test_config_accessor() {
        let finder = MultiStartNewton::with_defaults();
        assert_eq!(finder.config().seed_count(), 41);
    }
}

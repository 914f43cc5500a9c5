//! Single-seed Newton-Raphson iteration.

use super::SolverConfig;
use crate::types::SolverError;

/// Newton-Raphson iteration from one seed, stopping on step size.
///
/// Each iteration evaluates `f(x)` and `f'(x)`, refuses the step when
/// `|f'(x)|` is below the derivative floor, and otherwise moves to
/// `x_new = x - f(x)/f'(x)`. The iterate `x_new` is returned as soon as
/// `|x_new - x| < tolerance`.
///
/// The residual is never inspected, so a flat plateau where steps shrink
/// without `f` vanishing can also "converge".
///
/// # Example
///
/// ```
/// use solver_core::math::solvers::{MultiStartConfig, NewtonRaphsonSolver};
///
/// let solver = NewtonRaphsonSolver::new(MultiStartConfig::default().newton());
/// let root = solver
///     .find_root_by_step(|x: f64| x * x - 4.0, |x: f64| 2.0 * x, 3.0)
///     .unwrap();
/// assert!((root - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NewtonRaphsonSolver {
    config: SolverConfig,
}

impl NewtonRaphsonSolver {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Iterate from `x0` until the step falls below the tolerance.
    ///
    /// # Errors
    ///
    /// - `SolverError::DerivativeNearZero` when `|f'(x)|` drops below the floor
    /// - `SolverError::NumericalInstability` when an iterate is not finite
    /// - `SolverError::MaxIterationsExceeded` when the iteration cap is hit
    pub fn find_root_by_step<F, G>(&self, f: F, f_prime: G, x0: f64) -> Result<f64, SolverError>
    where
        F: Fn(f64) -> f64,
        G: Fn(f64) -> f64,
    {
        let mut x = x0;

        for _ in 0..self.config.max_iterations {
            let slope = f_prime(x);
            if slope.abs() < self.config.derivative_floor {
                return Err(SolverError::DerivativeNearZero { x });
            }

            let x_new = x - f(x) / slope;
            // Fails the step test anyway; stop early.
            if !x_new.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "non-finite iterate after x = {x}"
                )));
            }
            if (x_new - x).abs() < self.config.tolerance {
                return Ok(x_new);
            }
            x = x_new;
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::solvers::MultiStartConfig;

    fn solver() -> NewtonRaphsonSolver {
        NewtonRaphsonSolver::new(MultiStartConfig::default().newton())
    }

    #[test]
    fn test_cubic_root() {
        let f = |x: f64| x * x * x - 4.0 * x + 1.0;
        let f_prime = |x: f64| 3.0 * x * x - 4.0;

        let root = solver().find_root_by_step(f, f_prime, 2.0).unwrap();
        assert!((root - 1.860_805_853).abs() < 1e-6, "got {}", root);
        assert!(f(root).abs() < 1e-9);
    }

    #[test]
    fn test_flat_derivative_aborts() {
        // f'(0) = 0 exactly for x² + 1
        let result = solver().find_root_by_step(|x: f64| x * x + 1.0, |x: f64| 2.0 * x, 0.0);
        assert!(matches!(
            result,
            Err(SolverError::DerivativeNearZero { x }) if x == 0.0
        ));
    }

    #[test]
    fn test_no_real_root_fails() {
        let result = solver().find_root_by_step(|x: f64| x * x + 1.0, |x: f64| 2.0 * x, 0.3);
        assert!(result.is_err());
    }

    #[test]
    fn test_nan_derivative() {
        let result = solver().find_root_by_step(|x: f64| x, |_x: f64| f64::NAN, 1.0);
        assert!(matches!(result, Err(SolverError::NumericalInstability(_))));
    }

    #[test]
    fn test_returns_new_iterate() {
        // One step lands exactly, the second has zero length.
        let root = solver()
            .find_root_by_step(|x: f64| x - 1.0, |_x: f64| 1.0, 5.0)
            .unwrap();
        assert_eq!(root, 1.0);
    }

    #[test]
    fn test_iteration_cap() {
        let config = SolverConfig {
            tolerance: 1e-300,
            max_iterations: 3,
            derivative_floor: 0.0,
        };
        let result = NewtonRaphsonSolver::new(config).find_root_by_step(
            |x: f64| x * x - 2.0,
            |x: f64| 2.0 * x,
            100.0,
        );
        assert_eq!(
            result,
            Err(SolverError::MaxIterationsExceeded { iterations: 3 })
        );
    }
}

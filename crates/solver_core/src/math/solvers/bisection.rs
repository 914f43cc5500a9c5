//! Fixed-iteration bisection for localising a sampled sign change.

use crate::traits::ScalarFunction;
use crate::types::SolverError;

/// Bisection refiner with a fixed number of halvings.
///
/// Unlike a tolerance-driven solver, the refiner always performs the same
/// amount of work: each iteration halves the bracket, so `n` iterations
/// shrink a bracket of width `w` to `w / 2ⁿ`.
///
/// # Example
///
/// ```
/// use solver_core::math::solvers::Bisection;
///
/// let f = |x: f64| x * x - 2.0;
/// let root = Bisection::new(40).refine(&f, (1.0, f(1.0)), (2.0, f(2.0))).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bisection {
    iterations: usize,
}

impl Default for Bisection {
    /// 20 halvings.
    fn default() -> Self {
        Self { iterations: 20 }
    }
}

impl Bisection {
    /// Create a refiner performing `iterations` halvings.
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Number of halvings performed by [`refine`](Self::refine).
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Localise the zero crossing inside `[a, b]`.
    ///
    /// `left` and `right` are `(x, f(x))` pairs whose values must be finite
    /// and of strictly opposite sign. At each step the midpoint replaces the
    /// endpoint whose sign it shares with `f(left)`; a non-finite
    /// midpoint value moves the right endpoint. If the function is
    /// exactly zero at a midpoint the bracket collapses onto it. The result
    /// is the midpoint of the final bracket.
    ///
    /// # Errors
    ///
    /// `SolverError::NoBracket` if the endpoint values do not straddle zero.
    pub fn refine<F>(&self, f: &F, left: (f64, f64), right: (f64, f64)) -> Result<f64, SolverError>
    where
        F: ScalarFunction + ?Sized,
    {
        let (mut a, fa) = left;
        let (mut b, fb) = right;

        if !(fa * fb < 0.0) {
            return Err(SolverError::NoBracket { a, b });
        }

        let left_sign = fa.signum();

        for _iteration in 0..self.iterations {
            let m = (a + b) / 2.0;
            let fm = f.evaluate(m);
            if fm == 0.0 {
                a = m;
                b = m;
                break;
            }
            if fm.signum() == left_sign {
                a = m;
            } else {
                b = m;
            }
        }

        Ok((a + b) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_refine_width_after_twenty_steps() {
        let f = |x: f64| x - 0.123_456;
        let root = Bisection::default()
            .refine(&f, (0.0, f(0.0)), (0.2, f(0.2)))
            .unwrap();

        // Bracket 0.2 wide, halved 20 times
        assert_abs_diff_eq!(root, 0.123_456, epsilon = 0.2 / 2f64.powi(20));
    }

    #[test]
    fn test_refine_decreasing_function() {
        let f = |x: f64| 1.0 - x;
        let root = Bisection::default()
            .refine(&f, (0.95, f(0.95)), (1.05, f(1.05)))
            .unwrap();
        assert_abs_diff_eq!(root, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_refine_exact_midpoint_zero() {
        let f = |x: f64| x;
        let root = Bisection::default().refine(&f, (-1.0, -1.0), (1.0, 1.0)).unwrap();
        assert_eq!(root, 0.0);
    }

    #[test]
    fn test_refine_rejects_same_sign() {
        let f = |x: f64| x * x + 1.0;
        let result = Bisection::default().refine(&f, (-1.0, 2.0), (1.0, 2.0));
        assert!(matches!(result, Err(SolverError::NoBracket { .. })));
    }

    #[test]
    fn test_refine_rejects_non_finite() {
        let f = |x: f64| x;
        let result = Bisection::default().refine(&f, (-1.0, f64::NAN), (1.0, 1.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_iterations_returns_bracket_midpoint() {
        let f = |x: f64| x - 0.3;
        let root = Bisection::new(0).refine(&f, (0.0, -0.3), (1.0, 0.7)).unwrap();
        assert_eq!(root, 0.5);
    }
}

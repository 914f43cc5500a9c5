//! Real-valued functions of one real variable.

/// A pure function `f: ℝ → ℝ ∪ {NaN, ±∞}`.
///
/// Non-finite results are legal and mark points where the expression is
/// undefined (poles, domain errors). The engine treats them as
/// discontinuities rather than failures.
///
/// Any `Fn(f64) -> f64` closure is a `ScalarFunction`.
///
/// # Examples
/// ```
/// use solver_core::traits::ScalarFunction;
///
/// let pole = |x: f64| 1.0 / (x - 3.0);
/// assert!(!pole.evaluate(3.0).is_finite());
/// assert_eq!(pole.evaluate(4.0), 1.0);
/// ```
pub trait ScalarFunction {
    /// Evaluate the function at `x`.
    fn evaluate(&self, x: f64) -> f64;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

//! Open intervals on the extended real line and solution sets.

use std::fmt;

use crate::format::format_bound;

/// Open interval `(lo, hi)` with `lo < hi`.
///
/// Either bound may be infinite; infinite ends are always open, and finite
/// ends are reported open as well.
///
/// # Examples
/// ```
/// use solver_core::types::Interval;
///
/// let iv = Interval::new(1.0, f64::INFINITY);
/// assert!(iv.contains(2.0));
/// assert!(!iv.contains(1.0));
/// assert_eq!(iv.to_string(), "(1, ∞)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Lower bound (may be `-∞`)
    #[cfg_attr(feature = "serde", serde(with = "lower_bound"))]
    pub lo: f64,
    /// Upper bound (may be `+∞`)
    #[cfg_attr(feature = "serde", serde(with = "upper_bound"))]
    pub hi: f64,
}

// Infinite bounds serialise as `null`; JSON has no infinity.
#[cfg(feature = "serde")]
mod lower_bound {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        value.is_finite().then_some(*value).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NEG_INFINITY))
    }
}

#[cfg(feature = "serde")]
mod upper_bound {
    pub use super::lower_bound::serialize;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

impl Interval {
    /// Create an interval from its two bounds.
    ///
    /// # Panics
    ///
    /// Panics if `lo >= hi` or either bound is NaN.
    pub fn new(lo: f64, hi: f64) -> Self {
        assert!(lo < hi, "interval bounds must satisfy lo < hi");
        Self { lo, hi }
    }

    /// The whole real line `(-∞, ∞)`.
    pub fn real_line() -> Self {
        Self {
            lo: f64::NEG_INFINITY,
            hi: f64::INFINITY,
        }
    }

    /// Whether both bounds are finite.
    pub fn is_bounded(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }

    /// Whether `x` lies strictly inside the interval.
    pub fn contains(&self, x: f64) -> bool {
        self.lo < x && x < self.hi
    }

    /// Point used to test the sign of a function on this interval.
    ///
    /// One unit inside an unbounded end, the midpoint otherwise, and `0`
    /// for the whole line.
    pub fn representative(&self) -> f64 {
        match (self.lo.is_finite(), self.hi.is_finite()) {
            (false, false) => 0.0,
            (false, true) => self.hi - 1.0,
            (true, false) => self.lo + 1.0,
            (true, true) => (self.lo + self.hi) / 2.0,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", format_bound(self.lo), format_bound(self.hi))
    }
}

/// Result of a successful solve.
///
/// - `Roots`: ascending roots of an equation
/// - `Intervals`: ascending, non-touching open intervals of an inequality
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "values", rename_all = "lowercase"))]
pub enum SolutionSet {
    /// Roots of an equation.
    Roots(Vec<f64>),
    /// Union of open intervals satisfying an inequality.
    Intervals(Vec<Interval>),
}

impl SolutionSet {
    /// Whether no root or interval was found.
    pub fn is_empty(&self) -> bool {
        match self {
            SolutionSet::Roots(roots) => roots.is_empty(),
            SolutionSet::Intervals(intervals) => intervals.is_empty(),
        }
    }

    /// Roots, if this is an equation result.
    pub fn roots(&self) -> Option<&[f64]> {
        match self {
            SolutionSet::Roots(roots) => Some(roots),
            SolutionSet::Intervals(_) => None,
        }
    }

    /// Intervals, if this is an inequality result.
    pub fn intervals(&self) -> Option<&[Interval]> {
        match self {
            SolutionSet::Intervals(intervals) => Some(intervals),
            SolutionSet::Roots(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representative_points() {
        assert_eq!(Interval::new(f64::NEG_INFINITY, 2.0).representative(), 1.0);
        assert_eq!(Interval::new(2.0, f64::INFINITY).representative(), 3.0);
        assert_eq!(Interval::new(1.0, 4.0).representative(), 2.5);
        assert_eq!(Interval::real_line().representative(), 0.0);
    }

    #[test]
    fn test_contains_is_open() {
        let iv = Interval::new(-1.0, 1.0);
        assert!(iv.contains(0.0));
        assert!(!iv.contains(-1.0));
        assert!(!iv.contains(1.0));
        assert!(iv.is_bounded());
        assert!(!Interval::real_line().is_bounded());
    }

    #[test]
    #[should_panic(expected = "lo < hi")]
    fn test_new_rejects_empty() {
        let _ = Interval::new(2.0, 2.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::real_line().to_string(), "(-∞, ∞)");
        assert_eq!(Interval::new(-2.0, 2.0).to_string(), "(-2, 2)");
    }

    #[test]
    fn test_solution_set_accessors() {
        let roots = SolutionSet::Roots(vec![1.0]);
        assert_eq!(roots.roots(), Some(&[1.0][..]));
        assert!(roots.intervals().is_none());
        assert!(!roots.is_empty());
        assert!(SolutionSet::Intervals(vec![]).is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_infinite_bounds_serialise_as_null() {
        let json = serde_json::to_string(&Interval::new(1.0, f64::INFINITY)).unwrap();
        assert_eq!(json, r#"{"lo":1.0,"hi":null}"#);

        let back: Interval = serde_json::from_str(r#"{"lo":null,"hi":2.5}"#).unwrap();
        assert_eq!(back, Interval::new(f64::NEG_INFINITY, 2.5));
    }
}

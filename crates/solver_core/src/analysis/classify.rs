//! Sign tests on the gaps between critical points.

use tracing::{debug, trace};

use crate::traits::ScalarFunction;
use crate::types::{Interval, Relation};

/// Split the real line at `boundaries`.
///
/// `boundaries` must be strictly ascending and finite. The result is the
/// `n + 1` open gaps `(-∞, b₁), (b₁, b₂), …, (bₙ, ∞)`; with no boundaries it
/// is the single interval `(-∞, ∞)`.
///
/// # Example
///
/// ```
/// use solver_core::analysis::gaps;
///
/// let pieces = gaps(&[1.0, 2.0]);
/// assert_eq!(pieces.len(), 3);
/// assert_eq!(pieces[1].lo, 1.0);
/// assert_eq!(pieces[1].hi, 2.0);
/// ```
pub fn gaps(boundaries: &[f64]) -> Vec<Interval> {
    let mut ends = Vec::with_capacity(boundaries.len() + 2);
    ends.push(f64::NEG_INFINITY);
    ends.extend_from_slice(boundaries);
    ends.push(f64::INFINITY);

    ends.windows(2)
        .map(|w| Interval { lo: w[0], hi: w[1] })
        .collect()
}

/// Keep the gaps of `boundaries` on which `f <relation> 0`.
///
/// Sign is assumed constant inside each gap, so `f` is evaluated once per
/// gap at [`Interval::representative`]: one unit inside an unbounded end,
/// the midpoint of a bounded gap, or `0` when there are no boundaries. A gap
/// whose representative value is non-finite is skipped.
///
/// With no boundaries the whole line is tested at `x = 0`, never at `+∞`. A
/// sign change beyond the scanned range therefore does not affect the result.
///
/// # Example
///
/// ```
/// use solver_core::analysis::classify;
/// use solver_core::types::Relation;
///
/// let kept = classify(&|x: f64| x - 1.0, &[1.0], Relation::Gt);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].lo, 1.0);
/// assert!(kept[0].hi.is_infinite());
/// ```
pub fn classify<F>(f: &F, boundaries: &[f64], relation: Relation) -> Vec<Interval>
where
    F: ScalarFunction + ?Sized,
{
    let kept: Vec<Interval> = gaps(boundaries)
        .into_iter()
        .filter(|gap| {
            let probe = gap.representative();
            let value = f.evaluate(probe);
            let holds = relation.holds(value);
            trace!(lo = gap.lo, hi = gap.hi, probe, value, holds, "gap tested");
            holds
        })
        .collect();

    debug!(%relation, kept = kept.len(), "intervals classified");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaps_empty() {
        assert_eq!(gaps(&[]), vec![Interval::real_line()]);
    }

    #[test]
    fn test_quadratic_outside_roots() {
        let f = |x: f64| x * x - 4.0;
        let kept = classify(&f, &[-2.0, 2.0], Relation::Gt);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0], Interval::new(f64::NEG_INFINITY, -2.0));
        assert_eq!(kept[1], Interval::new(2.0, f64::INFINITY));
    }

    #[test]
    fn test_quadratic_between_roots() {
        let f = |x: f64| x * x - 4.0;
        let kept = classify(&f, &[-2.0, 2.0], Relation::Le);

        assert_eq!(kept, vec![Interval::new(-2.0, 2.0)]);
    }

    #[test]
    fn test_non_finite_probe_skipped() {
        // Midpoint of (2, 4) is the pole.
        let f = |x: f64| 1.0 / (x - 3.0) + 100.0;
        let kept = classify(&f, &[2.0, 4.0], Relation::Gt);

        assert!(kept.iter().all(|iv| !iv.contains(3.0)));
    }

    #[test]
    fn test_no_boundaries_probes_origin() {
        let kept = classify(&|x: f64| x * x + 1.0, &[], Relation::Gt);
        assert_eq!(kept, vec![Interval::real_line()]);

        let kept = classify(&|x: f64| x * x + 1.0, &[], Relation::Lt);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_whole_line_ignores_far_field() {
        let f = |x: f64| if x > 1e6 { 1.0 } else { -1.0 };
        assert!(classify(&f, &[], Relation::Gt).is_empty());
        assert_eq!(classify(&f, &[], Relation::Lt), vec![Interval::real_line()]);
    }

    #[test]
    fn test_unbounded_probes_one_unit_out() {
        // Positive only on (-∞, -0.5): the probe at b₁ - 1 = -1 sees it.
        let f = |x: f64| if x < -0.5 { 1.0 } else { -1.0 };
        let kept = classify(&f, &[0.0], Relation::Gt);
        assert_eq!(kept, vec![Interval::new(f64::NEG_INFINITY, 0.0)]);
    }
}

//! Coalescing of adjacent accepted intervals.

use crate::types::Interval;

/// Boundary distance below which two intervals are joined.
pub const DEFAULT_MERGE_TOLERANCE: f64 = 1e-6;

/// Join intervals whose shared end coincides within `tolerance`.
///
/// Intervals are processed in ascending order of `lo`. When the next
/// interval starts within `tolerance` of where the previous one ends, the
/// previous one is extended to the next one's `hi`; otherwise the next one
/// starts a new run. Discontinuity bracketing can emit two boundaries
/// around what is really a single gap, and this removes the resulting
/// adjacent fragments.
///
/// Applying `merge` to its own output changes nothing.
///
/// # Example
///
/// ```
/// use solver_core::analysis::{merge, DEFAULT_MERGE_TOLERANCE};
/// use solver_core::types::Interval;
///
/// let merged = merge(
///     &[Interval::new(3.0, 3.1), Interval::new(3.1, f64::INFINITY)],
///     DEFAULT_MERGE_TOLERANCE,
/// );
/// assert_eq!(merged, vec![Interval::new(3.0, f64::INFINITY)]);
/// ```
pub fn merge(intervals: &[Interval], tolerance: f64) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by(|a, b| a.lo.total_cmp(&b.lo));

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for next in sorted {
        match merged.last_mut() {
            Some(prev) if (next.lo - prev.hi).abs() < tolerance => prev.hi = next.hi,
            _ => merged.push(next),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(merge(&[], DEFAULT_MERGE_TOLERANCE).is_empty());
    }

    #[test]
    fn test_disjoint_kept() {
        let input = vec![
            Interval::new(f64::NEG_INFINITY, -2.0),
            Interval::new(2.0, f64::INFINITY),
        ];
        assert_eq!(merge(&input, DEFAULT_MERGE_TOLERANCE), input);
    }

    #[test]
    fn test_chain_collapses() {
        let input = vec![
            Interval::new(0.0, 1.0),
            Interval::new(1.0, 2.0),
            Interval::new(2.0 + 5e-7, 3.0),
        ];
        assert_eq!(
            merge(&input, DEFAULT_MERGE_TOLERANCE),
            vec![Interval::new(0.0, 3.0)]
        );
    }

    #[test]
    fn test_unsorted_input() {
        let input = vec![Interval::new(1.0, 2.0), Interval::new(0.0, 1.0)];
        assert_eq!(
            merge(&input, DEFAULT_MERGE_TOLERANCE),
            vec![Interval::new(0.0, 2.0)]
        );
    }

    #[test]
    fn test_gap_larger_than_tolerance_kept() {
        let input = vec![Interval::new(0.0, 1.0), Interval::new(1.0 + 1e-5, 2.0)];
        assert_eq!(merge(&input, DEFAULT_MERGE_TOLERANCE).len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            Interval::new(f64::NEG_INFINITY, -1.0),
            Interval::new(-1.0, 0.5),
            Interval::new(0.7, 0.9),
            Interval::new(0.9, f64::INFINITY),
        ];
        let once = merge(&input, DEFAULT_MERGE_TOLERANCE);
        let twice = merge(&once, DEFAULT_MERGE_TOLERANCE);
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }
}

//! Human-readable rendering of roots, bounds, and interval unions.
//!
//! These helpers only shape text. Nothing here feeds back into a solve.

use crate::types::Interval;

/// Largest denominator produced by [`to_fraction`].
pub const MAX_DENOMINATOR: u64 = 10_000_000;

const INTEGER_TOLERANCE: f64 = 1e-6;
const RADICAL_TOLERANCE: f64 = 1e-3;

/// Render a finite boundary in its simplest recognisable form.
///
/// - within `1e-6` of an integer: the integer (`"3"`, `"-2"`)
/// - square within `1e-3` of a non-square integer `n`: `"√n"` or `"-√n"`
/// - otherwise three decimals
///
/// # Examples
/// ```
/// use solver_core::format::format_number;
///
/// assert_eq!(format_number(2.0000001), "2");
/// assert_eq!(format_number(-std::f64::consts::SQRT_2), "-√2");
/// assert_eq!(format_number(0.25), "0.250");
/// ```
pub fn format_number(x: f64) -> String {
    let nearest = x.round();
    if (x - nearest).abs() < INTEGER_TOLERANCE {
        return format!("{}", nearest as i64);
    }

    let square = x * x;
    let n = square.round();
    if (square - n).abs() < RADICAL_TOLERANCE && !is_perfect_square(n) {
        let sign = if x < 0.0 { "-" } else { "" };
        return format!("{sign}√{}", n as i64);
    }

    format!("{:.3}", x)
}

fn is_perfect_square(n: f64) -> bool {
    let root = n.sqrt().round();
    root * root == n
}

/// Render an interval bound, mapping infinities to `-∞` and `∞`.
pub fn format_bound(x: f64) -> String {
    if x == f64::NEG_INFINITY {
        "-∞".to_string()
    } else if x == f64::INFINITY {
        "∞".to_string()
    } else {
        format_number(x)
    }
}

/// Render a root with six decimals.
pub fn format_root(x: f64) -> String {
    // Avoid "-0.000000".
    let x = if x == 0.0 { 0.0 } else { x };
    format!("{:.6}", x)
}

/// Reduced fraction `n/d` approximating `value`, with `d <= MAX_DENOMINATOR`.
///
/// The approximation is the last continued-fraction convergent whose
/// denominator fits. Non-finite values fall back to [`format_root`].
///
/// # Examples
/// ```
/// use solver_core::format::to_fraction;
///
/// assert_eq!(to_fraction(0.75), "3/4");
/// assert_eq!(to_fraction(-2.0), "-2/1");
/// assert_eq!(to_fraction(1.0 / 3.0), "1/3");
/// ```
pub fn to_fraction(value: f64) -> String {
    if !value.is_finite() {
        return format_root(value);
    }
    let (n, d) = convergent(value.abs(), MAX_DENOMINATOR);
    let sign = if value < 0.0 && n != 0 { "-" } else { "" };
    format!("{sign}{n}/{d}")
}

/// Best convergent `(h, k)` of a non-negative `x` with `k <= max_denominator`.
fn convergent(x: f64, max_denominator: u64) -> (u64, u64) {
    // (h₋₂, h₋₁) = (0, 1), (k₋₂, k₋₁) = (1, 0)
    let (mut h_prev, mut h) = (0u64, 1u64);
    let (mut k_prev, mut k) = (1u64, 0u64);
    let mut r = x;

    for _ in 0..64 {
        let a = r.floor();
        let a_int = a as u64;

        let next = a_int
            .checked_mul(h)
            .and_then(|v| v.checked_add(h_prev))
            .zip(a_int.checked_mul(k).and_then(|v| v.checked_add(k_prev)));
        let Some((h_next, k_next)) = next else { break };
        if k_next > max_denominator {
            break;
        }

        h_prev = h;
        h = h_next;
        k_prev = k;
        k = k_next;

        let frac = r - a;
        if frac == 0.0 || (h as f64 / k as f64 - x).abs() <= f64::EPSILON * x.max(1.0) {
            break;
        }
        r = 1.0 / frac;
    }

    if k == 0 {
        // Integer part alone overflowed; no fraction fits.
        return (x.round() as u64, 1);
    }
    let g = gcd(h, k);
    (h / g, k / g)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.max(1)
}

/// Subscript digits for an index, `12` → `"₁₂"`.
pub fn subscript(n: usize) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '0' => '₀',
            '1' => '₁',
            '2' => '₂',
            '3' => '₃',
            '4' => '₄',
            '5' => '₅',
            '6' => '₆',
            '7' => '₇',
            '8' => '₈',
            _ => '₉',
        })
        .collect()
}

/// One line per root: `x₁ = 1.000000 (1/1)`.
pub fn format_root_lines(roots: &[f64]) -> Vec<String> {
    roots
        .iter()
        .enumerate()
        .map(|(i, &r)| format!("x{} = {} ({})", subscript(i + 1), format_root(r), to_fraction(r)))
        .collect()
}

/// Union notation `(a, b) ∪ (c, ∞)`, or `∅` when empty.
///
/// # Examples
/// ```
/// use solver_core::format::format_intervals;
/// use solver_core::types::Interval;
///
/// let set = [Interval::new(f64::NEG_INFINITY, -2.0), Interval::new(2.0, f64::INFINITY)];
/// assert_eq!(format_intervals(&set), "(-∞, -2) ∪ (2, ∞)");
/// assert_eq!(format_intervals(&[]), "∅");
/// ```
pub fn format_intervals(intervals: &[Interval]) -> String {
    if intervals.is_empty() {
        return "∅".to_string();
    }
    intervals
        .iter()
        .map(Interval::to_string)
        .collect::<Vec<_>>()
        .join(" ∪ ")
}

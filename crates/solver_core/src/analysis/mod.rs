//! Sign-interval analysis of scalar functions.
//!
//! The inequality path runs these stages in order:
//!
//! 1. [`CriticalPointDetector`]: sample a fixed window, record zero crossings
//!    (refined by bisection) and discontinuity brackets
//! 2. [`classify`]: split the real line at those points and keep the gaps
//!    where the relation holds at a representative point
//! 3. [`merge`]: coalesce kept gaps that share a boundary
//!
//! ## Resolution
//!
//! Sampling is deliberately fixed: on the default window `[-50, 50]` with
//! 1000 samples the spacing is 0.1, and crossings closer together than that
//! may be missed or merged. Nothing outside the window is examined; a sign
//! change beyond it does not produce a boundary.

mod classify;
mod config;
mod critical_points;
mod merge;

pub use classify::{classify, gaps};
pub use config::ScanConfig;
pub use critical_points::CriticalPointDetector;
pub use merge::{merge, DEFAULT_MERGE_TOLERANCE};

//! Numerical algorithms.
//!
//! - `solvers`: single-start Newton-Raphson, multi-start root isolation, and
//!   bracket refinement by bisection

pub mod solvers;

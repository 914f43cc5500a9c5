//! Core value and error types.
//!
//! This module provides:
//! - `interval`: Open intervals and the `SolutionSet` returned by solves
//! - `relation`: Relational operators tested against zero
//! - `error`: Structured error types for solvers, solves, and configuration
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Interval`], [`SolutionSet`] from `interval`
//! - [`Relation`] from `relation`
//! - [`SolverError`], [`SolveError`], [`ConfigError`] from `error`

pub mod error;
pub mod interval;
pub mod relation;

// Re-export commonly used types at module level
pub use error::{ConfigError, SolveError, SolverError};
pub use interval::{Interval, SolutionSet};
pub use relation::Relation;

//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from single-start root-finding iterations
//! - `SolveError`: Errors surfaced to callers of the equation and inequality paths
//! - `ConfigError`: Invalid engine configuration
//!
//! Only `SolveError` ever reaches a user. `SolverError` values are produced by
//! individual Newton runs and absorbed by the multi-start driver.

use thiserror::Error;

/// Root-finding solver errors.
///
/// Provides structured error handling for root-finding solver operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `DerivativeNearZero`: Derivative too small for Newton-Raphson
/// - `NoBracket`: Function values at bracket endpoints have same sign
/// - `NumericalInstability`: General numerical instability
///
/// # Examples
/// ```
/// use solver_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 50 };
/// assert!(format!("{}", err).contains("50 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Failures reported by [`solve_equation`](crate::problems::solve_equation)
/// and [`solve_inequality`](crate::problems::solve_inequality).
///
/// An empty root list or an empty interval union is a successful answer and
/// never appears here.
///
/// # Examples
/// ```
/// use solver_core::types::SolveError;
///
/// let err = SolveError::ExpressionCompile {
///     expression: "x +".to_string(),
///     message: "unexpected end of input".to_string(),
/// };
/// assert!(format!("{}", err).contains("unexpected end of input"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveError {
    /// Statement does not have the `lhs <relation> rhs` shape.
    #[error("Malformed input '{input}': expected {expected}")]
    MalformedInput {
        /// The raw statement
        input: String,
        /// Human-readable description of the accepted shape
        expected: String,
    },

    /// The expression compiler rejected one side of the statement.
    #[error("Cannot compile '{expression}': {message}")]
    ExpressionCompile {
        /// Expression handed to the compiler
        expression: String,
        /// Compiler message, unchanged
        message: String,
    },
}

/// Invalid engine configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A tolerance or step that must be finite and positive was not.
    #[error("Invalid {name}: must be finite and > 0, got {value}")]
    NonPositive {
        /// Field name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// A count that must be at least one was zero.
    #[error("Invalid {name}: must be >= 1")]
    ZeroCount {
        /// Field name
        name: &'static str,
    },

    /// A range whose lower end is not below its upper end.
    #[error("Invalid {name}: [{min}, {max}] is empty")]
    EmptyRange {
        /// Field name
        name: &'static str,
        /// Lower end
        min: f64,
        /// Upper end
        max: f64,
    },
}

//! CLI error type.

use adapter_expr::ExprError;
use solver_core::types::SolveError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `rootscan` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The statement was malformed or did not compile.
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// A bare expression (the `check` command) did not compile.
    #[error("Cannot compile '{expression}': {source}")]
    Expression {
        /// Source text
        expression: String,
        /// Compiler error
        source: ExprError,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_error_is_transparent() {
        let err: CliError = SolveError::MalformedInput {
            input: "x".to_string(),
            expected: "'<lhs> = <rhs>'".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Malformed input 'x': expected '<lhs> = <rhs>'"
        );
    }

    #[test]
    fn test_expression_error_message() {
        let err = CliError::Expression {
            expression: "sinc(x)".to_string(),
            source: ExprError::UnknownFunction("sinc".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Cannot compile 'sinc(x)': unknown function 'sinc'"
        );
    }
}

//! End-to-end equation and inequality solves.
//!
//! Both paths take raw statement text and an [`ExpressionCompiler`]:
//!
//! - [`solve_equation`]: `lhs = rhs` → roots by multi-start Newton-Raphson
//! - [`solve_inequality`]: `lhs <op> rhs` → union of open intervals by
//!   sign analysis
//!
//! Each returns a [`Solution`] carrying the answer and a derivation trail.
//!
//! [`ExpressionCompiler`]: crate::traits::ExpressionCompiler

mod equation;
mod inequality;
mod statement;

pub use equation::solve_equation;
pub use inequality::solve_inequality;
pub use statement::Statement;

use crate::analysis::ScanConfig;
use crate::math::solvers::MultiStartConfig;
use crate::traits::ExpressionCompiler;
use crate::types::{ConfigError, SolutionSet, SolveError};

/// Name of the variable both paths solve for.
pub const VARIABLE: &str = "x";

/// Settings for both solve paths.
///
/// # Example
///
/// ```
/// use solver_core::problems::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.roots.max_roots, 10);
/// assert_eq!(config.scan.samples, 1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Equation path.
    pub roots: MultiStartConfig,
    /// Inequality path.
    pub scan: ScanConfig,
}

impl EngineConfig {
    /// Check both sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.roots.validate()?;
        self.scan.validate()
    }
}

/// Answer to one statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The parsed statement.
    pub statement: Statement,
    /// Roots or intervals.
    pub set: SolutionSet,
    /// Human-readable derivation, one line per step.
    pub steps: Vec<String>,
}

impl Solution {
    /// The answer rendered on one line.
    ///
    /// Roots are comma-separated with six decimals; intervals use union
    /// notation.
    pub fn summary(&self) -> String {
        match &self.set {
            SolutionSet::Roots(roots) if roots.is_empty() => NO_REAL_SOLUTIONS.to_string(),
            SolutionSet::Roots(roots) => roots
                .iter()
                .map(|&r| crate::format::format_root(r))
                .collect::<Vec<_>>()
                .join(", "),
            SolutionSet::Intervals(intervals) => crate::format::format_intervals(intervals),
        }
    }
}

pub(crate) const NO_REAL_SOLUTIONS: &str = "No real solutions found.";

/// Parse a statement and dispatch on its relation.
///
/// # Errors
///
/// See [`solve_equation`] and [`solve_inequality`].
pub fn solve<C>(compiler: &C, input: &str, config: &EngineConfig) -> Result<Solution, SolveError>
where
    C: ExpressionCompiler,
{
    let statement = Statement::parse(input)?;
    if statement.relation.is_inequality() {
        inequality::solve_statement(compiler, statement, &config.scan)
    } else {
        equation::solve_statement(compiler, statement, &config.roots)
    }
}

/// Compile `f(x) = lhs - rhs`, mapping failures to [`SolveError::ExpressionCompile`].
fn compile_difference<C>(
    compiler: &C,
    statement: &Statement,
    derivative: bool,
) -> Result<C::Function, SolveError>
where
    C: ExpressionCompiler,
{
    let source = statement.difference_source();
    let compiled = if derivative {
        compiler.derivative(&source, VARIABLE)
    } else {
        compiler.compile(&source, VARIABLE)
    };
    compiled.map_err(|err| SolveError::ExpressionCompile {
        expression: source,
        message: err.to_string(),
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::TableCompiler;
    use super::*;

    #[test]
    fn test_solve_dispatches_equation() {
        let solution = solve(&TableCompiler, "x^2 - 4 = 0", &EngineConfig::default()).unwrap();
        assert_eq!(solution.set.roots().map(<[f64]>::len), Some(2));
        assert_eq!(solution.summary(), "-2.000000, 2.000000");
    }

    #[test]
    fn test_solve_dispatches_inequality() {
        let solution = solve(&TableCompiler, "x - 1 > 0", &EngineConfig::default()).unwrap();
        assert_eq!(solution.summary(), "(1, ∞)");
    }

    #[test]
    fn test_empty_roots_summary() {
        let solution = solve(&TableCompiler, "x^2 + 1 = 0", &EngineConfig::default()).unwrap();
        assert_eq!(solution.summary(), "No real solutions found.");
    }

    #[test]
    fn test_compile_failure_preserves_message() {
        let err = solve(&TableCompiler, "sin(x) = 0", &EngineConfig::default()).unwrap_err();
        match err {
            SolveError::ExpressionCompile {
                expression,
                message,
            } => {
                assert_eq!(expression, "(sin(x)) - (0)");
                assert_eq!(message, "unsupported expression '(sin(x)) - (0)'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_engine_config_validate() {
        let mut config = EngineConfig::default();
        config.scan.samples = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroCount { name: "samples" })
        ));
    }
}

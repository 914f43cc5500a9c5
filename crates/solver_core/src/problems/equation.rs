//! Equation path: `lhs = rhs` to a list of real roots.

use tracing::debug;

use super::{compile_difference, EngineConfig, Solution, Statement, NO_REAL_SOLUTIONS};
use crate::format::{format_bound, format_root_lines};
use crate::math::solvers::{MultiStartConfig, MultiStartNewton};
use crate::traits::ExpressionCompiler;
use crate::types::{SolutionSet, SolveError};

/// Solve `lhs = rhs` for real `x`.
///
/// Compiles `f(x) = (lhs) - (rhs)` and its derivative, then runs
/// [`MultiStartNewton`] with `config.roots`. An empty root list is a
/// successful answer.
///
/// # Errors
///
/// - [`SolveError::MalformedInput`] if `input` is not `lhs = rhs`
/// - [`SolveError::ExpressionCompile`] if either compile fails
pub fn solve_equation<C>(
    compiler: &C,
    input: &str,
    config: &EngineConfig,
) -> Result<Solution, SolveError>
where
    C: ExpressionCompiler,
{
    let statement = Statement::parse_equation(input)?;
    solve_statement(compiler, statement, &config.roots)
}

pub(super) fn solve_statement<C>(
    compiler: &C,
    statement: Statement,
    config: &MultiStartConfig,
) -> Result<Solution, SolveError>
where
    C: ExpressionCompiler,
{
    let f = compile_difference(compiler, &statement, false)?;
    let f_prime = compile_difference(compiler, &statement, true)?;

    let roots = MultiStartNewton::new(*config).find_roots(&f, &f_prime);
    debug!(%statement, roots = roots.len(), "equation solved");

    let mut steps = vec![
        format!("Form f(x) = ({}) − ({})", statement.lhs, statement.rhs),
        "Differentiate f(x) to obtain f'(x)".to_string(),
        format!(
            "Newton–Raphson from {} seeds in [{}, {}]",
            config.seed_count(),
            format_bound(config.seed_start),
            format_bound(config.seed_end)
        ),
    ];
    if roots.is_empty() {
        steps.push(NO_REAL_SOLUTIONS.to_string());
    } else {
        steps.extend(format_root_lines(&roots));
    }

    Ok(Solution {
        statement,
        set: SolutionSet::Roots(roots),
        steps,
    })
}

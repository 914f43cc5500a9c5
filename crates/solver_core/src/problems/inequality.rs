//! Inequality path: `lhs <op> rhs` to a union of open intervals.

use tracing::debug;

use super::{compile_difference, EngineConfig, Solution, Statement};
use crate::analysis::{classify, merge, CriticalPointDetector, ScanConfig};
use crate::format::{format_intervals, format_number};
use crate::traits::ExpressionCompiler;
use crate::types::{SolutionSet, SolveError};

/// Solve `lhs <op> rhs` for real `x`, `op` one of `<`, `<=`, `>`, `>=`.
///
/// Compiles `f(x) = (lhs) - (rhs)`, finds its critical points in the
/// `config.scan` window, keeps the gaps between them where `f(x) <op> 0`,
/// and merges gaps that share a boundary. Intervals are always open, even
/// for `<=` and `>=`.
///
/// # Errors
///
/// - [`SolveError::MalformedInput`] if `input` has no relational operator or
///   an empty side
/// - [`SolveError::ExpressionCompile`] if the compile fails
pub fn solve_inequality<C>(
    compiler: &C,
    input: &str,
    config: &EngineConfig,
) -> Result<Solution, SolveError>
where
    C: ExpressionCompiler,
{
    let statement = Statement::parse_inequality(input)?;
    solve_statement(compiler, statement, &config.scan)
}

pub(super) fn solve_statement<C>(
    compiler: &C,
    statement: Statement,
    config: &ScanConfig,
) -> Result<Solution, SolveError>
where
    C: ExpressionCompiler,
{
    let f = compile_difference(compiler, &statement, false)?;

    let boundaries = CriticalPointDetector::new(*config).find(&f);
    let kept = classify(&f, &boundaries, statement.relation);
    let intervals = merge(&kept, config.boundary_tolerance);
    debug!(
        %statement,
        boundaries = boundaries.len(),
        intervals = intervals.len(),
        "inequality solved"
    );

    let critical = if boundaries.is_empty() {
        "none".to_string()
    } else {
        boundaries
            .iter()
            .map(|&b| format_number(b))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let steps = vec![
        format!("Form f(x) = {} − ({})", statement.lhs, statement.rhs),
        format!("Critical points: {critical}"),
        "Merge adjacent intervals where boundaries coincide".to_string(),
        format!("Test each merged interval to see where f(x) {} 0", statement.relation),
        format!("Solution: {}", format_intervals(&intervals)),
    ];

    Ok(Solution {
        statement,
        set: SolutionSet::Intervals(intervals),
        steps,
    })
}

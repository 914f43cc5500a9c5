//! Inequality command implementation
//!
//! Finds the open intervals on which `lhs <op> rhs` holds.

use std::io::Write;

use adapter_expr::MathCompiler;
use solver_core::problems::solve_inequality;
use tracing::info;

use crate::config::CliConfig;
use crate::output::render_solution;
use crate::Result;

/// Run the inequality command
pub fn run<W: Write>(out: &mut W, statement: &str, config: &CliConfig) -> Result<()> {
    info!(
        statement,
        samples = config.scan.samples,
        domain_min = config.scan.domain_min,
        domain_max = config.scan.domain_max,
        "Solving inequality"
    );

    let solution = solve_inequality(&MathCompiler::new(), statement, &config.engine())?;
    info!(result = %solution.summary(), "Inequality solved");

    writeln!(out, "{}", render_solution(&solution, config.format)?)?;
    Ok(())
}

//! Solve command implementation
//!
//! Finds the real roots of an equation `lhs = rhs`.

use std::io::Write;

use adapter_expr::MathCompiler;
use solver_core::problems::solve_equation;
use tracing::info;

use crate::config::CliConfig;
use crate::output::render_solution;
use crate::Result;

/// Run the solve command
pub fn run<W: Write>(out: &mut W, equation: &str, config: &CliConfig) -> Result<()> {
    info!(equation, max_roots = config.roots.max_roots, "Solving equation");

    let solution = solve_equation(&MathCompiler::new(), equation, &config.engine())?;
    info!(result = %solution.summary(), "Equation solved");

    writeln!(out, "{}", render_solution(&solution, config.format)?)?;
    Ok(())
}

//! Check command implementation
//!
//! Compiles a single expression in `x` and reports its value and slope at a
//! point, which is handy when a solve result looks surprising.

use std::io::Write;

use adapter_expr::{CompiledExpr, ExprError, MathCompiler};
use serde::Serialize;
use solver_core::format::{format_bound, format_number};
use solver_core::problems::VARIABLE;
use solver_core::traits::{ExpressionCompiler, ScalarFunction};
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::output::{boxed, to_json};
use crate::{CliError, Result};

/// Value and derivative of an expression at one point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// Source as given
    pub expression: String,
    /// Symbolic derivative with respect to `x`
    pub derivative_expression: String,
    /// Evaluation point
    pub at: f64,
    /// `f(at)`; `null` in JSON when not finite
    pub value: f64,
    /// `f'(at)`; `null` in JSON when not finite
    pub derivative: f64,
}

/// Compile `expression` and its derivative and evaluate both at `at`.
pub fn evaluate(expression: &str, at: f64) -> Result<CheckReport> {
    let compiler = MathCompiler::new();
    let in_context = |source: ExprError| CliError::Expression {
        expression: expression.to_string(),
        source,
    };
    let f: CompiledExpr = compiler.compile(expression, VARIABLE).map_err(in_context)?;
    let df = compiler.derivative(expression, VARIABLE).map_err(in_context)?;

    Ok(CheckReport {
        expression: f.source().to_string(),
        derivative_expression: df.source().to_string(),
        at,
        value: f.evaluate(at),
        derivative: df.evaluate(at),
    })
}

/// Run the check command
pub fn run<W: Write>(out: &mut W, expression: &str, at: f64, config: &CliConfig) -> Result<()> {
    info!(expression, at, "Checking expression");
    let report = evaluate(expression, at)?;

    match config.format {
        OutputFormat::Json => writeln!(out, "{}", to_json(&report)?)?,
        OutputFormat::Table => {
            writeln!(out, "f'(x) = {}", report.derivative_expression)?;
            let cell = format!(
                "f({}) = {}   f'({}) = {}",
                format_number(at),
                format_bound(report.value),
                format_number(at),
                format_bound(report.derivative)
            );
            write!(out, "{}", boxed("Evaluation", &cell))?;
        }
    }
    Ok(())
}

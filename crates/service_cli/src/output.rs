//! Rendering of solve results for the terminal.

use serde::Serialize;
use solver_core::problems::Solution;

use crate::config::OutputFormat;
use crate::Result;

/// Render a solution in the requested format.
pub fn render_solution(solution: &Solution, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(solution_table(solution)),
        OutputFormat::Json => to_json(solution),
    }
}

/// Pretty-printed JSON for any serialisable report.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Statement, numbered derivation steps, and the boxed result.
pub fn solution_table(solution: &Solution) -> String {
    let mut out = format!("Statement: {}\n\nSteps:\n", solution.statement);
    for (i, step) in solution.steps.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {}\n", i + 1, step));
    }
    out.push('\n');
    out.push_str(&boxed("Result", &solution.summary()));
    out
}

/// Two-row box with a header and a single value cell.
pub fn boxed(header: &str, value: &str) -> String {
    let width = header.chars().count().max(value.chars().count());
    let rule = "─".repeat(width + 2);
    format!(
        "┌{rule}┐\n│ {header:<width$} │\n├{rule}┤\n│ {value:<width$} │\n└{rule}┘\n"
    )
}

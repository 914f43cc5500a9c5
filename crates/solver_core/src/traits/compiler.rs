//! Seam to the expression compiler collaborator.

use super::ScalarFunction;

/// Turns source text into callable functions of one variable.
///
/// Implementations report parse or compile failures through
/// [`ExpressionCompiler::Error`]; the engine forwards the message unchanged.
pub trait ExpressionCompiler {
    /// Compiled function type.
    type Function: ScalarFunction;

    /// Compilation error.
    type Error: std::error::Error;

    /// Compile `source` as a function of `variable`.
    fn compile(&self, source: &str, variable: &str) -> Result<Self::Function, Self::Error>;

    /// Compile the derivative of `source` with respect to `variable`.
    fn derivative(&self, source: &str, variable: &str) -> Result<Self::Function, Self::Error>;
}

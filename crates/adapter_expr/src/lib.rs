//! # adapter_expr: Arithmetic Expressions for rootscan
//!
//! Turns text such as `(x-4)/(x-1) - (x/3 + 4)` into functions the solver can
//! evaluate. Parsing and evaluation are done by [`meval`]; derivatives are
//! taken symbolically by [`symb_anafis`] and the resulting text is compiled
//! the same way.
//!
//! ## Supported Syntax
//!
//! - numbers: `2`, `2.5`, `.5`, `1e-3`
//! - operators: `+ - * / ^` and parentheses; products must be written out
//!   (`4*x`, not `4x`)
//! - constants: `pi`, `e`
//! - functions: `sin cos tan asin acos atan sinh cosh tanh exp ln log log10
//!   log2 sqrt cbrt abs`; `log` is the natural logarithm
//!
//! Parentheses may nest at most [`MAX_DEPTH`] levels.
//!
//! ## Usage Examples
//!
//! ```rust
//! use adapter_expr::MathCompiler;
//! use solver_core::problems::{solve_equation, EngineConfig};
//!
//! let solution = solve_equation(&MathCompiler::new(), "x^2 - 4 = 0", &EngineConfig::default()).unwrap();
//! assert_eq!(solution.set.roots().unwrap().len(), 2);
//! ```

#![deny(missing_docs)]

pub mod compiler;
pub mod error;
mod functions;

pub use compiler::{CompiledExpr, MathCompiler, MAX_DEPTH};
pub use error::ExprError;

/// Compile `source` as a function of `variable` without going through the
/// [`ExpressionCompiler`](solver_core::traits::ExpressionCompiler) trait.
pub fn compile(source: &str, variable: &str) -> Result<CompiledExpr, ExprError> {
    MathCompiler::new().build(source, variable)
}

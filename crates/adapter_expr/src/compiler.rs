//! [`ExpressionCompiler`] implementation backed by `meval` and `symb_anafis`.

use std::fmt;
use std::sync::Arc;

use meval::Expr;
use solver_core::traits::{ExpressionCompiler, ScalarFunction};
use tracing::debug;

use crate::error::ExprError;
use crate::functions::Functions;

/// Deepest parenthesis nesting accepted by [`MathCompiler`].
pub const MAX_DEPTH: usize = 100;

/// Deepest parenthesis nesting in `source`.
///
/// Unbalanced parentheses are left for the parser to report.
fn nesting_depth(source: &str) -> usize {
    source
        .chars()
        .fold((0usize, 0usize), |(depth, max), ch| match ch {
            '(' => (depth + 1, max.max(depth + 1)),
            ')' => (depth.saturating_sub(1), max),
            _ => (depth, max),
        })
        .1
}

fn check_depth(source: &str) -> Result<(), ExprError> {
    let depth = nesting_depth(source);
    if depth > MAX_DEPTH {
        return Err(ExprError::TooDeep {
            depth,
            max: MAX_DEPTH,
        });
    }
    Ok(())
}

/// A compiled expression ready for evaluation.
///
/// Cheap to clone; the bound closure is shared.
///
/// # Examples
/// ```
/// use adapter_expr::MathCompiler;
/// use solver_core::traits::{ExpressionCompiler, ScalarFunction};
///
/// let compiler = MathCompiler::new();
/// let f = compiler.compile("x^2 - 4", "x").unwrap();
/// let df = compiler.derivative("x^2 - 4", "x").unwrap();
///
/// assert_eq!(f.evaluate(3.0), 5.0);
/// assert_eq!(df.evaluate(3.0), 6.0);
/// ```
#[derive(Clone)]
pub struct CompiledExpr {
    source: String,
    func: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl CompiledExpr {
    /// The text this function was compiled from.
    ///
    /// For a derivative this is the differentiated expression.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for CompiledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledExpr")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl ScalarFunction for CompiledExpr {
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        (self.func)(x)
    }
}

/// Compiles arithmetic source text into [`CompiledExpr`] functions.
///
/// See the crate documentation for the accepted syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathCompiler;

impl MathCompiler {
    /// Create a compiler.
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn build(&self, source: &str, variable: &str) -> Result<CompiledExpr, ExprError> {
        check_depth(source)?;
        let expr: Expr = source.parse()?;
        let func = expr.bind_with_context(Functions, variable)?;
        debug!(source, variable, "expression compiled");
        Ok(CompiledExpr {
            source: source.to_string(),
            func: Arc::new(func),
        })
    }
}

impl ExpressionCompiler for MathCompiler {
    type Function = CompiledExpr;
    type Error = ExprError;

    fn compile(&self, source: &str, variable: &str) -> Result<CompiledExpr, ExprError> {
        self.build(source, variable)
    }

    fn derivative(&self, source: &str, variable: &str) -> Result<CompiledExpr, ExprError> {
        // Reject what the evaluator would reject before differentiating.
        self.build(source, variable)?;
        let text = symb_anafis::diff(source, variable, &[], None)
            .map_err(|err| ExprError::Differentiate(err.to_string()))?;
        debug!(source, derivative = %text, "expression differentiated");
        self.build(&text, variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compile_and_evaluate() {
        let f = MathCompiler::new().compile("(x-4)/(x-1) - (x/3 + 4)", "x").unwrap();
        assert_relative_eq!(f.evaluate(2.0), -2.0 - (2.0 / 3.0 + 4.0), epsilon = 1e-12);
        assert!(!f.evaluate(1.0).is_finite());
        assert_eq!(f.source(), "(x-4)/(x-1) - (x/3 + 4)");
    }

    #[test]
    fn test_constants() {
        let f = MathCompiler::new().compile("sin(pi*x) + e", "x").unwrap();
        assert_relative_eq!(f.evaluate(0.5), 1.0 + std::f64::consts::E, epsilon = 1e-12);
    }

    #[test]
    fn test_derivative_of_polynomial() {
        let df = MathCompiler::new().derivative("x^3 - 4*x + 1", "x").unwrap();
        assert_relative_eq!(df.evaluate(2.0), 8.0, epsilon = 1e-12);
        assert_relative_eq!(df.evaluate(-1.0), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_derivative_of_functions() {
        let compiler = MathCompiler::new();
        let cases: [(&str, fn(f64) -> f64); 5] = [
            ("sin(x)", f64::cos),
            ("exp(2*x)", |x| 2.0 * (2.0 * x).exp()),
            ("ln(x)", |x| 1.0 / x),
            ("sqrt(x)", |x| 0.5 / x.sqrt()),
            ("tan(x)", |x| 1.0 / (x.cos() * x.cos())),
        ];
        for (source, expected) in cases {
            let df = compiler.derivative(source, "x").unwrap();
            for x in [0.5, 1.0, 1.25] {
                assert_relative_eq!(df.evaluate(x), expected(x), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_derivative_of_abs() {
        let df = MathCompiler::new().derivative("abs(x)", "x").unwrap();
        assert_relative_eq!(df.evaluate(-2.0), -1.0, epsilon = 1e-12);
        assert_relative_eq!(df.evaluate(3.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_domain_errors_are_nan() {
        let f = MathCompiler::new().compile("sqrt(x)", "x").unwrap();
        assert!(f.evaluate(-1.0).is_nan());
    }

    #[test]
    fn test_syntax_error() {
        let err = MathCompiler::new().compile("x +* 2", "x").unwrap_err();
        assert!(matches!(err, ExprError::Syntax(_)), "{err:?}");
    }

    #[test]
    fn test_implicit_product_rejected() {
        assert!(MathCompiler::new().compile("4x", "x").is_err());
    }

    #[test]
    fn test_unknown_names() {
        let compiler = MathCompiler::new();
        assert_eq!(
            compiler.compile("sinc(x)", "x").unwrap_err(),
            ExprError::UnknownFunction("sinc".to_string())
        );
        assert_eq!(
            compiler.compile("x + y", "x").unwrap_err(),
            ExprError::UnknownIdentifier("y".to_string())
        );
        assert_eq!(
            compiler.derivative("sinc(x)", "x").unwrap_err(),
            ExprError::UnknownFunction("sinc".to_string())
        );
    }

    #[test]
    fn test_wrong_arity() {
        let err = MathCompiler::new().compile("sin(x, 2)", "x").unwrap_err();
        assert!(matches!(err, ExprError::WrongArity { ref function, .. } if function == "sin"));
    }

    #[test]
    fn test_nesting_depth() {
        assert_eq!(nesting_depth("x"), 0);
        assert_eq!(nesting_depth("(x+1)*(x-(2))"), 2);
        assert_eq!(nesting_depth(")(x"), 1);
    }

    #[test]
    fn test_deep_nesting_rejected() {
        let n = 100_000;
        let source = format!("{}x{}", "(".repeat(n), ")".repeat(n));
        let compiler = MathCompiler::new();

        assert_eq!(
            compiler.compile(&source, "x").unwrap_err(),
            ExprError::TooDeep {
                depth: n,
                max: MAX_DEPTH
            }
        );
        assert!(matches!(
            compiler.derivative(&source, "x"),
            Err(ExprError::TooDeep { .. })
        ));
    }

    #[test]
    fn test_nesting_at_limit_compiles() {
        let source = format!("{}x{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        let f = MathCompiler::new().compile(&source, "x").unwrap();
        assert_eq!(f.evaluate(2.5), 2.5);
    }
}

//! Error types for expression compilation.

use thiserror::Error;

/// Expression compilation errors.
///
/// # Examples
/// ```
/// use adapter_expr::ExprError;
///
/// let err = ExprError::UnknownFunction("sinc".to_string());
/// assert_eq!(err.to_string(), "unknown function 'sinc'");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    /// The text is not a well-formed expression.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// A name that is neither the variable nor a constant.
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),

    /// A call to a function that does not exist.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// A call with the wrong number of arguments.
    #[error("{function}: {detail}")]
    WrongArity {
        /// Function name
        function: String,
        /// What was wrong with the argument list
        detail: String,
    },

    /// Parentheses nest deeper than the compiler accepts.
    #[error("expression nests {depth} levels deep, at most {max} allowed")]
    TooDeep {
        /// Deepest nesting found
        depth: usize,
        /// Accepted maximum
        max: usize,
    },

    /// The symbolic differentiator rejected the expression.
    #[error("cannot differentiate: {0}")]
    Differentiate(String),
}

impl From<meval::Error> for ExprError {
    fn from(err: meval::Error) -> Self {
        match err {
            meval::Error::UnknownVariable(name) => ExprError::UnknownIdentifier(name),
            meval::Error::Function(name, meval::FuncEvalError::UnknownFunction) => {
                ExprError::UnknownFunction(name)
            }
            meval::Error::Function(function, detail) => ExprError::WrongArity {
                function,
                detail: detail.to_string(),
            },
            other => ExprError::Syntax(other.to_string()),
        }
    }
}

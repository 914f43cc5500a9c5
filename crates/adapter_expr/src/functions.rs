//! Names an expression may refer to besides its variable.

use std::f64::consts::{E, PI};

use meval::{ContextProvider, FuncEvalError};

/// Constants and functions visible to compiled expressions.
///
/// Includes the reciprocal trigonometric and sign functions, which appear
/// in symbolic derivatives even though users rarely write them.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Functions;

fn unary(args: &[f64], f: fn(f64) -> f64) -> Result<f64, FuncEvalError> {
    match args {
        [a] => Ok(f(*a)),
        [] => Err(FuncEvalError::TooFewArguments),
        _ => Err(FuncEvalError::TooManyArguments),
    }
}

fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

impl ContextProvider for Functions {
    fn get_var(&self, name: &str) -> Option<f64> {
        match name {
            "pi" => Some(PI),
            "e" => Some(E),
            _ => None,
        }
    }

    fn eval_func(&self, name: &str, args: &[f64]) -> Result<f64, FuncEvalError> {
        let f: fn(f64) -> f64 = match name {
            "sqrt" => f64::sqrt,
            "cbrt" => f64::cbrt,
            "exp" => f64::exp,
            "ln" | "log" => f64::ln,
            "log10" => f64::log10,
            "log2" => f64::log2,
            "abs" => f64::abs,
            "sign" | "sgn" | "signum" => sign,
            "sin" => f64::sin,
            "cos" => f64::cos,
            "tan" => f64::tan,
            "sec" => |x| 1.0 / x.cos(),
            "csc" => |x| 1.0 / x.sin(),
            "cot" => |x| 1.0 / x.tan(),
            "asin" => f64::asin,
            "acos" => f64::acos,
            "atan" => f64::atan,
            "sinh" => f64::sinh,
            "cosh" => f64::cosh,
            "tanh" => f64::tanh,
            "sech" => |x| 1.0 / x.cosh(),
            "csch" => |x| 1.0 / x.sinh(),
            "coth" => |x| 1.0 / x.tanh(),
            "asinh" => f64::asinh,
            "acosh" => f64::acosh,
            "atanh" => f64::atanh,
            _ => return Err(FuncEvalError::UnknownFunction),
        };
        unary(args, f)
    }
}

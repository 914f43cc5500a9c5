//! Relational operators between the two sides of a statement.

use std::fmt;
use std::str::FromStr;

use super::SolveError;

/// Relation between `lhs` and `rhs`.
///
/// Every statement is reduced to `f(x) = lhs(x) - rhs(x)`, so the relation
/// is always tested against zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Relation {
    /// `=`
    Eq,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Relation {
    /// The inequality operators, longest symbols first.
    pub const INEQUALITIES: [Relation; 4] = [Relation::Le, Relation::Ge, Relation::Lt, Relation::Gt];

    /// Textual operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Relation::Eq => "=",
            Relation::Lt => "<",
            Relation::Le => "<=",
            Relation::Gt => ">",
            Relation::Ge => ">=",
        }
    }

    /// Whether this is one of `<`, `<=`, `>`, `>=`.
    pub const fn is_inequality(self) -> bool {
        !matches!(self, Relation::Eq)
    }

    /// Whether `value <relation> 0` holds.
    ///
    /// Non-finite values never satisfy any relation.
    ///
    /// # Examples
    /// ```
    /// use solver_core::types::Relation;
    ///
    /// assert!(Relation::Ge.holds(0.0));
    /// assert!(!Relation::Gt.holds(0.0));
    /// assert!(!Relation::Lt.holds(f64::NAN));
    /// ```
    pub fn holds(self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            Relation::Eq => value == 0.0,
            Relation::Lt => value < 0.0,
            Relation::Le => value <= 0.0,
            Relation::Gt => value > 0.0,
            Relation::Ge => value >= 0.0,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Relation {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "=" => Ok(Relation::Eq),
            "<" => Ok(Relation::Lt),
            "<=" => Ok(Relation::Le),
            ">" => Ok(Relation::Gt),
            ">=" => Ok(Relation::Ge),
            other => Err(SolveError::MalformedInput {
                input: other.to_string(),
                expected: "one of =, <, <=, >, >=".to_string(),
            }),
        }
    }
}

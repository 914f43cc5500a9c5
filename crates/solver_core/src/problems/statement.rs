//! Splitting raw statements into `lhs`, relation, `rhs`.

use std::fmt;

use crate::types::{Relation, SolveError};

const EQUATION_SHAPE: &str = "'<lhs> = <rhs>'";
const INEQUALITY_SHAPE: &str = "'<lhs> <op> <rhs>' with op one of <, <=, >, >=";

/// A statement `lhs <relation> rhs` in one variable.
///
/// Both sides are kept as trimmed source text; compiling them is the
/// expression compiler's job.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statement {
    /// Left-hand side source.
    pub lhs: String,
    /// Relation between the sides.
    pub relation: Relation,
    /// Right-hand side source.
    pub rhs: String,
}

impl Statement {
    /// Parse either an equation or an inequality.
    ///
    /// Text containing `<` or `>` is read as an inequality, anything else as
    /// an equation.
    ///
    /// # Examples
    /// ```
    /// use solver_core::problems::Statement;
    /// use solver_core::types::Relation;
    ///
    /// let s = Statement::parse("x^2 >= 4").unwrap();
    /// assert_eq!(s.relation, Relation::Ge);
    /// assert_eq!(s.lhs, "x^2");
    /// assert_eq!(s.rhs, "4");
    /// ```
    pub fn parse(input: &str) -> Result<Self, SolveError> {
        if input.contains(['<', '>']) {
            Self::parse_inequality(input)
        } else {
            Self::parse_equation(input)
        }
    }

    /// Parse `lhs = rhs`.
    ///
    /// Exactly one `=` is accepted and both sides must be non-empty.
    pub fn parse_equation(input: &str) -> Result<Self, SolveError> {
        if input.contains(['<', '>']) {
            return Err(malformed(input, EQUATION_SHAPE));
        }
        let mut parts = input.split('=');
        let (Some(lhs), Some(rhs), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed(input, EQUATION_SHAPE));
        };
        Self::from_sides(input, lhs, Relation::Eq, rhs, EQUATION_SHAPE)
    }

    /// Parse `lhs <op> rhs` for `op` in `<`, `<=`, `>`, `>=`.
    ///
    /// The first relational operator in the text splits the statement; any
    /// later operator stays in `rhs` and is left for the compiler to reject.
    pub fn parse_inequality(input: &str) -> Result<Self, SolveError> {
        let Some(at) = input.find(['<', '>']) else {
            return Err(malformed(input, INEQUALITY_SHAPE));
        };
        let rest = &input[at..];
        let relation = Relation::INEQUALITIES
            .into_iter()
            .find(|r| rest.starts_with(r.symbol()))
            .ok_or_else(|| malformed(input, INEQUALITY_SHAPE))?;

        let lhs = &input[..at];
        let rhs = &rest[relation.symbol().len()..];
        Self::from_sides(input, lhs, relation, rhs, INEQUALITY_SHAPE)
    }

    fn from_sides(
        input: &str,
        lhs: &str,
        relation: Relation,
        rhs: &str,
        shape: &str,
    ) -> Result<Self, SolveError> {
        let (lhs, rhs) = (lhs.trim(), rhs.trim());
        if lhs.is_empty() || rhs.is_empty() {
            return Err(malformed(input, shape));
        }
        Ok(Self {
            lhs: lhs.to_string(),
            relation,
            rhs: rhs.to_string(),
        })
    }

    /// Source of `f(x) = lhs - rhs` handed to the compiler.
    pub fn difference_source(&self) -> String {
        format!("({}) - ({})", self.lhs, self.rhs)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.relation, self.rhs)
    }
}

fn malformed(input: &str, expected: &str) -> SolveError {
    SolveError::MalformedInput {
        input: input.to_string(),
        expected: expected.to_string(),
    }
}

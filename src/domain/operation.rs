// ============================================================================
// Operation
// Closed set of arithmetic operations and their dispatch
// ============================================================================

use crate::numeric::{self, CalcError, CalcResult, Number};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arithmetic operation selected by its short identifier
///
/// The set is closed: adding a variant forces every `match` below to
/// handle it, so the identifier table and the dispatch cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Operation {
    /// `add`: a + b
    Add,
    /// `sub`: a - b
    Sub,
    /// `mul`: a * b
    Mul,
    /// `div`: a / b, fails on a zero divisor
    Div,
}

impl Operation {
    /// Every operation, in the order identifiers are listed to users
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    /// Short token used on the command line
    pub const fn identifier(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
        }
    }

    /// Infix symbol for human-readable output
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
            Operation::Mul => '*',
            Operation::Div => '/',
        }
    }

    /// All identifiers, in `ALL` order
    pub fn identifiers() -> [&'static str; 4] {
        Self::ALL.map(Operation::identifier)
    }

    /// Apply the operation to two operands
    ///
    /// # Errors
    /// Only `Div` can fail, with `CalcError::DivisionByZero`.
    #[inline]
    pub fn apply(self, a: Number, b: Number) -> CalcResult<Number> {
        match self {
            Operation::Add => Ok(numeric::add(a, b)),
            Operation::Sub => Ok(numeric::subtract(a, b)),
            Operation::Mul => Ok(numeric::multiply(a, b)),
            Operation::Div => numeric::divide(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.identifier() == s)
            .ok_or_else(|| CalcError::unknown_operation(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.identifier().parse::<Operation>(), Ok(op));
            assert_eq!(op.to_string(), op.identifier());
        }
    }

    #[test]
    fn test_identifier_order() {
        assert_eq!(Operation::identifiers(), ["add", "sub", "mul", "div"]);
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("ADD".parse::<Operation>().is_err());
        assert!(" add".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
        assert_eq!(
            "mod".parse::<Operation>(),
            Err(CalcError::unknown_operation("mod"))
        );
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operation::Sub.apply(10.0, 4.0), Ok(6.0));
        assert_eq!(Operation::Mul.apply(3.0, 7.0), Ok(21.0));
        assert_eq!(Operation::Div.apply(8.0, 2.0), Ok(4.0));
        assert_eq!(
            Operation::Div.apply(5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_symbols() {
        let symbols: String = Operation::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, "+-*/");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_identifier() {
        assert_eq!(serde_json::to_string(&Operation::Div).unwrap(), "\"div\"");
        let op: Operation = serde_json::from_str("\"mul\"").unwrap();
        assert_eq!(op, Operation::Mul);
    }
}

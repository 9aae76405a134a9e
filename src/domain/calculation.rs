// ============================================================================
// Calculation Record
// One evaluated operation with its operands and result
// ============================================================================

use super::operation::Operation;
use crate::numeric::Number;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of evaluating `operation` on `a` and `b`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calculation {
    pub a: Number,
    pub b: Number,
    pub operation: Operation,
    pub result: Number,
}

impl Calculation {
    pub fn new(a: Number, b: Number, operation: Operation, result: Number) -> Self {
        Self {
            a,
            b,
            operation,
            result,
        }
    }
}

/// Renders `8.0 / 2.0 = 4.0`
impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {} {:?} = {:?}",
            self.a,
            self.operation.symbol(),
            self.b,
            self.result
        )
    }
}

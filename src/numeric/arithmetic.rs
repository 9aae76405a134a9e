// ============================================================================
// Arithmetic Primitives
// The four binary functions the calculator dispatches to
// ============================================================================

use super::errors::{CalcError, CalcResult};

/// Operand and result type. All input is treated as double precision.
pub type Number = f64;

/// Sum of two numbers
#[inline]
pub fn add(a: Number, b: Number) -> Number {
    a + b
}

/// Difference `a - b`
#[inline]
pub fn subtract(a: Number, b: Number) -> Number {
    a - b
}

/// Product of two numbers
#[inline]
pub fn multiply(a: Number, b: Number) -> Number {
    a * b
}

/// Quotient `a / b`
///
/// # Errors
/// Returns `CalcError::DivisionByZero` when `b` compares equal to zero
/// (negative zero included). Any other divisor, NaN and infinities
/// included, follows native floating-point division.
#[inline]
pub fn divide(a: Number, b: Number) -> CalcResult<Number> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

// ============================================================================
// Numeric Module
// Floating-point arithmetic primitives behind every calculation
// ============================================================================
//
// This module provides:
// - Number: the operand/result type (f64, no integer path)
// - add/subtract/multiply/divide: the four pure binary functions
// - CalcError: error types for calculations
//
// Design principles:
// - Native IEEE-754 semantics, no rounding or range checks added
// - Only division can fail, and only on a zero divisor

mod arithmetic;
mod errors;

pub use arithmetic::{add, divide, multiply, subtract, Number};
pub use errors::{CalcError, CalcResult};

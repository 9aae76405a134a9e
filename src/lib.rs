// ============================================================================
// Calculator Library
// Two-operand floating-point arithmetic over a closed set of operations
// ============================================================================

//! # Calculator
//!
//! A minimal arithmetic calculator: two `f64` operands and one of the
//! operations `add`, `sub`, `mul`, `div`.
//!
//! ## Features
//!
//! - **Closed operation set** dispatched by exhaustive `match`
//! - **Typed errors** for unknown identifiers and division by zero
//! - **Command-line front end** behind the `cli` feature (default)
//! - **JSON records** of calculations behind the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use calculator::prelude::*;
//!
//! let calculator = Calculator::new();
//!
//! // String-keyed dispatch, as the command line uses it
//! assert_eq!(calculator.calculate(8.0, 2.0, "div"), Ok(4.0));
//!
//! // Typed dispatch with the operands kept alongside the result
//! let calc = calculator.record(3.0, 7.0, Operation::Mul).unwrap();
//! println!("{}", calc); // 3.0 * 7.0 = 21.0
//!
//! assert_eq!(
//!     calculator.calculate(5.0, 0.0, "div"),
//!     Err(CalcError::DivisionByZero)
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Calculation, Operation};
    pub use crate::engine::Calculator;
    pub use crate::numeric::{add, divide, multiply, subtract, CalcError, CalcResult, Number};
}

// ============================================================================
// Calculator
// Dispatches an operation identifier to its arithmetic function
// ============================================================================

use crate::domain::{Calculation, Operation};
use crate::numeric::{CalcResult, Number};
use tracing::{debug, warn};

/// Stateless two-operand calculator
///
/// `calculate` is the string-keyed entry point; callers that already hold
/// an `Operation` should use `evaluate` and skip the lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the operation named by `operation` on `a` and `b`
    ///
    /// # Errors
    /// * `CalcError::UnknownOperation` if `operation` is not one of
    ///   `add`, `sub`, `mul`, `div`; the message lists the valid identifiers
    /// * `CalcError::DivisionByZero` for `div` with a zero divisor
    ///
    /// # Example
    /// ```
    /// use calculator::prelude::*;
    ///
    /// let calculator = Calculator::new();
    /// assert_eq!(calculator.calculate(2.0, 3.0, "add"), Ok(5.0));
    /// assert!(calculator.calculate(1.0, 1.0, "mod").is_err());
    /// ```
    pub fn calculate(&self, a: Number, b: Number, operation: &str) -> CalcResult<Number> {
        let operation: Operation = operation.parse().inspect_err(|err| {
            warn!(%err, "rejected operation identifier");
        })?;
        self.evaluate(a, b, operation)
    }

    /// Evaluate an already-resolved operation
    pub fn evaluate(&self, a: Number, b: Number, operation: Operation) -> CalcResult<Number> {
        let result = operation.apply(a, b);
        match &result {
            Ok(value) => debug!(a, b, %operation, result = value, "calculated"),
            Err(err) => debug!(a, b, %operation, %err, "calculation failed"),
        }
        result
    }

    /// Evaluate and keep the operands alongside the result
    pub fn record(&self, a: Number, b: Number, operation: Operation) -> CalcResult<Calculation> {
        let result = self.evaluate(a, b, operation)?;
        Ok(Calculation::new(a, b, operation, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::CalcError;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn test_scenarios() {
        let calc = Calculator::new();
        assert_eq!(calc.calculate(2.0, 3.0, "add"), Ok(5.0));
        assert_eq!(calc.calculate(10.0, 4.0, "sub"), Ok(6.0));
        assert_eq!(calc.calculate(3.0, 7.0, "mul"), Ok(21.0));
        assert_eq!(calc.calculate(8.0, 2.0, "div"), Ok(4.0));
        assert_eq!(
            calc.calculate(5.0, 0.0, "div"),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            calc.calculate(1.0, 1.0, "mod"),
            Err(CalcError::unknown_operation("mod"))
        );
    }

    #[test]
    fn test_unknown_operation_lists_choices() {
        let err = Calculator::new()
            .calculate(1.0, 2.0, "bogus")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'bogus'"));
        assert!(message.ends_with("add, sub, mul, div"));
    }

    #[test]
    fn test_record() {
        let calc = Calculator::new();
        let record = calc.record(3.0, 7.0, Operation::Mul).unwrap();
        assert_eq!(record, Calculation::new(3.0, 7.0, Operation::Mul, 21.0));
        assert_eq!(
            calc.record(1.0, 0.0, Operation::Div),
            Err(CalcError::DivisionByZero)
        );
    }

    quickcheck! {
        fn qc_string_and_typed_paths_agree(a: f64, b: f64) -> TestResult {
            if !a.is_finite() || !b.is_finite() {
                return TestResult::discard();
            }
            let calc = Calculator::new();
            let agree = Operation::ALL.iter().all(|op| {
                let by_name = calc.calculate(a, b, op.identifier());
                let typed = calc.evaluate(a, b, *op);
                by_name == typed
            });
            TestResult::from_bool(agree)
        }

        fn qc_unknown_identifier_rejected(name: String) -> TestResult {
            if Operation::identifiers().contains(&name.as_str()) {
                return TestResult::discard();
            }
            let result = Calculator::new().calculate(1.0, 2.0, &name);
            TestResult::from_bool(result == Err(CalcError::unknown_operation(name)))
        }
    }
}

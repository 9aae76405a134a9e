// ============================================================================
// Calculation Errors
// Error types for operation lookup and arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur while resolving or performing a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum CalcError {
    /// Operation identifier is not one of the supported set
    #[error(
        "unknown operation '{operation}'; valid operations: {}",
        crate::domain::Operation::identifiers().join(", ")
    )]
    UnknownOperation { operation: String },

    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
}

impl CalcError {
    /// Build an `UnknownOperation` error for the given identifier
    pub fn unknown_operation(operation: impl Into<String>) -> Self {
        CalcError::UnknownOperation {
            operation: operation.into(),
        }
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

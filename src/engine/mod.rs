// ============================================================================
// Engine Module
// Resolves operation identifiers and evaluates them
// ============================================================================

mod calculator;

pub use calculator::Calculator;

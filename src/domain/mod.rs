// ============================================================================
// Domain Models Module
// Operations and the records they produce
// ============================================================================

pub mod calculation;
pub mod operation;

pub use calculation::Calculation;
pub use operation::Operation;

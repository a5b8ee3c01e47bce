/// Core evaluation logic.
///
/// Contains the recursive tree walk that dispatches on each expression
/// variant, and the result type shared by all evaluation routines.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators, including the division-by-zero check
/// and the type check on operands.
pub mod binary;

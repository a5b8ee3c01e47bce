#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Position of the `/` token.
        position: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error at position {position}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details:  String,
        /// Position of the token that produced the operation.
        position: usize,
    },
}

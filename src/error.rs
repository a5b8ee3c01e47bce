/// Grammar construction errors.
///
/// Raised when a rule table or precedence table breaks one of the invariants
/// the shift-reduce engine relies on.
pub mod grammar_error;
/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing source text or
/// reducing a token stream to an expression. Every parse error is a syntax
/// error: the caller has to restart with corrected input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised during evaluation, such as division by
/// zero or arithmetic on a non-numeric value.
pub mod runtime_error;

pub use grammar_error::GrammarError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

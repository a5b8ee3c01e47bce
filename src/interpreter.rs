/// The evaluator module reduces AST nodes to values.
///
/// The evaluator walks the tree recursively, evaluating the children of a
/// binary operation left to right before combining them, and reports runtime
/// errors such as division by zero.
pub mod evaluator;
/// The grammar module builds the abstract syntax tree (AST) from tokens.
///
/// It declares the productions of the expression language and the precedence
/// table that disambiguates them, and runs a shift-reduce parse over a token
/// stream.
///
/// # Responsibilities
/// - Converts tokens into AST nodes, bottom-up.
/// - Resolves `+ -` against `* /` and groups equal operators to the left.
/// - Rejects malformed input at the first offending token.
pub mod grammar;
/// The lexer module tokenizes source text.
///
/// The grammar engine only consumes already classified tokens; this module is
/// the reference producer of such a stream from raw text.
pub mod lexer;
/// The value module defines the result type of evaluation.
pub mod value;

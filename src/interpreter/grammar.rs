/// Grammar definition and parse entry points.
///
/// Holds the [`Grammar`](core::Grammar) type that bundles the token
/// vocabulary, the precedence table and the rule table, the process-wide
/// standard grammar, and grammar validation.
pub mod core;

/// Shift-reduce engine.
///
/// Drives a stack of tokens and partially built expressions over the token
/// stream, deciding at each step whether to shift, reduce, accept or reject.
pub mod engine;

/// Operator precedence and associativity.
///
/// Resolves shift/reduce conflicts between a completed binary operation and
/// an incoming operator.
pub mod precedence;

/// Grammar rules and their build functions.
///
/// Each rule pairs a right-hand-side pattern with the function that turns the
/// matched pieces into an AST node.
pub mod rules;

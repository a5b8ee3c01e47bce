use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents the ways a grammar definition can be malformed.
pub enum GrammarError {
    /// A rule or precedence group names a token outside the vocabulary.
    #[error("Rule '{rule}' uses {kind}, which is not part of the vocabulary.")]
    UnknownTerminal {
        /// The rule (or `precedence`) naming the token.
        rule: &'static str,
        /// The unknown token kind.
        kind: TokenKind,
    },
    /// A binary operator rule has an operator without a precedence level.
    #[error("Operator {kind} in rule '{rule}' has no precedence level.")]
    MissingPrecedence {
        /// The binary operator rule.
        rule: &'static str,
        /// The operator token kind.
        kind: TokenKind,
    },
    /// A token kind appears in more than one precedence group.
    #[error("{kind} appears in more than one precedence group.")]
    DuplicatePrecedence {
        /// The repeated token kind.
        kind: TokenKind,
    },
}

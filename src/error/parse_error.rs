use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that cannot extend any valid derivation.
    #[error("Error at position {position}: Ran into a {kind} ('{text}') where it wasn't expected.")]
    UnexpectedToken {
        /// The kind of the offending token.
        kind:     TokenKind,
        /// The raw text of the offending token.
        text:     String,
        /// Index of the token in the stream.
        position: usize,
    },
    /// Reached the end of input before the expression was complete.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Number of tokens consumed before the input ran out.
        position: usize,
    },
    /// A `NUMBER` token whose text is not an integer.
    #[error("Error at position {position}: '{text}' is not a valid number.")]
    InvalidNumber {
        /// The raw text of the token.
        text:     String,
        /// Index of the token in the stream.
        position: usize,
    },
    /// The lexer found a character that starts no token.
    #[error("Error at offset {offset}: Unexpected character '{text}'.")]
    UnexpectedCharacter {
        /// The unrecognised source slice.
        text:   String,
        /// Byte offset into the source text.
        offset: usize,
    },
}

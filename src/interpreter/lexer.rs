use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::grammar::core::ParseResult};

/// The kind of a lexical token.
///
/// This is the full vocabulary shared by the lexer and the grammar engine.
/// Only a subset takes part in any grammar rule; the remaining kinds are
/// recognised so that malformed input is rejected by the parser with a precise
/// diagnostic instead of by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// Identifier tokens such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// `=`
    #[token("=")]
    Equal,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `print`
    #[token("print")]
    Print,
    /// Double quoted string literals.
    #[regex(r#""[^"]*""#)]
    StringLiteral,
}

impl TokenKind {
    /// Every token kind, in vocabulary order.
    pub const ALL: [Self; 17] = [Self::LParen,
                                 Self::RParen,
                                 Self::Plus,
                                 Self::Minus,
                                 Self::Mul,
                                 Self::Div,
                                 Self::Name,
                                 Self::Number,
                                 Self::Equal,
                                 Self::GreaterEqual,
                                 Self::LBrace,
                                 Self::RBrace,
                                 Self::Semicolon,
                                 Self::If,
                                 Self::Else,
                                 Self::Print,
                                 Self::StringLiteral];

    /// The upper-case name of the kind, as used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Name => "NAME",
            Self::Number => "NUMBER",
            Self::Equal => "EQUAL",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Semicolon => "SEMICOLON",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Print => "PRINT",
            Self::StringLiteral => "STRING",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexical unit: its kind plus the raw source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of the token.
    pub kind: TokenKind,
    /// The raw text the token was produced from.
    pub text: String,
}

impl Token {
    /// Creates a token from its kind and raw text.
    ///
    /// # Example
    /// ```
    /// use shiftexpr::interpreter::lexer::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Number, "42");
    /// assert_eq!(token.kind, TokenKind::Number);
    /// assert_eq!(token.text, "42");
    /// ```
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// Creates a token whose text is the canonical spelling of a punctuation
    /// or keyword kind. Kinds with variable text (`NAME`, `NUMBER`, `STRING`)
    /// get an empty text.
    #[must_use]
    pub fn of(kind: TokenKind) -> Self {
        let text = match kind {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Equal => "=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Semicolon => ";",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Print => "print",
            TokenKind::Name | TokenKind::Number | TokenKind::StringLiteral => "",
        };
        Self::new(kind, text)
    }

    /// Creates a `NUMBER` token.
    #[must_use]
    pub fn number(value: i64) -> Self {
        Self::new(TokenKind::Number, value.to_string())
    }

    /// Creates a `NAME` token.
    pub fn name(name: impl Into<String>) -> Self {
        Self::new(TokenKind::Name, name)
    }
}

/// Splits source text into a token stream.
///
/// Whitespace is skipped. Every other character must start a token of the
/// vocabulary.
///
/// # Errors
/// Returns `ParseError::UnexpectedCharacter` at the first slice that matches
/// no token.
///
/// # Example
/// ```
/// use shiftexpr::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("(x + 12)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::LParen, TokenKind::Name, TokenKind::Plus, TokenKind::Number, TokenKind::RParen]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        if let Ok(kind) = kind {
            tokens.push(Token::new(kind, lexer.slice()));
        } else {
            return Err(ParseError::UnexpectedCharacter { text:   lexer.slice().to_string(),
                                                         offset: lexer.span().start, });
        }
    }

    log::trace!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}

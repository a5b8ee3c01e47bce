use std::{collections::HashSet, sync::LazyLock};

use crate::{
    ast::Expr,
    error::{GrammarError, ParseError},
    interpreter::{
        grammar::{
            engine::Engine,
            precedence::{Associativity, PrecedenceTable},
            rules::{Rule, Symbol, standard_rules},
        },
        lexer::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The standard grammar, built and validated once, then shared read-only by
/// every parse.
pub static GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| {
    let grammar = Grammar::standard();
    grammar.validate().expect("the standard grammar is malformed");
    grammar
});

/// A complete grammar: the accepted vocabulary, the precedence table and the
/// productions of `expression`.
#[derive(Debug, Clone)]
pub struct Grammar {
    vocabulary: Vec<TokenKind>,
    precedence: PrecedenceTable,
    rules:      Vec<Rule>,
}

impl Grammar {
    /// Creates a grammar from its parts. Call [`Grammar::validate`] before
    /// relying on a hand-built grammar.
    #[must_use]
    pub const fn new(vocabulary: Vec<TokenKind>, precedence: PrecedenceTable, rules: Vec<Rule>) -> Self {
        Self { vocabulary,
               precedence,
               rules }
    }

    /// The grammar of the expression language: the full token vocabulary,
    /// `+ -` binding looser than `* /`, all left-associative.
    #[must_use]
    pub fn standard() -> Self {
        let precedence =
            PrecedenceTable::new().group(Associativity::Left, &[TokenKind::Plus, TokenKind::Minus])
                                  .group(Associativity::Left, &[TokenKind::Mul, TokenKind::Div]);

        Self::new(TokenKind::ALL.to_vec(), precedence, standard_rules())
    }

    /// The token kinds the grammar accepts as input.
    #[must_use]
    pub fn vocabulary(&self) -> &[TokenKind] {
        &self.vocabulary
    }

    /// The precedence table.
    #[must_use]
    pub const fn precedence(&self) -> &PrecedenceTable {
        &self.precedence
    }

    /// The productions, in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Checks the invariants the engine relies on.
    ///
    /// - Every terminal of every rule and every precedence group is part of
    ///   the vocabulary.
    /// - No token kind appears in more than one precedence group.
    /// - Every operator of an `expression OP expression` rule has a
    ///   precedence level.
    ///
    /// # Example
    /// ```
    /// use shiftexpr::interpreter::grammar::core::Grammar;
    ///
    /// assert!(Grammar::standard().validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), GrammarError> {
        for rule in &self.rules {
            for symbol in &rule.pattern {
                if let Symbol::Terminal(kind) = symbol
                   && !self.vocabulary.contains(kind)
                {
                    return Err(GrammarError::UnknownTerminal { rule: rule.name,
                                                               kind: *kind });
                }
            }
        }

        let mut seen = HashSet::new();
        for group in self.precedence.groups() {
            for kind in &group.kinds {
                if !self.vocabulary.contains(kind) {
                    return Err(GrammarError::UnknownTerminal { rule: "precedence",
                                                               kind: *kind });
                }
                if !seen.insert(*kind) {
                    return Err(GrammarError::DuplicatePrecedence { kind: *kind });
                }
            }
        }

        for rule in &self.rules {
            if let Some(kind) = rule.infix_operator()
               && self.precedence.level(kind).is_none()
            {
                return Err(GrammarError::MissingPrecedence { rule: rule.name,
                                                             kind });
            }
        }

        Ok(())
    }

    /// Parses a complete token stream into an expression.
    ///
    /// # Errors
    /// Returns a `ParseError` at the first token that cannot extend a valid
    /// derivation, or if the input ends before the expression is complete.
    pub fn parse(&self, tokens: &[Token]) -> ParseResult<Expr> {
        Engine::new(self).run(tokens)
    }
}

/// Parses a complete token stream with the standard grammar.
///
/// The whole stream must form a single expression; tokens left over after it
/// are an error.
///
/// # Errors
/// Returns a `ParseError` for malformed input. No partial tree is returned.
///
/// # Example
/// ```
/// use shiftexpr::interpreter::{
///     grammar::core::parse,
///     lexer::{Token, TokenKind},
/// };
///
/// let tokens = [Token::number(2), Token::of(TokenKind::Plus), Token::number(3),
///               Token::of(TokenKind::Mul), Token::number(4)];
/// let expr = parse(&tokens).unwrap();
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    GRAMMAR.parse(tokens)
}

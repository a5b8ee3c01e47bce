use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        grammar::{
            core::{Grammar, ParseResult},
            precedence::{Resolution, resolve},
            rules::{Piece, Rule, Symbol},
        },
        lexer::{Token, TokenKind},
    },
};

/// A single shift-reduce parse over one token stream.
///
/// The stack holds shifted tokens and reduced expressions. At each step the
/// engine reduces if a rule's pattern is on top of the stack and precedence
/// does not ask for a shift, shifts the lookahead if it extends a viable
/// prefix, accepts at the end of input when exactly one expression remains,
/// and fails otherwise.
pub struct Engine<'g> {
    grammar: &'g Grammar,
    stack:   Vec<Piece>,
}

impl<'g> Engine<'g> {
    /// Creates an engine with an empty stack.
    #[must_use]
    pub const fn new(grammar: &'g Grammar) -> Self {
        Self { grammar,
               stack: Vec::new() }
    }

    /// Runs the parse to completion.
    ///
    /// # Errors
    /// - `UnexpectedToken` for the first token that cannot be shifted.
    /// - `UnexpectedEndOfInput` if the input stops mid-expression.
    /// - Any error raised by a rule's build function.
    pub fn run(mut self, tokens: &[Token]) -> ParseResult<Expr> {
        let end = tokens.len();
        let mut tokens = tokens.iter().enumerate().peekable();

        loop {
            let lookahead = tokens.peek().copied();
            let shiftable = lookahead.filter(|(_, token)| self.can_shift(token.kind));

            if let Some(rule) = self.reducible_rule() {
                match shiftable {
                    None => {
                        self.reduce(rule)?;
                        continue;
                    },
                    Some((position, token)) => match self.decide(rule, token.kind) {
                        Resolution::Reduce => {
                            self.reduce(rule)?;
                            continue;
                        },
                        Resolution::Shift => {},
                        Resolution::Error => return Err(unexpected_token(token, position)),
                    },
                }
            }

            match (lookahead, shiftable) {
                (_, Some((position, token))) => {
                    self.shift(token, position);
                    tokens.next();
                },
                (Some((position, token)), None) => return Err(unexpected_token(token, position)),
                (None, None) => return self.accept(end),
            }
        }
    }

    /// The longest rule whose whole pattern is on top of the stack.
    fn reducible_rule(&self) -> Option<&'g Rule> {
        self.grammar
            .rules()
            .iter()
            .filter(|rule| rule.matches(&self.stack))
            .max_by_key(|rule| rule.pattern.len())
    }

    /// Returns `true` if shifting a token of this kind keeps the stack a
    /// prefix of some derivation: the token belongs to the vocabulary, and it
    /// either continues a rule whose leading symbols are on the stack, or
    /// opens a rule where an expression is expected.
    fn can_shift(&self, kind: TokenKind) -> bool {
        self.grammar.vocabulary().contains(&kind)
        && self.grammar.rules().iter().any(|rule| {
            rule.pattern.iter().enumerate().any(|(i, symbol)| {
                *symbol == Symbol::Terminal(kind)
                && if i == 0 { self.expects_expression() } else { rule.matches_prefix(i, &self.stack) }
            })
        })
    }

    /// Returns `true` if the next piece may be the start of an expression.
    fn expects_expression(&self) -> bool {
        self.stack.is_empty()
        || self.grammar.rules().iter().any(|rule| {
            rule.pattern
                .iter()
                .enumerate()
                .skip(1)
                .any(|(i, symbol)| *symbol == Symbol::Expression && rule.matches_prefix(i, &self.stack))
        })
    }

    /// Decides between reducing `rule` and shifting a token of `kind`.
    fn decide(&self, rule: &Rule, kind: TokenKind) -> Resolution {
        if !rule.ends_with_expression() {
            return Resolution::Reduce;
        }

        let precedence = self.grammar.precedence();
        resolve(rule.precedence_terminal().and_then(|k| precedence.level(k)),
                precedence.level(kind))
    }

    fn shift(&mut self, token: &Token, position: usize) {
        log::trace!("shift {} at {position}", token.kind);
        self.stack.push(Piece::Token { token: token.clone(),
                                       position });
    }

    fn reduce(&mut self, rule: &Rule) -> ParseResult<()> {
        log::trace!("reduce {} ({} pieces)", rule.name, rule.pattern.len());
        let pieces = self.stack.split_off(self.stack.len() - rule.pattern.len());
        let expr = (rule.build)(pieces)?;
        self.stack.push(Piece::Expr(expr));
        Ok(())
    }

    fn accept(mut self, end: usize) -> ParseResult<Expr> {
        match (self.stack.pop(), self.stack.is_empty()) {
            (Some(Piece::Expr(expr)), true) => {
                log::trace!("accept");
                Ok(expr)
            },
            _ => Err(ParseError::UnexpectedEndOfInput { position: end }),
        }
    }
}

fn unexpected_token(token: &Token, position: usize) -> ParseError {
    ParseError::UnexpectedToken { kind: token.kind,
                                  text: token.text.clone(),
                                  position }
}

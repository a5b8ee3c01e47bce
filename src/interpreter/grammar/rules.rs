use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        grammar::core::ParseResult,
        lexer::{Token, TokenKind},
    },
};

/// One element of a rule's right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A token of the given kind.
    Terminal(TokenKind),
    /// A complete `expression`.
    Expression,
}

impl Symbol {
    /// Returns `true` if the piece is what this symbol stands for.
    #[must_use]
    pub fn matches(self, piece: &Piece) -> bool {
        match (self, piece) {
            (Self::Terminal(kind), Piece::Token { token, .. }) => token.kind == kind,
            (Self::Expression, Piece::Expr(_)) => true,
            _ => false,
        }
    }
}

/// An entry of the parse stack: either a shifted token or an expression built
/// by an earlier reduction.
#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    /// A shifted token.
    Token {
        /// The token.
        token:    Token,
        /// Index of the token in the stream.
        position: usize,
    },
    /// A reduced expression.
    Expr(Expr),
}

impl Piece {
    fn into_token(self) -> (Token, usize) {
        match self {
            Self::Token { token, position } => (token, position),
            Self::Expr(_) => unreachable!("rule pattern expected a token, found an expression"),
        }
    }

    fn into_expr(self) -> Expr {
        match self {
            Self::Expr(expr) => expr,
            Self::Token { token, .. } => {
                unreachable!("rule pattern expected an expression, found {}", token.kind)
            },
        }
    }
}

/// Turns the pieces matched by a rule into an AST node.
pub type BuildFn = fn(Vec<Piece>) -> ParseResult<Expr>;

/// A grammar production: `expression := pattern`.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name used in logs and diagnostics.
    pub name:    &'static str,
    /// The right-hand side.
    pub pattern: Vec<Symbol>,
    /// Builds the node once the pattern is on top of the stack.
    pub build:   BuildFn,
}

impl Rule {
    /// Creates a rule from its name, pattern and build function.
    #[must_use]
    pub fn new(name: &'static str, pattern: &[Symbol], build: BuildFn) -> Self {
        Self { name,
               pattern: pattern.to_vec(),
               build }
    }

    /// Returns `true` if the first `len` symbols of the pattern match the top
    /// `len` entries of the stack.
    #[must_use]
    pub fn matches_prefix(&self, len: usize, stack: &[Piece]) -> bool {
        len <= self.pattern.len()
        && len <= stack.len()
        && self.pattern[..len].iter()
                              .zip(&stack[stack.len() - len..])
                              .all(|(symbol, piece)| symbol.matches(piece))
    }

    /// Returns `true` if the whole pattern is on top of the stack.
    #[must_use]
    pub fn matches(&self, stack: &[Piece]) -> bool {
        self.matches_prefix(self.pattern.len(), stack)
    }

    /// Returns `true` if the pattern ends with `expression`, which makes the
    /// rule a candidate for a shift/reduce conflict.
    #[must_use]
    pub fn ends_with_expression(&self) -> bool {
        self.pattern.last() == Some(&Symbol::Expression)
    }

    /// The last terminal of the pattern; its precedence is the rule's.
    #[must_use]
    pub fn precedence_terminal(&self) -> Option<TokenKind> {
        self.pattern.iter().rev().find_map(|symbol| match symbol {
                                      Symbol::Terminal(kind) => Some(*kind),
                                      Symbol::Expression => None,
                                  })
    }

    /// The operator of an `expression OP expression` rule.
    #[must_use]
    pub fn infix_operator(&self) -> Option<TokenKind> {
        match self.pattern.as_slice() {
            [Symbol::Expression, Symbol::Terminal(kind), Symbol::Expression] => Some(*kind),
            _ => None,
        }
    }
}

/// Maps an operator token to the binary operator it denotes.
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Mul => Some(BinaryOperator::Mul),
        TokenKind::Div => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// The productions of the expression language.
///
/// ```text
/// expression := NUMBER
/// expression := NAME
/// expression := LPAREN expression RPAREN
/// expression := expression (PLUS | MINUS | MUL | DIV) expression
/// ```
#[must_use]
pub fn standard_rules() -> Vec<Rule> {
    use Symbol::{Expression, Terminal};

    let mut rules = vec![Rule::new("expression_number", &[Terminal(TokenKind::Number)], expression_number),
                         Rule::new("expression_name", &[Terminal(TokenKind::Name)], expression_name),
                         Rule::new("expression_parens",
                                   &[Terminal(TokenKind::LParen), Expression, Terminal(TokenKind::RParen)],
                                   expression_parens)];

    for op in [TokenKind::Plus, TokenKind::Minus, TokenKind::Mul, TokenKind::Div] {
        rules.push(Rule::new("expression_binop", &[Expression, Terminal(op), Expression], expression_binop));
    }

    rules
}

fn take<const N: usize>(pieces: Vec<Piece>) -> [Piece; N] {
    pieces.try_into()
          .unwrap_or_else(|pieces: Vec<Piece>| unreachable!("rule expected {N} pieces, got {}", pieces.len()))
}

/// `expression := NUMBER`
///
/// The token text must be an integer, optionally signed. It is stored as the
/// nearest `f64`, whatever its magnitude.
fn expression_number(pieces: Vec<Piece>) -> ParseResult<Expr> {
    let [number] = take(pieces);
    let (token, position) = number.into_token();

    let digits = token.text.strip_prefix(['+', '-']).unwrap_or(token.text.as_str());
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber { text: token.text,
                                               position });
    }

    let value = token.text.parse::<f64>().map_err(|_| ParseError::InvalidNumber { text: token.text.clone(),
                                                                                 position })?;

    Ok(Expr::Number { value, position })
}

/// `expression := NAME`
fn expression_name(pieces: Vec<Piece>) -> ParseResult<Expr> {
    let [name] = take(pieces);
    let (token, position) = name.into_token();

    Ok(Expr::Variable { name: token.text,
                        position })
}

/// `expression := LPAREN expression RPAREN`
///
/// Parentheses only group; they produce no node of their own.
fn expression_parens(pieces: Vec<Piece>) -> ParseResult<Expr> {
    let [_, inner, _] = take(pieces);
    Ok(inner.into_expr())
}

/// `expression := expression OP expression`
fn expression_binop(pieces: Vec<Piece>) -> ParseResult<Expr> {
    let [left, op, right] = take(pieces);
    let (token, position) = op.into_token();

    let Some(op) = token_to_binary_operator(token.kind) else {
        unreachable!("{} is not a binary operator", token.kind);
    };

    Ok(Expr::BinaryOp { left: Box::new(left.into_expr()),
                        op,
                        right: Box::new(right.into_expr()),
                        position })
}

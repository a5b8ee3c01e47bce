use shiftexpr::{
    ast::{BinaryOperator, Expr},
    error::{GrammarError, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{eval, eval_number},
        grammar::{
            core::{GRAMMAR, Grammar, parse},
            precedence::{Associativity, PrecedenceTable},
            rules::standard_rules,
        },
        lexer::{Token, TokenKind, tokenize},
        value::core::Value,
    },
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn op(kind: TokenKind) -> Token {
    Token::of(kind)
}

fn evaluate(tokens: &[Token]) -> f64 {
    let expr = parse(tokens).unwrap_or_else(|e| panic!("parse failed: {e}"));
    eval_number(&expr).unwrap_or_else(|e| panic!("eval failed: {e}"))
}

#[test]
fn single_literal_evaluates_to_itself() {
    init();
    for n in [0, 1, 42, -7, 9_007_199_254_740_991] {
        #[allow(clippy::cast_precision_loss)]
        let expected = n as f64;
        assert_eq!(evaluate(&[Token::number(n)]), expected);
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    init();
    let tokens = [Token::number(2),
                  op(TokenKind::Plus),
                  Token::number(3),
                  op(TokenKind::Mul),
                  Token::number(4)];
    assert_eq!(evaluate(&tokens), 14.0);
}

#[test]
fn subtraction_is_left_associative() {
    init();
    let tokens = [Token::number(10),
                  op(TokenKind::Minus),
                  Token::number(3),
                  op(TokenKind::Minus),
                  Token::number(2)];
    assert_eq!(evaluate(&tokens), 5.0);

    let expr = parse(&tokens).unwrap();
    assert_eq!(expr.to_string(), "((10 - 3) - 2)");
}

#[test]
fn parentheses_override_precedence() {
    init();
    let tokens = [op(TokenKind::LParen),
                  Token::number(2),
                  op(TokenKind::Plus),
                  Token::number(3),
                  op(TokenKind::RParen),
                  op(TokenKind::Mul),
                  Token::number(4)];
    assert_eq!(evaluate(&tokens), 20.0);
}

#[test]
fn tree_shape_records_operators_and_positions() {
    init();
    let tokens = [Token::number(2),
                  op(TokenKind::Plus),
                  Token::number(3),
                  op(TokenKind::Mul),
                  Token::number(4)];
    let expected = Expr::BinaryOp { left:     Box::new(Expr::Number { value: 2.0, position: 0 }),
                                    op:       BinaryOperator::Add,
                                    right:    Box::new(Expr::BinaryOp { left:     Box::new(Expr::Number { value:    3.0,
                                                                                                             position: 2, }),
                                                                        op:       BinaryOperator::Mul,
                                                                        right:    Box::new(Expr::Number { value:    4.0,
                                                                                                             position: 4, }),
                                                                        position: 3, }),
                                    position: 1, };
    assert_eq!(parse(&tokens).unwrap(), expected);
}

#[test]
fn parentheses_produce_no_node() {
    init();
    let tokens = [op(TokenKind::LParen), Token::name("x"), op(TokenKind::RParen)];
    assert_eq!(parse(&tokens).unwrap(),
               Expr::Variable { name:     "x".to_string(),
                                position: 1, });
}

#[test]
fn division_by_zero_fails() {
    init();
    let tokens = [Token::number(5), op(TokenKind::Div), Token::number(0)];
    let expr = parse(&tokens).unwrap();
    assert_eq!(eval(&expr), Err(RuntimeError::DivisionByZero { position: 1 }));
}

#[test]
fn division_is_not_truncating() {
    init();
    let tokens = [Token::number(7), op(TokenKind::Div), Token::number(2)];
    assert_eq!(evaluate(&tokens), 3.5);
}

#[test]
fn consecutive_numbers_are_a_syntax_error() {
    init();
    let tokens = [Token::number(1), Token::number(2)];
    assert_eq!(parse(&tokens),
               Err(ParseError::UnexpectedToken { kind:     TokenKind::Number,
                                                 text:     "2".to_string(),
                                                 position: 1, }));
}

#[test]
fn trailing_tokens_are_a_syntax_error() {
    init();
    let tokens = [Token::number(1), op(TokenKind::Plus), Token::number(2), op(TokenKind::RParen)];
    assert!(matches!(parse(&tokens),
                     Err(ParseError::UnexpectedToken { kind: TokenKind::RParen,
                                                       position: 3,
                                                       .. })));
}

#[test]
fn incomplete_input_is_a_syntax_error() {
    init();
    assert_eq!(parse(&[]), Err(ParseError::UnexpectedEndOfInput { position: 0 }));

    let tokens = [op(TokenKind::LParen), Token::number(1), op(TokenKind::Plus), Token::number(2)];
    assert_eq!(parse(&tokens), Err(ParseError::UnexpectedEndOfInput { position: 4 }));
}

#[test]
fn tokens_without_rules_are_rejected() {
    init();
    let unused = [TokenKind::Equal,
                  TokenKind::GreaterEqual,
                  TokenKind::LBrace,
                  TokenKind::RBrace,
                  TokenKind::Semicolon,
                  TokenKind::If,
                  TokenKind::Else,
                  TokenKind::Print,
                  TokenKind::StringLiteral];

    for kind in unused {
        let leading = [op(kind), Token::number(1)];
        assert!(matches!(parse(&leading), Err(ParseError::UnexpectedToken { position: 0, .. })),
                "{kind} accepted at the start");

        let trailing = [Token::number(1), op(kind)];
        assert!(matches!(parse(&trailing), Err(ParseError::UnexpectedToken { position: 1, .. })),
                "{kind} accepted after an expression");
    }
}

#[test]
fn number_text_must_be_an_integer() {
    init();
    let tokens = [Token::new(TokenKind::Number, "1.5")];
    assert_eq!(parse(&tokens),
               Err(ParseError::InvalidNumber { text:     "1.5".to_string(),
                                               position: 0, }));

    for text in ["1e5", "-", "", "0x10", "12a"] {
        assert_eq!(parse(&[Token::new(TokenKind::Number, text)]),
                   Err(ParseError::InvalidNumber { text:     text.to_string(),
                                                   position: 0, }));
    }
}

#[test]
fn large_literals_keep_their_value() {
    init();
    assert_eq!(evaluate(&[Token::new(TokenKind::Number, "9007199254740992")]), 9_007_199_254_740_992.0);
    assert_eq!(evaluate(&[Token::new(TokenKind::Number, "100000000000000000000")]), 1e20);
    assert_eq!(evaluate(&[Token::new(TokenKind::Number, "-100000000000000000000")]), -1e20);

    let expr = parse(&tokenize("100000000000000000000 / 4").unwrap()).unwrap();
    assert_eq!(eval(&expr), Ok(Value::Number(2.5e19)));
}

#[test]
fn evaluation_is_repeatable() {
    init();
    let tokens = tokenize("(8 - 2) / 4 * 3 + 1").unwrap();
    let expr = parse(&tokens).unwrap();

    let first = eval(&expr).unwrap();
    let second = eval(&expr).unwrap();
    assert_eq!(first, Value::Number(5.5));
    assert_eq!(first, second);
}

#[test]
fn name_evaluates_to_identifier_text() {
    init();
    let expr = parse(&[Token::name("variable")]).unwrap();
    assert_eq!(expr.eval(), Ok(Value::Identifier("variable".to_string())));
    assert!(matches!(eval_number(&expr), Err(RuntimeError::TypeError { position: 0, .. })));
}

#[test]
fn identifier_operand_is_a_type_error() {
    init();
    let tokens = [Token::name("x"), op(TokenKind::Mul), Token::number(2)];
    let expr = parse(&tokens).unwrap();
    assert!(matches!(eval(&expr), Err(RuntimeError::TypeError { position: 1, .. })));
}

#[test]
fn standard_grammar_is_valid() {
    assert_eq!(Grammar::standard().validate(), Ok(()));
    assert_eq!(GRAMMAR.validate(), Ok(()));
    assert_eq!(GRAMMAR.vocabulary(), TokenKind::ALL);
}

#[test]
fn tokens_outside_the_vocabulary_are_rejected() {
    init();
    let vocabulary = TokenKind::ALL.into_iter().filter(|kind| *kind != TokenKind::Name).collect();
    let grammar = Grammar::new(vocabulary, Grammar::standard().precedence().clone(), standard_rules());

    assert!(grammar.parse(&tokenize("1 + 2").unwrap()).is_ok());
    assert_eq!(grammar.parse(&tokenize("1 + x").unwrap()),
               Err(ParseError::UnexpectedToken { kind:     TokenKind::Name,
                                                 text:     "x".to_string(),
                                                 position: 2, }));
}

#[test]
fn operator_without_precedence_is_rejected() {
    let precedence = PrecedenceTable::new().group(Associativity::Left, &[TokenKind::Plus, TokenKind::Minus]);
    let grammar = Grammar::new(TokenKind::ALL.to_vec(), precedence, standard_rules());
    assert!(matches!(grammar.validate(),
                     Err(GrammarError::MissingPrecedence { kind: TokenKind::Mul, .. })));
}

#[test]
fn operator_in_two_groups_is_rejected() {
    let precedence = PrecedenceTable::new().group(Associativity::Left, &[TokenKind::Plus, TokenKind::Minus])
                                           .group(Associativity::Left,
                                                  &[TokenKind::Mul, TokenKind::Div, TokenKind::Plus]);
    let grammar = Grammar::new(TokenKind::ALL.to_vec(), precedence, standard_rules());
    assert_eq!(grammar.validate(), Err(GrammarError::DuplicatePrecedence { kind: TokenKind::Plus }));
}

#[test]
fn terminal_outside_vocabulary_is_rejected() {
    let vocabulary = vec![TokenKind::Number, TokenKind::Plus, TokenKind::Minus, TokenKind::Mul, TokenKind::Div];
    let grammar = Grammar::new(vocabulary, Grammar::standard().precedence().clone(), standard_rules());
    assert_eq!(grammar.validate(),
               Err(GrammarError::UnknownTerminal { rule: "expression_name",
                                                   kind: TokenKind::Name, }));
}

#[test]
fn right_associative_grammar_groups_to_the_right() {
    init();
    let precedence = PrecedenceTable::new().group(Associativity::Right, &[TokenKind::Plus, TokenKind::Minus])
                                           .group(Associativity::Left, &[TokenKind::Mul, TokenKind::Div]);
    let grammar = Grammar::new(TokenKind::ALL.to_vec(), precedence, standard_rules());
    assert_eq!(grammar.validate(), Ok(()));

    let tokens = tokenize("10 - 3 - 2").unwrap();
    let expr = grammar.parse(&tokens).unwrap();
    assert_eq!(expr.to_string(), "(10 - (3 - 2))");
    assert_eq!(eval_number(&expr), Ok(9.0));
}

#[test]
fn non_associative_operators_cannot_chain() {
    init();
    let precedence = PrecedenceTable::new().group(Associativity::NonAssoc, &[TokenKind::Plus, TokenKind::Minus])
                                           .group(Associativity::Left, &[TokenKind::Mul, TokenKind::Div]);
    let grammar = Grammar::new(TokenKind::ALL.to_vec(), precedence, standard_rules());

    let tokens = tokenize("1 + 2 - 3").unwrap();
    assert!(matches!(grammar.parse(&tokens),
                     Err(ParseError::UnexpectedToken { kind: TokenKind::Minus,
                                                       position: 3,
                                                       .. })));
    assert!(grammar.parse(&tokenize("1 + 2 * 3").unwrap()).is_ok());
}

#[test]
fn lexer_classifies_the_vocabulary() {
    let tokens = tokenize("if else print x1 42 \"hi\" = >= { } ; ( ) + - * /").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               [TokenKind::If,
                TokenKind::Else,
                TokenKind::Print,
                TokenKind::Name,
                TokenKind::Number,
                TokenKind::StringLiteral,
                TokenKind::Equal,
                TokenKind::GreaterEqual,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Semicolon,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Mul,
                TokenKind::Div]);
    assert_eq!(tokens[3].text, "x1");
    assert_eq!(tokens[5].text, "\"hi\"");
}

#[test]
fn lexer_rejects_unknown_characters() {
    assert_eq!(tokenize("1 + $"),
               Err(ParseError::UnexpectedCharacter { text:   "$".to_string(),
                                                     offset: 4, }));
}

#[test]
fn errors_name_the_offending_kind() {
    let err = parse(&[Token::number(1), op(TokenKind::Semicolon)]).unwrap_err();
    assert_eq!(err.to_string(),
               "Error at position 1: Ran into a SEMICOLON (';') where it wasn't expected.");
}

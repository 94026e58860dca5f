// tests/lexer_tests.rs

use qrius::ast::{Token, TokenKind};
use qrius::lexer::Lexer;

fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::tokenize(input).into_iter().map(|t| t.kind).collect()
}

// ============================================================================
// Delimiters
// ============================================================================

#[test]
fn test_delimiters() {
    let test_cases = vec![
        ("(", TokenKind::Lparen),
        (")", TokenKind::Rparen),
        ("{", TokenKind::Lbrace),
        ("}", TokenKind::Rbrace),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token();
        assert_eq!(token.kind, expected, "Failed for input: {}", input);
        assert_eq!(token.literal, input);
        assert_eq!(token.position, 0);
        assert!(lexer.next_token().is_eof());
    }
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_keywords() {
    let test_cases = vec![
        ("null", TokenKind::Null),
        ("and", TokenKind::And),
        ("or", TokenKind::Or),
        ("not", TokenKind::Not),
        ("eq", TokenKind::Eq),
        ("ne", TokenKind::NotEq),
        ("gt", TokenKind::GreaterThan),
        ("ge", TokenKind::GreaterThanOrEqual),
        ("lt", TokenKind::LessThan),
        ("le", TokenKind::LessThanOrEqual),
    ];

    for (input, expected) in test_cases {
        let token = Lexer::new(input).next_token();
        assert_eq!(token, Token::new(expected, input, 0), "Failed for input: {}", input);
    }
}

#[test]
fn test_keywords_are_case_sensitive() {
    for input in ["NULL", "Null", "AND", "Or", "NOT", "Eq", "GT"] {
        let token = Lexer::new(input).next_token();
        assert_eq!(token.kind, TokenKind::Ident, "Failed for input: {}", input);
        assert_eq!(token.literal, input);
    }
}

#[test]
fn test_keyword_prefix_is_identifier() {
    // Maximal munch: these only start with a keyword
    for input in ["nullable", "order", "android", "note", "equals", "gte", "ne-1"] {
        let token = Lexer::new(input).next_token();
        assert_eq!(token, Token::new(TokenKind::Ident, input, 0));
    }
}

// ============================================================================
// Identifiers
// ============================================================================

#[test]
fn test_identifiers() {
    for input in ["name", "user.name", "user-name", "_internal", "nam3", "a.b-c_d.9"] {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, input, 0));
        assert!(lexer.next_token().is_eof());
    }
}

#[test]
fn test_identifier_cannot_start_with_dash_or_dot() {
    let tokens = Lexer::tokenize("-a");
    assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "-", 0));
    assert_eq!(tokens[1], Token::new(TokenKind::Ident, "a", 1));

    let tokens = Lexer::tokenize(".a");
    assert_eq!(tokens[0], Token::new(TokenKind::Illegal, ".", 0));
    assert_eq!(tokens[1], Token::new(TokenKind::Ident, "a", 1));
}

// ============================================================================
// Integers
// ============================================================================

#[test]
fn test_integers() {
    let tokens = Lexer::tokenize("0 18 007 123456789012345678901234567890");
    let literals: Vec<_> = tokens.iter().map(|t| t.literal.as_str()).collect();
    assert_eq!(literals, vec!["0", "18", "007", "123456789012345678901234567890", ""]);
    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Int));
}

#[test]
fn test_digits_then_letters_split() {
    // An identifier can not start with a digit, so `1abc` is Int then Ident
    let tokens = Lexer::tokenize("1abc");
    assert_eq!(tokens[0], Token::new(TokenKind::Int, "1", 0));
    assert_eq!(tokens[1], Token::new(TokenKind::Ident, "abc", 1));
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_simple_strings() {
    let mut lexer = Lexer::new("'John' 'hello world' ''");
    assert_eq!(lexer.next_token(), Token::new(TokenKind::String, "John", 0));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::String, "hello world", 7));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::String, "", 21));
    assert_eq!(lexer.next_token(), Token::eof(23));
}

#[test]
fn test_string_keeps_keywords_and_symbols() {
    let token = Lexer::new("'a eq b and (c) @'").next_token();
    assert_eq!(token, Token::new(TokenKind::String, "a eq b and (c) @", 0));
}

#[test]
fn test_unterminated_string() {
    let mut lexer = Lexer::new("name eq 'John");
    lexer.next_token();
    lexer.next_token();
    assert_eq!(lexer.next_token(), Token::new(TokenKind::String, "John", 8));
    assert_eq!(lexer.next_token(), Token::eof(13));
}

#[test]
fn test_string_with_multibyte_content() {
    let mut lexer = Lexer::new("'café' x");
    assert_eq!(lexer.next_token(), Token::new(TokenKind::String, "café", 0));
    // é is two bytes
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x", 8));
}

// ============================================================================
// Illegal characters
// ============================================================================

#[test]
fn test_illegal_characters() {
    let tokens = Lexer::tokenize("n@me eq 'John'");
    assert_eq!(tokens[0], Token::new(TokenKind::Ident, "n", 0));
    assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "@", 1));
    assert_eq!(tokens[2], Token::new(TokenKind::Ident, "me", 2));
    assert_eq!(tokens[3], Token::new(TokenKind::Eq, "eq", 5));
}

#[test]
fn test_illegal_multibyte_character() {
    let tokens = Lexer::tokenize("ä eq 1");
    assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "ä", 0));
    assert_eq!(tokens[1], Token::new(TokenKind::Eq, "eq", 3));
}

#[test]
fn test_symbolic_operators_are_illegal() {
    assert_eq!(
        kinds("a = 1"),
        vec![TokenKind::Ident, TokenKind::Illegal, TokenKind::Int, TokenKind::Eof]
    );
}

// ============================================================================
// Whitespace and end of input
// ============================================================================

#[test]
fn test_empty_input() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token(), Token::eof(0));
}

#[test]
fn test_only_whitespace() {
    let mut lexer = Lexer::new(" \t\n ");
    assert_eq!(lexer.next_token(), Token::eof(4));
}

#[test]
fn test_unicode_whitespace_skipped() {
    // U+00A0 no-break space is two bytes
    let tokens = Lexer::tokenize("a\u{a0}eq\u{2003}1");
    assert_eq!(tokens[0], Token::new(TokenKind::Ident, "a", 0));
    assert_eq!(tokens[1], Token::new(TokenKind::Eq, "eq", 3));
    assert_eq!(tokens[2], Token::new(TokenKind::Int, "1", 8));
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("a");
    lexer.next_token();
    for _ in 0..5 {
        assert_eq!(lexer.next_token(), Token::eof(1));
    }
}

#[test]
fn test_no_space_between_tokens() {
    let tokens = Lexer::tokenize("(a eq'x')");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Lparen, "(", 0),
            Token::new(TokenKind::Ident, "a", 1),
            Token::new(TokenKind::Eq, "eq", 3),
            Token::new(TokenKind::String, "x", 5),
            Token::new(TokenKind::Rparen, ")", 8),
            Token::eof(9),
        ]
    );
}

// ============================================================================
// Full filters
// ============================================================================

#[test]
fn test_filter_expression() {
    let tokens = Lexer::tokenize("name eq 'John' or not age ge 18");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Ident, "name", 0),
            Token::new(TokenKind::Eq, "eq", 5),
            Token::new(TokenKind::String, "John", 8),
            Token::new(TokenKind::Or, "or", 15),
            Token::new(TokenKind::Not, "not", 18),
            Token::new(TokenKind::Ident, "age", 22),
            Token::new(TokenKind::GreaterThanOrEqual, "ge", 26),
            Token::new(TokenKind::Int, "18", 29),
            Token::eof(31),
        ]
    );
}

#[test]
fn test_token_kind_spelling() {
    assert_eq!(TokenKind::And.to_string(), "and");
    assert_eq!(TokenKind::Lparen.to_string(), "(");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(Token::from_kind(TokenKind::Eof, 3), Token::eof(3));
}

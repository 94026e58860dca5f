use crate::ast::{Token, TokenKind};

/// Splits a filter string into tokens on demand.
///
/// Lexing never fails: characters that cannot start a token come back as
/// [`TokenKind::Illegal`] and an unterminated string runs to the end of the
/// input. Once the input is exhausted every call returns EOF.
pub struct Lexer {
    input: String,
    /// Byte offset of the next unread character
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.to_string(),
            position: 0,
        }
    }

    /// All tokens of `input`, ending with the first EOF.
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_while(&mut self, pred: impl Fn(char) -> bool) -> &str {
        let start = self.position;
        while let Some(ch) = self.current_char() {
            if pred(ch) {
                self.advance();
            } else {
                break;
            }
        }
        &self.input[start..self.position]
    }

    /// Content between single quotes. Without a closing quote the rest of
    /// the input is taken.
    fn read_string(&mut self) -> String {
        self.advance(); // opening quote
        let start = self.position;

        while let Some(ch) = self.current_char() {
            if ch == '\'' {
                let content = self.input[start..self.position].to_string();
                self.advance();
                return content;
            }
            self.advance();
        }

        self.input[start..].to_string()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.position;

        let kind = match self.current_char() {
            None => return Token::eof(start),
            Some('(') => TokenKind::Lparen,
            Some(')') => TokenKind::Rparen,
            Some('{') => TokenKind::Lbrace,
            Some('}') => TokenKind::Rbrace,
            Some('\'') => return Token::new(TokenKind::String, self.read_string(), start),
            Some(ch) if ch.is_ascii_digit() => {
                let digits = self.read_while(|c| c.is_ascii_digit()).to_string();
                return Token::new(TokenKind::Int, digits, start);
            }
            Some(ch) if is_ident_start(ch) => {
                let word = self.read_while(is_ident_char).to_string();
                return match TokenKind::keyword(&word) {
                    Some(kind) => Token::from_kind(kind, start),
                    None => Token::new(TokenKind::Ident, word, start),
                };
            }
            Some(ch) => {
                self.advance();
                return Token::new(TokenKind::Illegal, ch.to_string(), start);
            }
        };

        self.advance();
        Token::from_kind(kind, start)
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.')
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("and or not null eq ne gt ge lt le");
    let kinds = [
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Not,
        TokenKind::Null,
        TokenKind::Eq,
        TokenKind::NotEq,
        TokenKind::GreaterThan,
        TokenKind::GreaterThanOrEqual,
        TokenKind::LessThan,
        TokenKind::LessThanOrEqual,
    ];
    for kind in kinds {
        let token = lexer.next_token();
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, kind.as_str());
    }
    assert!(lexer.next_token().is_eof());
}

#[test]
fn test_filter() {
    let mut lexer = Lexer::new("(age gt 5)");
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Lparen, "(", 0));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "age", 1));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::GreaterThan, "gt", 5));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Int, "5", 8));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Rparen, ")", 9));
    assert_eq!(lexer.next_token(), Token::eof(10));
}

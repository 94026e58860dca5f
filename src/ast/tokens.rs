use std::fmt;

use crate::ast::ComparisonOperator;

/// Kind of a lexical token.
///
/// Keyword and delimiter kinds double as their own spelling (see
/// [`TokenKind::as_str`]), so a token can be synthesized from its kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character that cannot start any token, e.g. `@`
    Illegal,

    /// End of input. Returned indefinitely once the input is exhausted.
    Eof,

    // Identifiers and literals
    /// Field name
    ///
    /// Starts with an ASCII letter or `_`, continues with letters, digits,
    /// `_`, `-` or `.`.
    ///
    /// # Examples
    /// ```text
    /// name
    /// user.name
    /// user-name
    /// ```
    Ident,

    /// Run of decimal digits
    ///
    /// # Examples
    /// ```text
    /// 0
    /// 18
    /// ```
    Int,

    /// Single-quoted string, the literal holds the unquoted content
    ///
    /// # Examples
    /// ```text
    /// 'John'
    /// ```
    String,

    /// Null value, lowercase `null` only
    Null,

    // Comparison
    /// `eq`
    Eq,
    /// `ne`
    NotEq,
    /// `gt`
    GreaterThan,
    /// `ge`
    GreaterThanOrEqual,
    /// `lt`
    LessThan,
    /// `le`
    LessThanOrEqual,

    // Logical
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,

    // Delimiters
    /// `(`
    Lparen,
    /// `)`
    Rparen,
    /// `{`
    Lbrace,
    /// `}`
    Rbrace,
}

impl TokenKind {
    /// Canonical spelling of the kind.
    ///
    /// Keywords and delimiters return the exact source text; the remaining
    /// kinds return their kind name.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "Illegal",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "Ident",
            TokenKind::Int => "Int",
            TokenKind::String => "String",
            TokenKind::Null => "null",
            TokenKind::Eq => "eq",
            TokenKind::NotEq => "ne",
            TokenKind::GreaterThan => "gt",
            TokenKind::GreaterThanOrEqual => "ge",
            TokenKind::LessThan => "lt",
            TokenKind::LessThanOrEqual => "le",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Lparen => "(",
            TokenKind::Rparen => ")",
            TokenKind::Lbrace => "{",
            TokenKind::Rbrace => "}",
        }
    }

    /// Look up a keyword. Matching is case-sensitive: `Null` and `NULL` are
    /// identifiers.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "null" => Some(TokenKind::Null),
            "and" => Some(TokenKind::And),
            "or" => Some(TokenKind::Or),
            "not" => Some(TokenKind::Not),
            "eq" => Some(TokenKind::Eq),
            "ne" => Some(TokenKind::NotEq),
            "gt" => Some(TokenKind::GreaterThan),
            "ge" => Some(TokenKind::GreaterThanOrEqual),
            "lt" => Some(TokenKind::LessThan),
            "le" => Some(TokenKind::LessThanOrEqual),
            _ => None,
        }
    }

    /// Comparison operator for this kind, if it is one.
    pub fn comparison(self) -> Option<ComparisonOperator> {
        match self {
            TokenKind::Eq => Some(ComparisonOperator::Eq),
            TokenKind::NotEq => Some(ComparisonOperator::Ne),
            TokenKind::GreaterThan => Some(ComparisonOperator::Gt),
            TokenKind::GreaterThanOrEqual => Some(ComparisonOperator::Ge),
            TokenKind::LessThan => Some(ComparisonOperator::Lt),
            TokenKind::LessThanOrEqual => Some(ComparisonOperator::Le),
            _ => None,
        }
    }

    /// True for kinds that have a prefix parse rule.
    pub fn starts_expression(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Int
                | TokenKind::String
                | TokenKind::Null
                | TokenKind::Not
                | TokenKind::Lparen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token produced by the [`Lexer`](crate::Lexer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text for identifiers, numbers and strings (strings unquoted);
    /// canonical spelling for keywords and delimiters; empty for EOF.
    pub literal: String,
    /// Byte offset of the token's first character in the input.
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            literal: literal.into(),
            position,
        }
    }

    /// Token whose literal is the kind's own spelling.
    pub fn from_kind(kind: TokenKind, position: usize) -> Self {
        let literal = match kind {
            TokenKind::Eof => "",
            kind => kind.as_str(),
        };
        Token::new(kind, literal, position)
    }

    pub fn eof(position: usize) -> Self {
        Token::new(TokenKind::Eof, "", position)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

//! Parse diagnostics.
//!
//! The parser never stops at the first problem. Each problem is recorded as
//! a [`Diagnostic`] tied to the token it concerns, and all diagnostics of a
//! parse are aggregated into one [`ParseError`].

use thiserror::Error;

use crate::ast::{ComparisonOperator, Expression, Token, TokenKind};

/// What went wrong. The `Display` form is the diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    // Lexical
    #[error("illegal token {0:?}")]
    IllegalToken(String),

    // Structural
    #[error("no prefix parse function for {0:?}")]
    NoPrefixParse(String),

    #[error("expected next token to be \"{expected}\", got {actual:?}")]
    ExpectedToken { expected: TokenKind, actual: String },

    #[error("expected next token to be an operator, got {0:?}")]
    ExpectedOperator(String),

    #[error("unexpected token {0:?}")]
    UnexpectedToken(String),

    #[error("missing expression after not")]
    MissingNotOperand,

    #[error("expression is nested too deeply")]
    NestingTooDeep,

    // Position rules
    #[error("'{0}' can not be used as a standalone expression")]
    StandaloneExpression(String),

    #[error("'not' can not be applied to a value")]
    NotAppliedToValue,

    #[error("grouped value is not a valid expression")]
    GroupedValue,

    #[error("left side of comparison must be an identifier")]
    LeftSideNotIdentifier,

    #[error("identifier can not be used as value")]
    IdentifierAsValue,

    #[error("invalid value expression")]
    InvalidValueExpression,

    #[error("invalid value token {0:?}")]
    InvalidValueToken(String),

    // Null rules
    #[error("null cannot be used with comparison operator \"{0}\"")]
    NullWithComparison(ComparisonOperator),
}

/// A single problem found while parsing, tied to a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}, at position {}", .token.position)]
pub struct Diagnostic {
    pub token: Token,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(token: Token, kind: DiagnosticKind) -> Self {
        Diagnostic { token, kind }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn position(&self) -> usize {
        self.token.position
    }
}

/// Every diagnostic of one parse, in source order.
///
/// The best-effort tree built alongside the diagnostics is kept and can be
/// inspected with [`ParseError::partial`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join(.diagnostics))]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
    partial: Option<Expression>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>, partial: Option<Expression>) -> Self {
        ParseError {
            diagnostics,
            partial,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn partial(&self) -> Option<&Expression> {
        self.partial.as_ref()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

fn join(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

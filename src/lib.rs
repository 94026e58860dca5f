pub mod ast;
pub mod cli;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{ComparisonOperator, Expression, FilterExpr, Identifier, Token, TokenKind, Value};
pub use error::{Diagnostic, DiagnosticKind, ParseError};
pub use lexer::Lexer;
pub use output::{expression_to_json, to_json, to_json_pretty};
pub use parser::Parser;

/// Parse a filter expression.
///
/// An empty string is "no filter" and yields `Ok(None)`. Any diagnostic makes
/// the parse fail; the error still carries the best-effort tree.
///
/// ```
/// let expr = qrius::parse("age gt 0 and age le 18").unwrap().unwrap();
/// assert_eq!(expr.to_string(), "((age gt 0) and (age le 18))");
///
/// assert!(qrius::parse("age gt null").is_err());
/// assert_eq!(qrius::parse("").unwrap(), None);
/// ```
pub fn parse(input: &str) -> Result<Option<Expression>, ParseError> {
    Parser::new(Lexer::new(input)).finish()
}

/// Parse a filter that is known to be valid.
///
/// # Panics
///
/// Panics if `input` does not parse. The panic payload is the [`ParseError`]
/// itself, so `catch_unwind` callers can downcast it. Do not use on untrusted
/// input.
pub fn must_parse(input: &str) -> Option<Expression> {
    match parse(input) {
        Ok(expr) => expr,
        Err(err) => std::panic::panic_any(err),
    }
}

use crate::{
    ast::{Expression, FilterExpr, Identifier, Precedence, Token, TokenKind, Value},
    error::{Diagnostic, DiagnosticKind, ParseError},
    lexer::Lexer,
};

/// Deepest run of `not` and parentheses accepted.
pub const MAX_NESTING: usize = 128;

/// Tallest tree accepted, counting every operator between the root and a leaf.
pub const MAX_HEIGHT: usize = 1024;

/// Precedence-climbing parser for filter expressions.
///
/// The parser pulls tokens from the lexer through a two-token window
/// (`current`, `peek`) and validates as it builds: identifiers only on the
/// left of a comparison, literals only on the right, `null` only with
/// `eq`/`ne`. Problems are recorded as diagnostics and parsing carries on,
/// so one pass reports everything wrong with the input.
///
/// Input nested past [`MAX_NESTING`] or [`MAX_HEIGHT`] is cut off with a
/// single diagnostic; nothing after that point is examined.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    diagnostics: Vec<Diagnostic>,
    nesting: usize,
    height: usize,
    cut_off: bool,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
            diagnostics: Vec::new(),
            nesting: 0,
            height: 0,
            cut_off: false,
        }
    }

    /// Diagnostics recorded so far. Sorted by position once [`Parser::parse`]
    /// returns.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Parse the whole input.
    ///
    /// Returns `None` without diagnostics for empty input. Otherwise returns
    /// the best-effort tree; check [`Parser::diagnostics`] before trusting it.
    pub fn parse(&mut self) -> Option<Expression> {
        if self.current.is_eof() && self.peek.is_eof() {
            return None;
        }

        let expr = self.parse_expression(Precedence::Lowest);
        if !self.cut_off {
            self.check_bare_operand(expr.as_ref());
            self.drain();
        }

        // Checks on a finished subtree cite tokens inside it.
        self.diagnostics.sort_by_key(Diagnostic::position);
        tracing::trace!(diagnostics = self.diagnostics.len(), "parsed filter");
        expr
    }

    /// Parse and hand back the tree, or every diagnostic if there were any.
    pub fn finish(mut self) -> Result<Option<Expression>, ParseError> {
        let expr = self.parse();
        if self.diagnostics.is_empty() {
            Ok(expr)
        } else {
            Err(ParseError::new(self.diagnostics, expr))
        }
    }

    /// A lone identifier or literal is not a filter.
    fn check_bare_operand(&mut self, expr: Option<&Expression>) {
        let bare_operand = expr
            .and_then(Expression::operand_text)
            .map(str::to_string);
        if let Some(text) = bare_operand {
            if self.peek.is_eof() {
                self.error(
                    self.current.clone(),
                    DiagnosticKind::StandaloneExpression(text),
                );
            } else {
                self.advance();
                let literal = self.current.literal.clone();
                let kind = match self.current.kind {
                    TokenKind::Illegal => DiagnosticKind::IllegalToken(literal),
                    _ => DiagnosticKind::ExpectedOperator(literal),
                };
                self.error(self.current.clone(), kind);
            }
        }
    }

    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    fn check_peek(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Consume the lookahead token if it is `kind`, otherwise record a
    /// diagnostic against it and leave it in place.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.check_peek(kind) {
            self.advance();
            return true;
        }

        let actual = self.peek.literal.clone();
        self.error(
            self.peek.clone(),
            DiagnosticKind::ExpectedToken {
                expected: kind,
                actual,
            },
        );
        false
    }

    fn error(&mut self, token: Token, kind: DiagnosticKind) {
        tracing::debug!(position = token.position, literal = %token.literal, "{kind}");
        self.diagnostics.push(Diagnostic::new(token, kind));
    }

    /// Enter a `not` or a parenthesized group.
    fn nest(&mut self) -> bool {
        if self.cut_off || self.nesting >= MAX_NESTING || self.height >= MAX_HEIGHT {
            self.stop(self.current.clone());
            return false;
        }
        self.nesting += 1;
        self.height += 1;
        true
    }

    fn unnest(&mut self) {
        self.nesting -= 1;
        self.height -= 1;
    }

    /// Take one more infix operator at the current level.
    fn grow(&mut self) -> bool {
        if self.cut_off || self.height >= MAX_HEIGHT {
            self.stop(self.peek.clone());
            return false;
        }
        self.height += 1;
        true
    }

    fn stop(&mut self, token: Token) {
        if !self.cut_off {
            self.cut_off = true;
            self.error(token, DiagnosticKind::NestingTooDeep);
        }
    }

    /// Report every token left after a complete expression.
    fn drain(&mut self) {
        while !self.peek.is_eof() {
            self.advance();
            let literal = self.current.literal.clone();
            let kind = match self.current.kind {
                TokenKind::Illegal => DiagnosticKind::IllegalToken(literal),
                _ => DiagnosticKind::UnexpectedToken(literal),
            };
            self.error(self.current.clone(), kind);
        }
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let left_token = self.current.clone();
        let mut left = self.parse_prefix()?;
        let height = self.height;

        while !self.peek.is_eof() && precedence < Precedence::of(self.peek.kind) {
            if !self.grow() {
                break;
            }
            left = match self.peek.kind {
                TokenKind::And => {
                    self.advance();
                    let right = self.parse_infix_operand();
                    combine(left, right, Expression::and)
                }
                TokenKind::Or => {
                    self.advance();
                    let right = self.parse_infix_operand();
                    combine(left, right, Expression::or)
                }
                kind => match kind.comparison() {
                    Some(_) => {
                        self.advance();
                        self.parse_comparison(left, &left_token)
                    }
                    None => break,
                },
            };
        }

        self.height = height;
        left
    }

    /// Prefix step. The outer `None` means no expression could start here and
    /// the infix loop must not run; the inner `None` is a subtree that was
    /// parsed but abandoned.
    fn parse_prefix(&mut self) -> Option<Option<Expression>> {
        let expr = match self.current.kind {
            TokenKind::Ident => Expression::identifier(self.current.literal.clone()),
            TokenKind::Int => Value::integer(self.current.literal.clone()).into(),
            TokenKind::String => Value::string(self.current.literal.clone()).into(),
            TokenKind::Null => Value::Null.into(),
            TokenKind::Not => return Some(self.parse_not()),
            TokenKind::Lparen => return Some(self.parse_group()),
            TokenKind::Illegal => {
                let literal = self.current.literal.clone();
                self.error(self.current.clone(), DiagnosticKind::IllegalToken(literal));
                return None;
            }
            _ => {
                let literal = self.current.literal.clone();
                self.error(self.current.clone(), DiagnosticKind::NoPrefixParse(literal));
                return None;
            }
        };
        Some(Some(expr))
    }

    fn parse_not(&mut self) -> Option<Expression> {
        if !self.nest() {
            return None;
        }
        self.advance();
        let has_prefix = self.current.kind.starts_expression();
        let right = self.parse_expression(Precedence::Prefix);
        self.unnest();

        match &right {
            _ if self.cut_off => {}
            Some(expr) if expr.is_value() => {
                self.error(self.current.clone(), DiagnosticKind::NotAppliedToValue)
            }
            None if !has_prefix => {
                self.error(self.current.clone(), DiagnosticKind::MissingNotOperand)
            }
            _ => {}
        }

        Some(Expression::not(right.unwrap_or(Expression::Missing)))
    }

    /// `( expression )`. A parenthesized literal yields no expression at all.
    fn parse_group(&mut self) -> Option<Expression> {
        if !self.nest() {
            return None;
        }
        self.advance();
        let inner = self.parse_expression(Precedence::Lowest);
        self.unnest();
        if self.cut_off {
            return inner;
        }
        self.expect_peek(TokenKind::Rparen);

        if inner.as_ref().is_some_and(Expression::is_value) {
            self.error(self.current.clone(), DiagnosticKind::GroupedValue);
            return None;
        }
        inner
    }

    /// Right operand of `and`/`or`, parsed at the operator's own precedence so
    /// chains of the same operator group to the left.
    fn parse_infix_operand(&mut self) -> Option<Expression> {
        let precedence = Precedence::of(self.current.kind);
        self.advance();
        self.parse_expression(precedence)
    }

    fn parse_comparison(
        &mut self,
        left: Option<Expression>,
        left_token: &Token,
    ) -> Option<Expression> {
        let operator = self.current.kind.comparison()?;

        let left = match left {
            Some(Expression::Identifier(ident)) => ident,
            _ => {
                self.error(left_token.clone(), DiagnosticKind::LeftSideNotIdentifier);
                Identifier::new("")
            }
        };

        self.advance();
        let right = self.parse_value().unwrap_or(Value::Missing);

        if right.is_null() && operator.is_ordering() {
            self.error(
                self.current.clone(),
                DiagnosticKind::NullWithComparison(operator),
            );
        }

        Some(
            FilterExpr {
                left,
                operator,
                right,
            }
            .into(),
        )
    }

    /// Right side of a comparison: a literal, never an identifier or group.
    fn parse_value(&mut self) -> Option<Value> {
        match self.current.kind {
            TokenKind::Int => Some(Value::integer(self.current.literal.clone())),
            TokenKind::String => Some(Value::string(self.current.literal.clone())),
            TokenKind::Null => Some(Value::Null),
            TokenKind::Ident => {
                self.error(self.current.clone(), DiagnosticKind::IdentifierAsValue);
                None
            }
            TokenKind::Lparen => {
                if !self.nest() {
                    return None;
                }
                let open = self.current.clone();
                self.advance();
                let inner = self.parse_expression(Precedence::Lowest);
                self.unnest();
                if !self.cut_off {
                    self.expect_peek(TokenKind::Rparen);
                    self.error(open, DiagnosticKind::InvalidValueExpression);
                }

                match inner {
                    Some(Expression::Value(value)) => Some(value),
                    _ => None,
                }
            }
            _ => {
                let literal = self.current.literal.clone();
                self.error(
                    self.current.clone(),
                    DiagnosticKind::InvalidValueToken(literal),
                );
                None
            }
        }
    }
}

/// Join two operands, standing in [`Expression::Missing`] for an abandoned
/// side so the surviving one stays in the tree.
fn combine(
    left: Option<Expression>,
    right: Option<Expression>,
    build: fn(Expression, Expression) -> Expression,
) -> Option<Expression> {
    match (left, right) {
        (None, None) => None,
        (left, right) => Some(build(
            left.unwrap_or(Expression::Missing),
            right.unwrap_or(Expression::Missing),
        )),
    }
}

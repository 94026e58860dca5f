use std::fmt;

use crate::ast::ComparisonOperator;

/// Abstract Syntax Tree node representing a parsed filter.
///
/// `Display` renders the canonical form: every compound node is wrapped in
/// parentheses and strings are single-quoted, so `age gt 0 and name eq 'x'`
/// renders as `((age gt 0) and (name eq 'x'))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Field name
    ///
    /// # Example
    /// ```text
    /// user.name
    /// ```
    Identifier(Identifier),

    /// Literal value: integer, string or null
    Value(Value),

    /// Negation (`not`)
    ///
    /// # Example
    /// ```text
    /// not name eq 'john'
    /// ```
    Not(Box<Expression>),

    /// Logical AND (`and`)
    And(Box<Expression>, Box<Expression>),

    /// Logical OR (`or`)
    Or(Box<Expression>, Box<Expression>),

    /// Comparison of a field against a value
    ///
    /// # Example
    /// ```text
    /// age ge 18
    /// ```
    Filter(FilterExpr),

    /// Stand-in for an operand that could not be parsed. Only appears in
    /// trees that come with diagnostics; renders as nothing.
    Missing,
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn not(right: Expression) -> Self {
        Expression::Not(Box::new(right))
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    pub fn filter(left: impl Into<String>, operator: ComparisonOperator, right: Value) -> Self {
        Expression::Filter(FilterExpr {
            left: Identifier::new(left),
            operator,
            right,
        })
    }

    /// True for integer, string and null literals.
    pub fn is_value(&self) -> bool {
        matches!(self, Expression::Value(_))
    }

    /// Raw source text of a node that is not boolean-shaped, i.e. a literal
    /// or an identifier. Strings come back unquoted.
    pub fn operand_text(&self) -> Option<&str> {
        match self {
            Expression::Identifier(ident) => Some(ident.name()),
            Expression::Value(value) => Some(value.text()),
            _ => None,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::Value(value) => write!(f, "{value}"),
            Expression::Not(right) => write!(f, "(not {right})"),
            Expression::And(left, right) => write!(f, "({left} and {right})"),
            Expression::Or(left, right) => write!(f, "({left} or {right})"),
            Expression::Filter(filter) => write!(f, "{filter}"),
            Expression::Missing => Ok(()),
        }
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Expression::Value(value)
    }
}

impl From<FilterExpr> for Expression {
    fn from(filter: FilterExpr) -> Self {
        Expression::Filter(filter)
    }
}

/// Field name on the left side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Literal legal on the right side of a comparison.
///
/// Identifiers are deliberately absent: `name eq other` is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Decimal digits exactly as written, e.g. `007`
    Integer(String),

    /// Unquoted string content
    String(String),

    /// `null`, only legal with `eq` and `ne`
    Null,

    /// Stand-in for a comparison value that could not be parsed
    Missing,
}

impl Value {
    pub fn integer(digits: impl Into<String>) -> Self {
        Value::Integer(digits.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Source text without quoting.
    pub fn text(&self) -> &str {
        match self {
            Value::Integer(digits) => digits,
            Value::String(text) => text,
            Value::Null => "null",
            Value::Missing => "",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(digits) => f.write_str(digits),
            Value::String(text) => write!(f, "'{text}'"),
            Value::Null => f.write_str("null"),
            Value::Missing => Ok(()),
        }
    }
}

/// `<field> <operator> <value>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr {
    pub left: Identifier,
    pub operator: ComparisonOperator,
    pub right: Value,
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

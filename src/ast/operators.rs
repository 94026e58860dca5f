use std::fmt;

use crate::ast::TokenKind;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// Equal (`eq`)
    Eq,
    /// Not equal (`ne`)
    Ne,
    /// Greater than (`gt`)
    Gt,
    /// Greater than or equal (`ge`)
    Ge,
    /// Less than (`lt`)
    Lt,
    /// Less than or equal (`le`)
    Le,
}

impl ComparisonOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "eq",
            ComparisonOperator::Ne => "ne",
            ComparisonOperator::Gt => "gt",
            ComparisonOperator::Ge => "ge",
            ComparisonOperator::Lt => "lt",
            ComparisonOperator::Le => "le",
        }
    }

    /// `gt`, `ge`, `lt` and `le`. These order their operands and so reject
    /// `null`.
    pub const fn is_ordering(self) -> bool {
        matches!(
            self,
            ComparisonOperator::Gt
                | ComparisonOperator::Ge
                | ComparisonOperator::Lt
                | ComparisonOperator::Le
        )
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binding strength, lowest first.
///
/// `a eq 1 or b eq 2 and c eq 3` groups as `(a eq 1) or ((b eq 2) and (c eq 3))`
/// and `not a eq 1 and b eq 2` as `(not (a eq 1)) and (b eq 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `or`
    Or,
    /// `and`
    And,
    /// prefix `not`
    Prefix,
    /// `eq`, `ne`, `gt`, `ge`, `lt`, `le`
    Compare,
}

impl Precedence {
    /// Infix precedence of a token kind. Kinds that are not infix operators
    /// are `Lowest`, which ends any infix loop.
    pub const fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Or => Precedence::Or,
            TokenKind::And => Precedence::And,
            TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::GreaterThan
            | TokenKind::GreaterThanOrEqual
            | TokenKind::LessThan
            | TokenKind::LessThanOrEqual => Precedence::Compare,
            _ => Precedence::Lowest,
        }
    }
}

//! JSON rendering of filter trees, tokens and diagnostics.
//!
//! The canonical text form (`Display`) is what filters compare by; the JSON
//! form is for tools that want to walk the tree without linking this crate,
//! e.g. a translator to a storage-engine query.
//!
//! # Examples
//!
//! ```
//! use qrius::output::to_json;
//!
//! let expr = qrius::must_parse("age ge 18").unwrap();
//! assert_eq!(
//!     to_json(&expr),
//!     r#"{"field":"age","operator":"ge","type":"filter","value":{"type":"integer","value":18}}"#
//! );
//! ```

use serde_json::{Value as Json, json};

use crate::{
    ast::{Expression, Token, Value},
    error::Diagnostic,
};

/// Compact JSON for an expression.
pub fn to_json(expr: &Expression) -> String {
    expression_to_json(expr).to_string()
}

/// JSON for an expression with 2-space indentation.
pub fn to_json_pretty(expr: &Expression) -> String {
    let json = expression_to_json(expr);
    serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
}

pub fn expression_to_json(expr: &Expression) -> Json {
    match expr {
        Expression::Identifier(ident) => json!({"type": "identifier", "name": ident.name()}),
        Expression::Value(value) => value_to_json(value),
        Expression::Not(right) => json!({"type": "not", "operand": expression_to_json(right)}),
        Expression::And(left, right) => json!({
            "type": "and",
            "left": expression_to_json(left),
            "right": expression_to_json(right),
        }),
        Expression::Or(left, right) => json!({
            "type": "or",
            "left": expression_to_json(left),
            "right": expression_to_json(right),
        }),
        Expression::Filter(filter) => json!({
            "type": "filter",
            "field": filter.left.name(),
            "operator": filter.operator.as_str(),
            "value": value_to_json(&filter.right),
        }),
        Expression::Missing => json!({"type": "missing"}),
    }
}

/// Integers become JSON numbers while they fit in a `u64`; longer digit runs
/// are kept as strings so no precision is lost.
pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Integer(digits) => match digits.parse::<u64>() {
            Ok(n) => json!({"type": "integer", "value": n}),
            Err(_) => json!({"type": "integer", "value": digits}),
        },
        Value::String(text) => json!({"type": "string", "value": text}),
        Value::Null => json!({"type": "null"}),
        Value::Missing => json!({"type": "missing"}),
    }
}

pub fn token_to_json(token: &Token) -> Json {
    json!({
        "kind": token.kind.as_str(),
        "literal": token.literal,
        "position": token.position,
    })
}

pub fn tokens_to_json(tokens: &[Token]) -> Json {
    Json::Array(tokens.iter().map(token_to_json).collect())
}

pub fn diagnostics_to_json(diagnostics: &[Diagnostic]) -> Json {
    diagnostics
        .iter()
        .map(|d| {
            json!({
                "message": d.message(),
                "position": d.position(),
                "token": token_to_json(&d.token),
            })
        })
        .collect()
}

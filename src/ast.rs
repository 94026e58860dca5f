//! # Qrius Filter Language - Abstract Syntax Tree
//!
//! This module defines the tokens and tree nodes of the qrius filter
//! language, a small boolean query language for selecting records by field:
//!
//! ```text
//! name eq 'John' or age gt 0 and age le 18
//! ```
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes, values and canonical rendering
//! - **[operators]** - Comparison operators and the precedence table
//!
//! ## Core Concepts
//!
//! ### Comparisons
//!
//! A comparison always has a field on the left and a literal on the right:
//!
//! ```text
//! age ge 18
//! name eq 'John'
//! deleted_at eq null
//! ```
//!
//! `null` only pairs with `eq` and `ne`.
//!
//! ### Combinators
//!
//! `or` < `and` < `not` < comparison, from loosest to tightest. Parentheses
//! group, but a parenthesized literal such as `(null)` is not a filter.
//!
//! ### Canonical Form
//!
//! Every tree renders back to text with explicit grouping:
//!
//! ```text
//! not name eq 'john' and age le 50
//! => ((not (name eq 'john')) and (age le 50))
//! ```
pub mod tokens;
pub mod expressions;
pub mod operators;

pub use tokens::{Token, TokenKind};
pub use expressions::{Expression, FilterExpr, Identifier, Value};
pub use operators::{ComparisonOperator, Precedence};

//! CLI support for qrius
//!
//! Provides programmatic access to the `qrius` commands so they can be
//! embedded in other tools and tested without spawning a process.

mod check;
mod docs;

pub use check::{CheckOptions, CheckResult, execute_check, execute_tokens};
pub use docs::get_docs;

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Filter did not parse
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    /// JSON serialization failed
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No filter argument and nothing on stdin
    #[error("No filter provided. Pass one as an argument or pipe it to stdin.")]
    NoInput,
}

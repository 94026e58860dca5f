//! Parse filters from the command line

use super::CliError;
use crate::{Lexer, output};

/// Options for the check and tokens commands
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The filter to parse
    pub filter: Option<String>,
    /// Emit JSON instead of the canonical text form
    pub json: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Result of a check operation
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// The filter was empty
    Empty,
    /// Parsed successfully; rendered output ready to print
    Success(String),
    /// Diagnostics as JSON, only produced with `json` set
    Diagnostics(String),
}

impl CheckOptions {
    fn filter(&self) -> Result<&str, CliError> {
        self.filter.as_deref().ok_or(CliError::NoInput)
    }

    fn render(&self, json: &serde_json::Value) -> Result<String, CliError> {
        Ok(if self.pretty {
            serde_json::to_string_pretty(json)?
        } else {
            serde_json::to_string(json)?
        })
    }
}

/// Parse the filter and render it.
///
/// Without `json`, diagnostics surface as [`CliError::Parse`]. With `json`
/// they are returned as a [`CheckResult::Diagnostics`] document so callers
/// can print them to stdout.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    // Trailing newline from piped input is not part of the filter.
    let filter = options.filter()?.trim_end_matches(['\r', '\n']);

    match crate::parse(filter) {
        Ok(None) => Ok(CheckResult::Empty),
        Ok(Some(expr)) if options.json => Ok(CheckResult::Success(if options.pretty {
            output::to_json_pretty(&expr)
        } else {
            output::to_json(&expr)
        })),
        Ok(Some(expr)) => Ok(CheckResult::Success(expr.to_string())),
        Err(err) if options.json => {
            let json = output::diagnostics_to_json(err.diagnostics());
            Ok(CheckResult::Diagnostics(options.render(&json)?))
        }
        Err(err) => Err(CliError::Parse(err)),
    }
}

/// Render the token stream of the filter, one token per line or as JSON.
pub fn execute_tokens(options: &CheckOptions) -> Result<String, CliError> {
    let filter = options.filter()?.trim_end_matches(['\r', '\n']);
    let tokens = Lexer::tokenize(filter);

    if options.json {
        return options.render(&output::tokens_to_json(&tokens));
    }

    Ok(tokens
        .iter()
        .map(|t| format!("{:>4}  {:<8} {:?}", t.position, t.kind.as_str(), t.literal))
        .collect::<Vec<_>>()
        .join("\n"))
}

//! Errors raised by the skeleton tokenizers and interpreters.

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Failure while tokenizing or interpreting a number or date-time skeleton.
///
/// The parser wraps these into a [`crate::ParseError`]; the skeleton error is
/// kept as the error's cause.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SkeletonError {
    #[error("number skeleton cannot be empty")]
    #[diagnostic(code(icu::skeleton::empty))]
    Empty,

    #[error("invalid number skeleton token `{token}`: options cannot be empty")]
    #[diagnostic(code(icu::skeleton::empty_option))]
    EmptyOption { token: String },

    #[error("`{stem}` requires an option")]
    #[diagnostic(code(icu::skeleton::missing_option))]
    MissingOption { stem: String },

    #[error("`{stem}` stems only accept a single optional option, found {count}")]
    #[diagnostic(code(icu::skeleton::invalid_option))]
    TooManyOptions { stem: String, count: usize },

    #[error("invalid option `{option}` for `{stem}`: {reason}")]
    #[diagnostic(code(icu::skeleton::invalid_option))]
    InvalidOption {
        stem: String,
        option: String,
        reason: &'static str,
    },

    #[error("malformed concise scientific/engineering notation `{stem}`")]
    #[diagnostic(code(icu::skeleton::malformed_notation))]
    MalformedNotation { stem: String },

    #[error("{message}")]
    #[diagnostic(code(icu::skeleton::unsupported_field))]
    UnsupportedField { field: char, message: &'static str },

    #[error("unterminated quoted literal in date-time skeleton `{skeleton}`")]
    #[diagnostic(code(icu::skeleton::unclosed_quote))]
    UnclosedQuote { skeleton: String },
}

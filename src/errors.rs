//! Error handling for message parsing
//!
//! Every failure is a single [`ParseError`]: a closed [`ErrorKind`], the
//! message being parsed, the location of the problem, and an optional cause.
//! Parsing is fail-fast, so callers always get exactly one error.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceCode, SourceSpan};
use serde::Serialize;
use thiserror::Error;

use crate::ast::{Element, Location};
use crate::skeleton::SkeletonError;

/// Result of parsing one message: the AST or the first error encountered.
pub type ParseResult = Result<Vec<Element>, ParseError>;

// ============================================================================
// ERROR KINDS
// ============================================================================

/// All error conditions, with stable numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ErrorKind {
    /// Unexpected failure inside the parser, carried as the cause.
    Other = 0,

    // Arguments
    ExpectArgumentClosingBrace = 1,
    EmptyArgument = 2,
    MalformedArgument = 3,

    // Types and styles
    ExpectArgumentType = 4,
    InvalidArgumentType = 5,
    ExpectArgumentStyle = 6,

    // Skeletons
    InvalidNumberSkeleton = 7,
    InvalidDateTimeSkeleton = 8,
    ExpectNumberSkeleton = 9,
    ExpectDateTimeSkeleton = 10,
    UnclosedQuoteInArgumentStyle = 11,

    // Plural and select
    ExpectSelectArgumentOptions = 12,
    ExpectPluralArgumentOffsetValue = 13,
    InvalidPluralArgumentOffsetValue = 14,
    ExpectSelectArgumentSelector = 15,
    ExpectPluralArgumentSelector = 16,
    ExpectSelectArgumentSelectorFragment = 17,
    ExpectPluralArgumentSelectorFragment = 18,
    InvalidPluralArgumentSelector = 19,
    DuplicatePluralArgumentSelector = 20,
    DuplicateSelectArgumentSelector = 21,
    MissingOtherClause = 22,

    // Tags
    InvalidTag = 23,
    InvalidTagName = 24,
    UnmatchedClosingTag = 25,
    UnclosedTag = 26,

    /// Tags or plural/select branches nested deeper than the configured limit.
    ExceededMaxNestingDepth = 27,

    /// A parser instance was asked to parse a second time.
    IllegalParserUsage = 28,
}

impl ErrorKind {
    /// Stable name, e.g. `"UNCLOSED_TAG"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Other => "OTHER",
            Self::ExpectArgumentClosingBrace => "EXPECT_ARGUMENT_CLOSING_BRACE",
            Self::EmptyArgument => "EMPTY_ARGUMENT",
            Self::MalformedArgument => "MALFORMED_ARGUMENT",
            Self::ExpectArgumentType => "EXPECT_ARGUMENT_TYPE",
            Self::InvalidArgumentType => "INVALID_ARGUMENT_TYPE",
            Self::ExpectArgumentStyle => "EXPECT_ARGUMENT_STYLE",
            Self::InvalidNumberSkeleton => "INVALID_NUMBER_SKELETON",
            Self::InvalidDateTimeSkeleton => "INVALID_DATE_TIME_SKELETON",
            Self::ExpectNumberSkeleton => "EXPECT_NUMBER_SKELETON",
            Self::ExpectDateTimeSkeleton => "EXPECT_DATE_TIME_SKELETON",
            Self::UnclosedQuoteInArgumentStyle => "UNCLOSED_QUOTE_IN_ARGUMENT_STYLE",
            Self::ExpectSelectArgumentOptions => "EXPECT_SELECT_ARGUMENT_OPTIONS",
            Self::ExpectPluralArgumentOffsetValue => "EXPECT_PLURAL_ARGUMENT_OFFSET_VALUE",
            Self::InvalidPluralArgumentOffsetValue => "INVALID_PLURAL_ARGUMENT_OFFSET_VALUE",
            Self::ExpectSelectArgumentSelector => "EXPECT_SELECT_ARGUMENT_SELECTOR",
            Self::ExpectPluralArgumentSelector => "EXPECT_PLURAL_ARGUMENT_SELECTOR",
            Self::ExpectSelectArgumentSelectorFragment => {
                "EXPECT_SELECT_ARGUMENT_SELECTOR_FRAGMENT"
            }
            Self::ExpectPluralArgumentSelectorFragment => {
                "EXPECT_PLURAL_ARGUMENT_SELECTOR_FRAGMENT"
            }
            Self::InvalidPluralArgumentSelector => "INVALID_PLURAL_ARGUMENT_SELECTOR",
            Self::DuplicatePluralArgumentSelector => "DUPLICATE_PLURAL_ARGUMENT_SELECTOR",
            Self::DuplicateSelectArgumentSelector => "DUPLICATE_SELECT_ARGUMENT_SELECTOR",
            Self::MissingOtherClause => "MISSING_OTHER_CLAUSE",
            Self::InvalidTag => "INVALID_TAG",
            Self::InvalidTagName => "INVALID_TAG_NAME",
            Self::UnmatchedClosingTag => "UNMATCHED_CLOSING_TAG",
            Self::UnclosedTag => "UNCLOSED_TAG",
            Self::ExceededMaxNestingDepth => "EXCEEDED_MAX_NESTING_DEPTH",
            Self::IllegalParserUsage => "ILLEGAL_PARSER_USAGE",
        }
    }

    /// Numeric code. `OTHER` is 0.
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// `false` for kinds that do not describe a problem in the message text.
    pub const fn is_syntax_error(&self) -> bool {
        !matches!(self, Self::Other | Self::IllegalParserUsage)
    }

    /// Human-readable description used as the error's display text.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Other => "unexpected internal failure",
            Self::ExpectArgumentClosingBrace => "expected `}` to close the argument",
            Self::EmptyArgument => "argument is empty",
            Self::MalformedArgument => "malformed argument",
            Self::ExpectArgumentType => "expected an argument type",
            Self::InvalidArgumentType => "invalid argument type",
            Self::ExpectArgumentStyle => "expected an argument style",
            Self::InvalidNumberSkeleton => "invalid number skeleton",
            Self::InvalidDateTimeSkeleton => "invalid date-time skeleton",
            Self::ExpectNumberSkeleton => "expected a number skeleton after `::`",
            Self::ExpectDateTimeSkeleton => "expected a date-time skeleton after `::`",
            Self::UnclosedQuoteInArgumentStyle => "unclosed quote in argument style",
            Self::ExpectSelectArgumentOptions => "expected options after the argument type",
            Self::ExpectPluralArgumentOffsetValue => "expected an integer offset value",
            Self::InvalidPluralArgumentOffsetValue => "offset value is out of range",
            Self::ExpectSelectArgumentSelector => "expected a select selector",
            Self::ExpectPluralArgumentSelector => "expected a plural selector",
            Self::ExpectSelectArgumentSelectorFragment => "expected `{` to open the select branch",
            Self::ExpectPluralArgumentSelectorFragment => "expected `{` to open the plural branch",
            Self::InvalidPluralArgumentSelector => "exact-match selector value is out of range",
            Self::DuplicatePluralArgumentSelector => "duplicate plural selector",
            Self::DuplicateSelectArgumentSelector => "duplicate select selector",
            Self::MissingOtherClause => "missing `other` clause",
            Self::InvalidTag => "invalid tag",
            Self::InvalidTagName => "invalid tag name",
            Self::UnmatchedClosingTag => "closing tag does not match any opening tag",
            Self::UnclosedTag => "tag is never closed",
            Self::ExceededMaxNestingDepth => "message is nested too deeply",
            Self::IllegalParserUsage => "a parser instance can only be used once",
        }
    }

    fn help(&self) -> Option<&'static str> {
        match self {
            Self::MissingOtherClause => Some("add an `other {...}` branch"),
            Self::MalformedArgument => {
                Some("argument names cannot contain whitespace or syntax characters")
            }
            Self::InvalidArgumentType => {
                Some("use one of number, date, time, plural, selectordinal, or select")
            }
            Self::UnclosedQuoteInArgumentStyle => Some("close the quoted text with `'`"),
            Self::IllegalParserUsage => Some("create a new parser for every message"),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// ============================================================================
// ERROR VALUE
// ============================================================================

/// Underlying failure wrapped by a [`ParseError`].
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "error", rename_all = "camelCase")]
pub enum ErrorCause {
    #[error(transparent)]
    Skeleton(#[from] SkeletonError),
    #[error("internal failure: {0}")]
    Panic(String),
}

/// The single error type produced by parsing and validation.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ErrorKind,
    /// The message that was being parsed.
    pub message: String,
    pub location: Location,
    #[source]
    pub cause: Option<ErrorCause>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            message: message.into(),
            location,
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<ErrorCause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Byte range of [`Self::location`] within [`Self::message`].
    pub fn byte_span(&self) -> SourceSpan {
        let start = utf16_to_byte_offset(&self.message, self.location.start.offset);
        let end = utf16_to_byte_offset(&self.message, self.location.end.offset);
        SourceSpan::from(start..end.max(start))
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("icu::parse::{}", self.kind.as_str().to_ascii_lowercase())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.kind
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.message)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.byte_span();
        let label = match &self.cause {
            Some(cause) => cause.to_string(),
            None => self.kind.description().to_string(),
        };
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(label),
            span,
        ))))
    }
}

/// Converts a UTF-16 offset into a byte offset, clamped to the message length.
fn utf16_to_byte_offset(message: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (index, ch) in message.char_indices() {
        if units >= utf16_offset {
            return index;
        }
        units += ch.len_utf16();
    }
    message.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Position;

    #[test]
    fn test_kind_names_and_codes() {
        assert_eq!(ErrorKind::UnclosedTag.as_str(), "UNCLOSED_TAG");
        assert_eq!(ErrorKind::ExpectArgumentClosingBrace.code(), 1);
        assert_eq!(ErrorKind::Other.code(), 0);
        assert!(!ErrorKind::IllegalParserUsage.is_syntax_error());
        assert!(ErrorKind::MissingOtherClause.is_syntax_error());
    }

    #[test]
    fn test_byte_span_accounts_for_surrogate_pairs() {
        let message = "😀{x";
        let start = Position {
            offset: 2,
            line: 1,
            column: 2,
        };
        let end = Position {
            offset: 4,
            line: 1,
            column: 4,
        };
        let error = ParseError::new(
            ErrorKind::ExpectArgumentClosingBrace,
            message,
            Location::new(start, end),
        );
        let span = error.byte_span();
        assert_eq!(span.offset(), 4);
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn test_cause_is_exposed_as_source() {
        let error = ParseError::new(ErrorKind::Other, "{n, number, ::x}", Location::default())
            .with_cause(SkeletonError::Empty);
        let source = std::error::Error::source(&error).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("number skeleton cannot be empty"));
    }
}

//! Message validation
//!
//! Parses a message with skeleton interpretation enabled and reports the
//! first problem. Unexpected panics inside the parser are reported as
//! [`ErrorKind::Other`] instead of unwinding into the caller.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::ast::{Location, Position};
use crate::errors::{ErrorCause, ErrorKind, ParseError};
use crate::syntax::parser::{parse, ParseOptions};

/// Validates `message`, returning `Ok(true)` when it parses cleanly.
///
/// # Examples
///
/// ```rust
/// use icu_messageformat::{validate, ErrorKind};
/// assert_eq!(validate("{price, number, ::currency/EUR}"), Ok(true));
///
/// let err = validate("{when, date, ::YYYY}").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::Other);
/// assert!(err.cause.is_some());
/// ```
pub fn validate(message: &str) -> Result<bool, ParseError> {
    let options = ParseOptions::default().with_should_parse_skeletons(true);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| parse(message, options)));

    match outcome {
        Ok(Ok(_)) => Ok(true),
        Ok(Err(err)) => {
            debug!(kind = err.kind.as_str(), "message is invalid");
            Err(err)
        }
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            warn!(%reason, "parser panicked");
            Err(ParseError::new(
                ErrorKind::Other,
                message,
                Location::point(Position::start()),
            )
            .with_cause(ErrorCause::Panic(reason)))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_message() {
        assert_eq!(validate("Hello, {name}!"), Ok(true));
    }

    #[test]
    fn test_syntax_error_surfaces_unchanged() {
        let err = validate("{n, plural, one{x}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpectArgumentClosingBrace);
        assert!(err.cause.is_none());
    }

    #[test]
    fn test_skeleton_failure_is_other_with_cause() {
        let err = validate("{n, number, ::currency}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Other);
        assert!(matches!(err.cause, Some(ErrorCause::Skeleton(_))));
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload = panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "boom");
    }
}

// tests/validate_tests.rs

use icu_messageformat::{validate, ErrorCause, ErrorKind};
use rstest::rstest;

#[rstest]
#[case("Hello, {name}!")]
#[case("{n, plural, =0{none} one{# item} other{# items}}")]
#[case("{price, number, ::currency/USD .00}")]
#[case("{when, date, ::yyyyMMMd} at {when, time, ::hhmm a}")]
#[case("<b>{g, select, other{x}}</b>")]
fn test_valid_messages(#[case] message: &str) {
    assert_eq!(validate(message), Ok(true));
}

#[test]
fn test_syntax_errors_keep_their_kind() {
    let err = validate("{n, plural, one{#} one{#} other{#}}").unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicatePluralArgumentSelector);
    assert!(err.cause.is_none());
}

#[rstest]
#[case("{n, number, ::currency}")]
#[case("{n, number, ::integer-width/##0}")]
#[case("{n, number, ::Eabc}")]
#[case("{d, date, ::jjmm}")]
#[case("{d, time, ::ZZZZ}")]
fn test_skeleton_failures_become_other(#[case] message: &str) {
    let err = validate(message).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Other, "{message}");
    assert!(matches!(err.cause, Some(ErrorCause::Skeleton(_))));
}

#[test]
fn test_unclosed_quote_in_date_style() {
    let err = validate("{d, date, ::yyyy 'at}").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnclosedQuoteInArgumentStyle);
}

//! Shared helpers for the integration tests.

#![allow(dead_code)]

use icu_messageformat::ast::Element;
use icu_messageformat::{parse, ParseError, ParseOptions};
use serde_json::Value;

/// Parses with default options, panicking with the error on failure.
pub fn parse_ok(message: &str) -> Vec<Element> {
    parse_with(message, ParseOptions::default())
}

pub fn parse_with(message: &str, options: ParseOptions) -> Vec<Element> {
    parse(message, options).unwrap_or_else(|err| panic!("failed to parse {message:?}: {err:?}"))
}

pub fn parse_err(message: &str) -> ParseError {
    match parse(message, ParseOptions::default()) {
        Ok(ast) => panic!("expected {message:?} to fail, got {ast:?}"),
        Err(err) => err,
    }
}

/// Serializes elements to JSON with every `location` field removed, so trees
/// parsed from differently-quoted sources can be compared.
pub fn strip_locations(elements: &[Element]) -> Value {
    let mut value = serde_json::to_value(elements).expect("AST serializes to JSON");
    remove_locations(&mut value);
    value
}

fn remove_locations(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.remove("location");
            map.values_mut().for_each(remove_locations);
        }
        Value::Array(items) => items.iter_mut().for_each(remove_locations),
        _ => {}
    }
}

//! Syntax module for ICU MessageFormat
//!
//! Scalar classification, the position-tracking cursor, and the recursive
//! descent parser that turns message text into [`crate::ast::Element`] trees.

pub mod classify;
pub(crate) mod cursor;
pub mod parser;

pub use parser::{parse, ParseOptions, Parser, DEFAULT_MAX_NESTING_DEPTH};

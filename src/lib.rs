//! ICU MessageFormat parsing
//!
//! Parses `{name, plural, one{...} other{...}}` style message patterns into an
//! AST, prints ASTs back to source, hoists selectors, and validates messages.
//!
//! ```rust
//! use icu_messageformat::{parse, print, ParseOptions};
//! let ast = parse("Hello, {name}!", ParseOptions::default()).unwrap();
//! assert_eq!(print(&ast), "Hello, {name}!");
//! ```

pub use crate::errors::{ErrorCause, ErrorKind, ParseError, ParseResult};
pub use crate::manipulator::{hoist_selectors, is_structurally_same, HoistError, StructuralMismatch};
pub use crate::printer::print;
pub use crate::syntax::{parse, ParseOptions, Parser};
pub use crate::validate::validate;

pub mod ast;
pub mod errors;
pub mod manipulator;
pub mod printer;
pub mod skeleton;
pub mod syntax;
pub mod validate;

//! AST module for ICU MessageFormat messages
//!
//! This module provides the element tree produced by the parser, together with
//! the source location types every node carries.

// ============================================================================
// IMPORTS
// ============================================================================

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::skeleton::datetime::DateTimeFormatOptions;
use crate::skeleton::number::NumberFormatOptions;

// ============================================================================
// SOURCE LOCATIONS
// ============================================================================

/// A point in the message source.
///
/// `offset` counts UTF-16 code units, so a scalar outside the Basic
/// Multilingual Plane advances it by 2. `line` and `column` are 1-based and
/// count scalar values.
///
/// # Examples
///
/// ```rust
/// use icu_messageformat::ast::Position;
/// let start = Position::start();
/// assert_eq!((start.offset, start.line, start.column), (0, 1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// The position of the first scalar of any input.
    pub const fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

/// Half-open source range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(end.offset >= start.offset);
        Self { start, end }
    }

    /// An empty range at `position`.
    pub fn point(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// SKELETONS AND STYLES
// ============================================================================

/// Whether a plural argument selects on cardinal or ordinal categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PluralType {
    /// `{n, plural, ...}`
    Cardinal,
    /// `{n, selectordinal, ...}`
    Ordinal,
}

impl PluralType {
    /// The argument type keyword used in message source.
    pub const fn keyword(&self) -> &'static str {
        match self {
            PluralType::Cardinal => "plural",
            PluralType::Ordinal => "selectordinal",
        }
    }
}

/// One whitespace-separated piece of a number skeleton: `stem/opt1/opt2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSkeletonToken {
    pub stem: String,
    pub options: Vec<String>,
}

/// A `::`-prefixed number style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberSkeleton {
    pub tokens: Vec<NumberSkeletonToken>,
    pub location: Location,
    /// Present only when the parser was asked to interpret skeletons.
    pub parsed_options: Option<NumberFormatOptions>,
}

/// A `::`-prefixed date or time style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeSkeleton {
    pub pattern: String,
    pub location: Location,
    /// Present only when the parser was asked to interpret skeletons.
    pub parsed_options: Option<DateTimeFormatOptions>,
}

/// Style of a `{name, number, style}` argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberArgStyle {
    /// Free-form style such as `percent` or `integer`.
    Text(String),
    Skeleton(NumberSkeleton),
}

/// Style of a `{name, date, style}` or `{name, time, style}` argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateTimeArgStyle {
    /// Free-form style such as `short` or `full`.
    Text(String),
    Skeleton(DateTimeSkeleton),
}

// ============================================================================
// ELEMENTS
// ============================================================================

/// A sub-message bound to one selector of a plural or select argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluralOrSelectOption {
    pub value: Vec<Element>,
    pub location: Location,
}

/// Selector key to branch, in source order.
pub type SelectorOptions = IndexMap<String, PluralOrSelectOption>;

/// The core AST node for ICU messages.
///
/// # Examples
///
/// ```rust
/// use icu_messageformat::ast::{Element, ElementType};
/// use icu_messageformat::{parse, ParseOptions};
///
/// let ast = parse("Hello {name}!", ParseOptions::default()).unwrap();
/// assert_eq!(ast.len(), 3);
/// assert_eq!(ast[1].element_type(), ElementType::Argument);
/// assert_eq!(ast[1].name(), Some("name"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Element {
    Literal {
        text: String,
        location: Location,
    },
    Argument {
        name: String,
        location: Location,
    },
    Number {
        name: String,
        style: Option<NumberArgStyle>,
        location: Location,
    },
    Date {
        name: String,
        style: Option<DateTimeArgStyle>,
        location: Location,
    },
    Time {
        name: String,
        style: Option<DateTimeArgStyle>,
        location: Location,
    },
    Plural {
        name: String,
        options: SelectorOptions,
        offset: i64,
        #[serde(rename = "pluralType")]
        plural_type: PluralType,
        location: Location,
    },
    Select {
        name: String,
        options: SelectorOptions,
        location: Location,
    },
    /// `#` inside a plural branch.
    Pound {
        location: Location,
    },
    Tag {
        name: String,
        children: Vec<Element>,
        location: Location,
    },
}

/// Discriminant of [`Element`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    Literal,
    Argument,
    Number,
    Date,
    Time,
    Select,
    Plural,
    Pound,
    Tag,
}

impl ElementType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ElementType::Literal => "literal",
            ElementType::Argument => "argument",
            ElementType::Number => "number",
            ElementType::Date => "date",
            ElementType::Time => "time",
            ElementType::Select => "select",
            ElementType::Plural => "plural",
            ElementType::Pound => "pound",
            ElementType::Tag => "tag",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Element {
    /// Returns the source range this element was parsed from.
    pub fn location(&self) -> Location {
        match self {
            Element::Literal { location, .. }
            | Element::Argument { location, .. }
            | Element::Number { location, .. }
            | Element::Date { location, .. }
            | Element::Time { location, .. }
            | Element::Plural { location, .. }
            | Element::Select { location, .. }
            | Element::Pound { location }
            | Element::Tag { location, .. } => *location,
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            Element::Literal { .. } => ElementType::Literal,
            Element::Argument { .. } => ElementType::Argument,
            Element::Number { .. } => ElementType::Number,
            Element::Date { .. } => ElementType::Date,
            Element::Time { .. } => ElementType::Time,
            Element::Plural { .. } => ElementType::Plural,
            Element::Select { .. } => ElementType::Select,
            Element::Pound { .. } => ElementType::Pound,
            Element::Tag { .. } => ElementType::Tag,
        }
    }

    /// Argument or tag name. `None` for literals and `#`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Element::Argument { name, .. }
            | Element::Number { name, .. }
            | Element::Date { name, .. }
            | Element::Time { name, .. }
            | Element::Plural { name, .. }
            | Element::Select { name, .. }
            | Element::Tag { name, .. } => Some(name),
            Element::Literal { .. } | Element::Pound { .. } => None,
        }
    }

    pub fn is_plural_or_select(&self) -> bool {
        matches!(self, Element::Plural { .. } | Element::Select { .. })
    }

    /// Selector branches of a plural or select element.
    pub fn options(&self) -> Option<&SelectorOptions> {
        match self {
            Element::Plural { options, .. } | Element::Select { options, .. } => Some(options),
            _ => None,
        }
    }
}

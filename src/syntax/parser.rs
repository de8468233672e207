//! ICU MessageFormat Parser
//!
//! Recursive descent over Unicode scalars, one production per nesting
//! context. Converts a message into [`Element`] nodes with source locations.
//! The first error aborts the parse; there is no recovery.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::ast::{
    DateTimeArgStyle, DateTimeSkeleton, Element, Location, NumberArgStyle, NumberSkeleton,
    PluralOrSelectOption, PluralType, Position, SelectorOptions,
};
use crate::errors::{ErrorKind, ParseError, ParseResult};
use crate::skeleton::{datetime, number, SkeletonError};
use crate::syntax::classify::{
    is_alpha, is_alpha_or_slash, is_identifier_char, is_potential_element_name_char,
};
use crate::syntax::cursor::Cursor;

/// Default limit on nested tags and plural/select branches.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 50;

/// Largest integer accepted for offsets and `=N` selectors (2^53 - 1).
const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

type Parsed<T> = Result<T, ParseError>;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Options controlling one parse.
///
/// # Examples
///
/// ```rust
/// use icu_messageformat::ParseOptions;
/// let options = ParseOptions::default()
///     .with_requires_other_clause(true)
///     .with_should_parse_skeletons(true);
/// assert!(!options.ignore_tag);
/// assert!(options.requires_other_clause);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Treat `<` and `>` as literal text instead of tag delimiters.
    pub ignore_tag: bool,
    /// Reject plural and select arguments without an `other` branch.
    pub requires_other_clause: bool,
    /// Interpret `::` skeletons into format options while parsing.
    pub should_parse_skeletons: bool,
    /// Deepest allowed nesting of tags and plural/select branches.
    pub max_nesting_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            ignore_tag: false,
            requires_other_clause: false,
            should_parse_skeletons: false,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_ignore_tag(mut self, ignore_tag: bool) -> Self {
        self.ignore_tag = ignore_tag;
        self
    }

    pub fn with_requires_other_clause(mut self, requires_other_clause: bool) -> Self {
        self.requires_other_clause = requires_other_clause;
        self
    }

    pub fn with_should_parse_skeletons(mut self, should_parse_skeletons: bool) -> Self {
        self.should_parse_skeletons = should_parse_skeletons;
        self
    }

    pub fn with_max_nesting_depth(mut self, max_nesting_depth: usize) -> Self {
        self.max_nesting_depth = max_nesting_depth;
        self
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parse a message into AST nodes.
///
/// # Examples
///
/// ```rust
/// use icu_messageformat::{parse, ErrorKind, ParseOptions};
/// let message = "{count, plural, one {# dog} other {# dogs}}";
/// let ast = parse(message, ParseOptions::default()).unwrap();
/// assert_eq!(ast.len(), 1);
///
/// let err = parse("<b>bold", ParseOptions::default()).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::UnclosedTag);
/// ```
pub fn parse(message: &str, options: ParseOptions) -> ParseResult {
    Parser::new(message, options).parse()
}

/// Kind of the argument whose branch is being parsed. Decides whether `#`
/// is special.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParentArg {
    None,
    Plural,
    SelectOrdinal,
    Select,
}

impl ParentArg {
    fn is_plural(self) -> bool {
        matches!(self, ParentArg::Plural | ParentArg::SelectOrdinal)
    }

    fn is_select(self) -> bool {
        self == ParentArg::Select
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SimpleArg {
    Number,
    Date,
    Time,
}

/// Single-use parser over one message.
///
/// A second call to [`Parser::parse`] fails with
/// [`ErrorKind::IllegalParserUsage`].
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParseOptions,
    used: bool,
}

impl<'a> Parser<'a> {
    pub fn new(message: &'a str, options: ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(message),
            options,
            used: false,
        }
    }

    pub fn parse(&mut self) -> ParseResult {
        if self.used {
            return self.error(ErrorKind::IllegalParserUsage, self.here());
        }
        self.used = true;

        trace!(message = self.cursor.message(), options = ?self.options, "parsing message");
        let result = self.parse_message(0, ParentArg::None, false);
        match &result {
            Ok(elements) => trace!(elements = elements.len(), "parsed message"),
            Err(err) => debug!(
                kind = err.kind.as_str(),
                start = err.location.start.offset,
                end = err.location.end.offset,
                "message failed to parse"
            ),
        }
        result
    }

    // ------------------------------------------------------------------------
    // Error helpers
    // ------------------------------------------------------------------------

    fn make_error(&self, kind: ErrorKind, location: Location) -> ParseError {
        ParseError::new(kind, self.cursor.message(), location)
    }

    fn error<T>(&self, kind: ErrorKind, location: Location) -> Parsed<T> {
        Err(self.make_error(kind, location))
    }

    fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Empty location at the cursor.
    fn here(&self) -> Location {
        Location::point(self.position())
    }

    /// Location from `start` to the cursor.
    fn since(&self, start: Position) -> Location {
        Location::new(start, self.position())
    }

    // ========================================================================
    // MESSAGE
    // ========================================================================

    fn parse_message(
        &mut self,
        nesting_level: usize,
        parent: ParentArg,
        expecting_close_tag: bool,
    ) -> Parsed<Vec<Element>> {
        if nesting_level > self.options.max_nesting_depth {
            return self.error(ErrorKind::ExceededMaxNestingDepth, self.here());
        }

        let mut elements = Vec::new();
        while let Some(ch) = self.cursor.char() {
            let tags_enabled = !self.options.ignore_tag;
            match ch {
                '{' => elements.push(self.parse_argument(nesting_level, expecting_close_tag)?),
                '}' if nesting_level > 0 => break,
                '#' if parent.is_plural() => {
                    let start = self.position();
                    self.cursor.bump();
                    elements.push(Element::Pound {
                        location: self.since(start),
                    });
                }
                '<' if tags_enabled && self.cursor.peek() == Some('/') => {
                    if expecting_close_tag {
                        break;
                    }
                    return self.error(ErrorKind::UnmatchedClosingTag, self.here());
                }
                '<' if tags_enabled && self.cursor.peek().is_some_and(is_alpha) => {
                    elements.push(self.parse_tag(nesting_level, parent)?);
                }
                _ => elements.push(self.parse_literal(nesting_level, parent)),
            }
        }
        Ok(elements)
    }

    // ========================================================================
    // TAGS
    // ========================================================================

    /// `<name>children</name>` or the self-closing `<name/>`, which becomes
    /// a literal.
    fn parse_tag(&mut self, nesting_level: usize, parent: ParentArg) -> Parsed<Element> {
        let start = self.position();
        self.cursor.bump(); // `<`

        let name = self.parse_tag_name();
        self.cursor.bump_space();

        if self.cursor.bump_if("/>") {
            return Ok(Element::Literal {
                text: format!("<{name}/>"),
                location: self.since(start),
            });
        }

        if !self.cursor.bump_if(">") {
            return self.error(ErrorKind::InvalidTag, self.since(start));
        }

        let children = self.parse_message(nesting_level + 1, parent, true)?;

        let end_tag_start = self.position();
        if !self.cursor.bump_if("</") {
            return self.error(ErrorKind::UnclosedTag, self.since(start));
        }

        if !self.cursor.char().is_some_and(is_alpha) {
            return self.error(ErrorKind::InvalidTagName, self.since(end_tag_start));
        }

        let closing_name_start = self.position();
        let closing_name = self.parse_tag_name();
        if closing_name != name {
            return self.error(ErrorKind::UnmatchedClosingTag, self.since(closing_name_start));
        }

        self.cursor.bump_space();
        if !self.cursor.bump_if(">") {
            return self.error(ErrorKind::InvalidTag, self.since(end_tag_start));
        }

        Ok(Element::Tag {
            name: name.to_string(),
            children,
            location: self.since(start),
        })
    }

    fn parse_tag_name(&mut self) -> &'a str {
        let start = self.cursor.byte_offset();
        self.cursor.bump(); // first letter
        while self
            .cursor
            .char()
            .is_some_and(is_potential_element_name_char)
        {
            self.cursor.bump();
        }
        self.cursor.slice_from(start)
    }

    // ========================================================================
    // LITERALS
    // ========================================================================

    fn parse_literal(&mut self, nesting_level: usize, parent: ParentArg) -> Element {
        let start = self.position();
        let mut text = String::new();

        loop {
            if self.try_parse_quote(parent, &mut text)
                || self.try_parse_unquoted(nesting_level, parent, &mut text)
                || self.try_parse_left_angle_bracket(&mut text)
            {
                continue;
            }
            break;
        }

        Element::Literal {
            text,
            location: self.since(start),
        }
    }

    /// `''` is an apostrophe; `'` before a syntax character starts quoted
    /// text running to the next lone `'` or the end of input.
    fn try_parse_quote(&mut self, parent: ParentArg, out: &mut String) -> bool {
        if self.cursor.char() != Some('\'') {
            return false;
        }

        match self.cursor.peek() {
            Some('\'') => {
                self.cursor.bump();
                self.cursor.bump();
                out.push('\'');
                return true;
            }
            Some('{' | '<' | '>' | '}') => {}
            Some('#') if parent.is_plural() => {}
            _ => return false,
        }

        self.cursor.bump(); // opening apostrophe
        while let Some(ch) = self.cursor.char() {
            if ch == '\'' {
                if self.cursor.peek() == Some('\'') {
                    out.push('\'');
                    self.cursor.bump();
                } else {
                    self.cursor.bump(); // closing apostrophe
                    break;
                }
            } else {
                out.push(ch);
            }
            self.cursor.bump();
        }
        true
    }

    fn try_parse_unquoted(
        &mut self,
        nesting_level: usize,
        parent: ParentArg,
        out: &mut String,
    ) -> bool {
        let Some(ch) = self.cursor.char() else {
            return false;
        };
        let stops = match ch {
            '<' | '{' => true,
            '#' => parent.is_plural(),
            '}' => nesting_level > 0,
            _ => false,
        };
        if stops {
            return false;
        }
        self.cursor.bump();
        out.push(ch);
        true
    }

    /// A `<` that cannot open a tag, as in `I <3 cats`.
    fn try_parse_left_angle_bracket(&mut self, out: &mut String) -> bool {
        if self.cursor.char() != Some('<') {
            return false;
        }
        if !self.options.ignore_tag && self.cursor.peek().is_some_and(is_alpha_or_slash) {
            return false;
        }
        self.cursor.bump();
        out.push('<');
        true
    }

    // ========================================================================
    // ARGUMENTS
    // ========================================================================

    fn parse_argument(
        &mut self,
        nesting_level: usize,
        expecting_close_tag: bool,
    ) -> Parsed<Element> {
        let opening = self.position();
        self.cursor.bump(); // `{`
        self.cursor.bump_space();

        match self.cursor.char() {
            None => return self.error(ErrorKind::ExpectArgumentClosingBrace, self.since(opening)),
            Some('}') => {
                self.cursor.bump();
                return self.error(ErrorKind::EmptyArgument, self.since(opening));
            }
            Some(_) => {}
        }

        let (name, _) = self.parse_identifier_if_possible();
        if name.is_empty() {
            return self.error(ErrorKind::MalformedArgument, self.since(opening));
        }

        self.cursor.bump_space();
        match self.cursor.char() {
            None => self.error(ErrorKind::ExpectArgumentClosingBrace, self.since(opening)),
            Some('}') => {
                self.cursor.bump();
                Ok(Element::Argument {
                    name: name.to_string(),
                    location: self.since(opening),
                })
            }
            Some(',') => {
                self.cursor.bump();
                self.cursor.bump_space();
                if self.cursor.is_eof() {
                    return self.error(ErrorKind::ExpectArgumentClosingBrace, self.since(opening));
                }
                self.parse_argument_options(nesting_level, expecting_close_tag, name, opening)
            }
            Some(_) => self.error(ErrorKind::MalformedArgument, self.since(opening)),
        }
    }

    /// Longest run of identifier scalars at the cursor, possibly empty.
    fn parse_identifier_if_possible(&mut self) -> (&'a str, Location) {
        let start_position = self.position();
        let start = self.cursor.byte_offset();
        let rest = self.cursor.rest();
        let len = rest
            .char_indices()
            .find(|&(_, ch)| !is_identifier_char(ch))
            .map_or(rest.len(), |(index, _)| index);
        self.cursor.bump_to(start + len);
        (self.cursor.slice_from(start), self.since(start_position))
    }

    /// `{name, type, ...}` after the first comma.
    fn parse_argument_options(
        &mut self,
        nesting_level: usize,
        expecting_close_tag: bool,
        name: &str,
        opening: Position,
    ) -> Parsed<Element> {
        let type_start = self.position();
        let (arg_type, type_location) = self.parse_identifier_if_possible();

        match arg_type {
            "" => self.error(ErrorKind::ExpectArgumentType, Location::new(type_start, type_start)),
            "number" => self.parse_simple_argument(SimpleArg::Number, name, opening),
            "date" => self.parse_simple_argument(SimpleArg::Date, name, opening),
            "time" => self.parse_simple_argument(SimpleArg::Time, name, opening),
            "plural" => self.parse_plural_or_select(
                ParentArg::Plural,
                nesting_level,
                expecting_close_tag,
                name,
                opening,
            ),
            "selectordinal" => self.parse_plural_or_select(
                ParentArg::SelectOrdinal,
                nesting_level,
                expecting_close_tag,
                name,
                opening,
            ),
            "select" => self.parse_plural_or_select(
                ParentArg::Select,
                nesting_level,
                expecting_close_tag,
                name,
                opening,
            ),
            _ => self.error(ErrorKind::InvalidArgumentType, type_location),
        }
    }

    fn try_parse_argument_close(&mut self, opening: Position) -> Parsed<()> {
        if self.cursor.char() != Some('}') {
            return self.error(ErrorKind::ExpectArgumentClosingBrace, self.since(opening));
        }
        self.cursor.bump();
        Ok(())
    }

    // ========================================================================
    // NUMBER, DATE, TIME
    // ========================================================================

    /// `{name, number}` or `{name, date, style}` after the type.
    fn parse_simple_argument(
        &mut self,
        kind: SimpleArg,
        name: &str,
        opening: Position,
    ) -> Parsed<Element> {
        self.cursor.bump_space();

        let mut style_and_location = None;
        if self.cursor.bump_if(",") {
            self.cursor.bump_space();
            let style_start = self.position();
            let style = self
                .parse_simple_arg_style_if_possible()?
                .trim_end_matches(char::is_whitespace);
            if style.is_empty() {
                return self.error(ErrorKind::ExpectArgumentStyle, self.here());
            }
            style_and_location = Some((style, self.since(style_start)));
        }

        self.try_parse_argument_close(opening)?;
        let location = self.since(opening);
        let name = name.to_string();

        let Some((style, style_location)) = style_and_location else {
            return Ok(match kind {
                SimpleArg::Number => Element::Number { name, style: None, location },
                SimpleArg::Date => Element::Date { name, style: None, location },
                SimpleArg::Time => Element::Time { name, style: None, location },
            });
        };

        let Some(skeleton) = style.strip_prefix("::") else {
            let style = style.to_string();
            return Ok(match kind {
                SimpleArg::Number => Element::Number {
                    name,
                    style: Some(NumberArgStyle::Text(style)),
                    location,
                },
                SimpleArg::Date => Element::Date {
                    name,
                    style: Some(DateTimeArgStyle::Text(style)),
                    location,
                },
                SimpleArg::Time => Element::Time {
                    name,
                    style: Some(DateTimeArgStyle::Text(style)),
                    location,
                },
            });
        };

        let skeleton = skeleton.trim_start_matches(char::is_whitespace);
        match kind {
            SimpleArg::Number => {
                let skeleton = self.parse_number_skeleton(skeleton, style_location)?;
                Ok(Element::Number {
                    name,
                    style: Some(NumberArgStyle::Skeleton(skeleton)),
                    location,
                })
            }
            SimpleArg::Date | SimpleArg::Time => {
                if skeleton.is_empty() {
                    return self.error(ErrorKind::ExpectDateTimeSkeleton, location);
                }
                let skeleton = self.parse_date_time_skeleton(skeleton, style_location)?;
                let style = Some(DateTimeArgStyle::Skeleton(skeleton));
                Ok(if kind == SimpleArg::Date {
                    Element::Date { name, style, location }
                } else {
                    Element::Time { name, style, location }
                })
            }
        }
    }

    /// Style text up to the argument's closing `}`. Nested braces and quoted
    /// runs are kept verbatim.
    fn parse_simple_arg_style_if_possible(&mut self) -> Parsed<&'a str> {
        let start = self.cursor.byte_offset();
        let mut nested_braces = 0usize;

        while let Some(ch) = self.cursor.char() {
            match ch {
                '\'' => {
                    self.cursor.bump();
                    let apostrophe = self.position();
                    if !self.cursor.bump_until("'") {
                        return self.error(
                            ErrorKind::UnclosedQuoteInArgumentStyle,
                            self.since(apostrophe),
                        );
                    }
                    self.cursor.bump();
                }
                '{' => {
                    nested_braces += 1;
                    self.cursor.bump();
                }
                '}' if nested_braces > 0 => {
                    nested_braces -= 1;
                    self.cursor.bump();
                }
                '}' => break,
                _ => self.cursor.bump(),
            }
        }

        Ok(self.cursor.slice_from(start))
    }

    fn parse_number_skeleton(&self, skeleton: &str, location: Location) -> Parsed<NumberSkeleton> {
        if skeleton.is_empty() {
            return self.error(ErrorKind::ExpectNumberSkeleton, location);
        }

        let tokens = number::tokenize(skeleton).map_err(|err| {
            self.make_error(ErrorKind::InvalidNumberSkeleton, location)
                .with_cause(err)
        })?;

        let parsed_options = if self.options.should_parse_skeletons {
            let options = number::interpret(&tokens)
                .map_err(|err| self.make_error(ErrorKind::Other, location).with_cause(err))?;
            Some(options)
        } else {
            None
        };

        Ok(NumberSkeleton {
            tokens,
            location,
            parsed_options,
        })
    }

    fn parse_date_time_skeleton(
        &self,
        pattern: &str,
        location: Location,
    ) -> Parsed<DateTimeSkeleton> {
        let parsed_options = if self.options.should_parse_skeletons {
            let options = datetime::interpret(pattern).map_err(|err| {
                // Unbalanced quotes are rejected by the style scanner first,
                // so this arm only guards direct callers of the skeleton path.
                let kind = match err {
                    SkeletonError::UnclosedQuote { .. } => ErrorKind::InvalidDateTimeSkeleton,
                    _ => ErrorKind::Other,
                };
                self.make_error(kind, location).with_cause(err)
            })?;
            Some(options)
        } else {
            None
        };

        Ok(DateTimeSkeleton {
            pattern: pattern.to_string(),
            location,
            parsed_options,
        })
    }

    // ========================================================================
    // PLURAL AND SELECT
    // ========================================================================

    /// `{name, plural, offset:1 one {...} other {...}}` after the type.
    fn parse_plural_or_select(
        &mut self,
        parent: ParentArg,
        nesting_level: usize,
        expecting_close_tag: bool,
        name: &str,
        opening: Position,
    ) -> Parsed<Element> {
        let type_end = self.position();
        self.cursor.bump_space();
        if !self.cursor.bump_if(",") {
            return self.error(ErrorKind::ExpectSelectArgumentOptions, Location::point(type_end));
        }
        self.cursor.bump_space();

        let mut first_selector = self.parse_identifier_if_possible();
        let mut offset = 0;
        if !parent.is_select() && first_selector.0 == "offset" {
            if !self.cursor.bump_if(":") {
                return self.error(ErrorKind::ExpectPluralArgumentOffsetValue, self.here());
            }
            self.cursor.bump_space();
            offset = self.try_parse_decimal_integer(
                ErrorKind::ExpectPluralArgumentOffsetValue,
                ErrorKind::InvalidPluralArgumentOffsetValue,
            )?;
            self.cursor.bump_space();
            first_selector = self.parse_identifier_if_possible();
        }

        let options = self.try_parse_plural_or_select_options(
            nesting_level,
            parent,
            expecting_close_tag,
            first_selector,
        )?;
        self.try_parse_argument_close(opening)?;

        let name = name.to_string();
        let location = self.since(opening);
        Ok(match parent {
            ParentArg::Select | ParentArg::None => Element::Select {
                name,
                options,
                location,
            },
            ParentArg::Plural | ParentArg::SelectOrdinal => Element::Plural {
                name,
                options,
                offset,
                plural_type: if parent == ParentArg::Plural {
                    PluralType::Cardinal
                } else {
                    PluralType::Ordinal
                },
                location,
            },
        })
    }

    fn try_parse_plural_or_select_options(
        &mut self,
        nesting_level: usize,
        parent: ParentArg,
        expecting_close_tag: bool,
        first_selector: (&'a str, Location),
    ) -> Parsed<SelectorOptions> {
        let (duplicate_kind, fragment_kind, selector_kind) = if parent.is_select() {
            (
                ErrorKind::DuplicateSelectArgumentSelector,
                ErrorKind::ExpectSelectArgumentSelectorFragment,
                ErrorKind::ExpectSelectArgumentSelector,
            )
        } else {
            (
                ErrorKind::DuplicatePluralArgumentSelector,
                ErrorKind::ExpectPluralArgumentSelectorFragment,
                ErrorKind::ExpectPluralArgumentSelector,
            )
        };

        let mut options = SelectorOptions::new();
        let mut has_other_clause = false;
        let (mut selector, mut selector_location) = first_selector;

        loop {
            if selector.is_empty() {
                let start = self.position();
                let start_byte = self.cursor.byte_offset();
                if parent.is_select() || !self.cursor.bump_if("=") {
                    break;
                }
                // =N
                self.try_parse_decimal_integer(
                    ErrorKind::ExpectPluralArgumentSelector,
                    ErrorKind::InvalidPluralArgumentSelector,
                )?;
                selector = self.cursor.slice_from(start_byte);
                selector_location = self.since(start);
            }

            if options.contains_key(selector) {
                return self.error(duplicate_kind, selector_location);
            }
            if selector == "other" {
                has_other_clause = true;
            }

            self.cursor.bump_space();
            let opening_brace = self.position();
            if !self.cursor.bump_if("{") {
                return self.error(fragment_kind, self.here());
            }

            let fragment = self.parse_message(nesting_level + 1, parent, expecting_close_tag)?;
            self.try_parse_argument_close(opening_brace)?;

            options.insert(
                selector.to_string(),
                PluralOrSelectOption {
                    value: fragment,
                    location: self.since(opening_brace),
                },
            );

            self.cursor.bump_space();
            (selector, selector_location) = self.parse_identifier_if_possible();
        }

        if options.is_empty() {
            return self.error(selector_kind, self.here());
        }
        if self.options.requires_other_clause && !has_other_clause {
            return self.error(ErrorKind::MissingOtherClause, self.here());
        }
        Ok(options)
    }

    /// Optionally signed decimal integer within the safe-integer range.
    fn try_parse_decimal_integer(
        &mut self,
        expect_number_kind: ErrorKind,
        invalid_number_kind: ErrorKind,
    ) -> Parsed<i64> {
        let start = self.position();
        let negative = if self.cursor.bump_if("+") {
            false
        } else {
            self.cursor.bump_if("-")
        };

        let mut has_digits = false;
        let mut value = Some(0i64);
        while let Some(digit) = self.cursor.char().and_then(|ch| ch.to_digit(10)) {
            has_digits = true;
            value = value
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(i64::from(digit)));
            self.cursor.bump();
        }

        let location = self.since(start);
        if !has_digits {
            return self.error(expect_number_kind, location);
        }
        match value.filter(|v| *v <= MAX_SAFE_INTEGER) {
            Some(v) if negative => Ok(-v),
            Some(v) => Ok(v),
            None => self.error(invalid_number_kind, location),
        }
    }
}

//! AST printer
//!
//! Renders [`Element`] trees back into message source. The output is not
//! byte-identical to what was parsed (quoting is normalized), but parsing it
//! again yields an equivalent tree.

use crate::ast::{
    DateTimeArgStyle, DateTimeSkeleton, Element, NumberArgStyle, NumberSkeletonToken,
    SelectorOptions,
};
use crate::syntax::classify::{is_alpha, is_alpha_or_slash, is_potential_element_name_char};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Prints a parsed message.
///
/// # Examples
///
/// ```rust
/// use icu_messageformat::{parse, print, ParseOptions};
/// let ast = parse("{n, plural, =0 {none} other {# items}}", ParseOptions::default()).unwrap();
/// assert_eq!(print(&ast), "{n, plural, =0{none} other{# items}}");
/// ```
pub fn print(elements: &[Element]) -> String {
    let mut out = String::new();
    print_elements(elements, false, &mut out);
    out
}

/// Renders number skeleton tokens as `stem/opt ...`, without the `::` prefix.
pub fn print_number_skeleton(tokens: &[NumberSkeletonToken]) -> String {
    tokens
        .iter()
        .map(|token| {
            let mut text = token.stem.clone();
            for option in &token.options {
                text.push('/');
                text.push_str(option);
            }
            text
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a date-time skeleton pattern, without the `::` prefix.
pub fn print_date_time_skeleton(skeleton: &DateTimeSkeleton) -> String {
    skeleton.pattern.clone()
}

// ============================================================================
// ELEMENTS
// ============================================================================

/// `in_plural` is set directly inside a plural or selectordinal branch,
/// where a bare `#` would parse as a pound element.
fn print_elements(elements: &[Element], in_plural: bool, out: &mut String) {
    for element in elements {
        print_element(element, in_plural, out);
    }
}

fn print_element(element: &Element, in_plural: bool, out: &mut String) {
    match element {
        Element::Literal { text, .. } => print_literal(text, in_plural, out),
        Element::Argument { name, .. } => {
            out.push('{');
            out.push_str(name);
            out.push('}');
        }
        Element::Number { name, style, .. } => {
            let style = style.as_ref().map(|style| match style {
                NumberArgStyle::Text(text) => text.clone(),
                NumberArgStyle::Skeleton(skeleton) => {
                    format!("::{}", print_number_skeleton(&skeleton.tokens))
                }
            });
            print_simple_argument(name, "number", style.as_deref(), out);
        }
        Element::Date { name, style, .. } => {
            let style = style.as_ref().map(date_time_style);
            print_simple_argument(name, "date", style.as_deref(), out);
        }
        Element::Time { name, style, .. } => {
            let style = style.as_ref().map(date_time_style);
            print_simple_argument(name, "time", style.as_deref(), out);
        }
        Element::Plural {
            name,
            options,
            offset,
            plural_type,
            ..
        } => {
            out.push('{');
            out.push_str(name);
            out.push_str(", ");
            out.push_str(plural_type.keyword());
            out.push_str(", ");
            if *offset != 0 {
                out.push_str(&format!("offset:{offset} "));
            }
            print_options(options, true, out);
            out.push('}');
        }
        Element::Select { name, options, .. } => {
            out.push('{');
            out.push_str(name);
            out.push_str(", select, ");
            print_options(options, false, out);
            out.push('}');
        }
        Element::Pound { .. } => out.push('#'),
        Element::Tag { name, children, .. } => {
            out.push('<');
            out.push_str(name);
            out.push('>');
            print_elements(children, in_plural, out);
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

fn date_time_style(style: &DateTimeArgStyle) -> String {
    match style {
        DateTimeArgStyle::Text(text) => text.clone(),
        DateTimeArgStyle::Skeleton(skeleton) => format!("::{}", print_date_time_skeleton(skeleton)),
    }
}

fn print_simple_argument(name: &str, arg_type: &str, style: Option<&str>, out: &mut String) {
    out.push('{');
    out.push_str(name);
    out.push_str(", ");
    out.push_str(arg_type);
    if let Some(style) = style {
        out.push_str(", ");
        out.push_str(style);
    }
    out.push('}');
}

fn print_options(options: &SelectorOptions, in_plural: bool, out: &mut String) {
    for (index, (selector, option)) in options.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        out.push_str(selector);
        out.push('{');
        print_elements(&option.value, in_plural, out);
        out.push('}');
    }
}

// ============================================================================
// LITERAL ESCAPING
// ============================================================================

/// Doubles every apostrophe, then quotes the run from the first to the last
/// character that would otherwise be read as syntax.
fn print_literal(text: &str, in_plural: bool, out: &mut String) {
    // Parsed from `<name/>`; printing it raw parses back to its own literal.
    if is_self_closing_tag(text) {
        out.push_str(text);
        return;
    }

    let escaped = text.replace('\'', "''");
    let chars: Vec<(usize, char)> = escaped.char_indices().collect();

    let is_syntax = |index: usize| match chars[index].1 {
        '{' | '}' => true,
        '#' => in_plural,
        '<' => chars
            .get(index + 1)
            .is_some_and(|&(_, next)| is_alpha_or_slash(next)),
        _ => false,
    };

    let Some(first) = (0..chars.len()).find(|&index| is_syntax(index)) else {
        out.push_str(&escaped);
        return;
    };
    let last = (first..chars.len())
        .rev()
        .find(|&index| is_syntax(index))
        .unwrap_or(first);

    let start = chars[first].0;
    let end = chars[last].0 + chars[last].1.len_utf8();
    out.push_str(&escaped[..start]);
    out.push('\'');
    out.push_str(&escaped[start..end]);
    out.push('\'');
    out.push_str(&escaped[end..]);
}

fn is_self_closing_tag(text: &str) -> bool {
    let Some(name) = text
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix("/>"))
    else {
        return false;
    };
    let mut chars = name.chars();
    chars.next().is_some_and(is_alpha) && chars.all(is_potential_element_name_char)
}

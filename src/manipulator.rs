//! AST rewrites
//!
//! [`hoist_selectors`] lifts a plural or select argument embedded in flat text
//! to the top of the message so every branch reads as a whole sentence.
//! [`is_structurally_same`] checks that two messages (typically a source
//! string and its translation) use the same variables with the same types.

use indexmap::IndexMap;
use miette::Diagnostic;
use thiserror::Error;
use tracing::trace;

use crate::ast::{Element, ElementType};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum HoistError {
    #[error("cannot hoist plural/select within tag `<{tag}>`")]
    #[diagnostic(
        code(icu::hoist::selector_inside_tag),
        help("put the tag inside each plural/select option instead")
    )]
    SelectorInsideTag { tag: String },
}

/// Why two messages are not structurally the same.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum StructuralMismatch {
    #[error("different number of variables: [{}] vs [{}]", .left.join(", "), .right.join(", "))]
    #[diagnostic(code(icu::structure::variable_count))]
    VariableCount { left: Vec<String>, right: Vec<String> },

    #[error("missing variable `{name}` in message")]
    #[diagnostic(code(icu::structure::missing_variable))]
    MissingVariable { name: String },

    #[error("variable `{name}` has conflicting types: {left} vs {right}")]
    #[diagnostic(code(icu::structure::conflicting_types))]
    ConflictingTypes {
        name: String,
        left: ElementType,
        right: ElementType,
    },
}

// ============================================================================
// SELECTOR HOISTING
// ============================================================================

/// Hoists the first plural or select argument of `elements` to the top
/// level, copying the surrounding elements into each of its branches.
/// Branches are hoisted recursively, so nested or sibling selectors end up
/// nested at the top. The input is not modified.
///
/// A `#` spliced from a plural branch into a select branch stays an
/// [`Element::Pound`]. Printed and parsed again, that `#` becomes literal
/// text, since a select branch does not bind `#`.
///
/// # Examples
///
/// ```rust
/// use icu_messageformat::{hoist_selectors, parse, print, ParseOptions};
/// let message = "I have {n, plural, one{a dog} other{dogs}}!";
/// let ast = parse(message, ParseOptions::default()).unwrap();
/// let hoisted = hoist_selectors(&ast).unwrap();
/// assert_eq!(print(&hoisted), "{n, plural, one{I have a dog!} other{I have dogs!}}");
/// ```
pub fn hoist_selectors(elements: &[Element]) -> Result<Vec<Element>, HoistError> {
    for (index, element) in elements.iter().enumerate() {
        match element {
            Element::Plural { .. } | Element::Select { .. } => {
                trace!(selector = element.name(), index, "hoisting selector");
                let mut hoisted = element.clone();
                if let Element::Plural { options, .. } | Element::Select { options, .. } =
                    &mut hoisted
                {
                    for option in options.values_mut() {
                        let spliced: Vec<Element> = elements[..index]
                            .iter()
                            .chain(&option.value)
                            .chain(&elements[index + 1..])
                            .cloned()
                            .collect();
                        option.value = hoist_selectors(&spliced)?;
                    }
                }
                return Ok(vec![hoisted]);
            }
            Element::Tag { name, children, .. } if contains_selector(children) => {
                return Err(HoistError::SelectorInsideTag { tag: name.clone() });
            }
            _ => {}
        }
    }
    Ok(elements.to_vec())
}

fn contains_selector(elements: &[Element]) -> bool {
    elements.iter().any(|element| match element {
        Element::Plural { .. } | Element::Select { .. } => true,
        Element::Tag { children, .. } => contains_selector(children),
        _ => false,
    })
}

// ============================================================================
// STRUCTURAL COMPARISON
// ============================================================================

/// Checks that `a` and `b` reference the same variables with the same
/// element types. Literal text and branch contents may differ freely.
pub fn is_structurally_same(a: &[Element], b: &[Element]) -> Result<(), StructuralMismatch> {
    let a_vars = collect_variables(a)?;
    let b_vars = collect_variables(b)?;

    if a_vars.len() != b_vars.len() {
        return Err(StructuralMismatch::VariableCount {
            left: a_vars.keys().cloned().collect(),
            right: b_vars.keys().cloned().collect(),
        });
    }

    for (name, &left) in &a_vars {
        let Some(&right) = b_vars.get(name) else {
            return Err(StructuralMismatch::MissingVariable { name: name.clone() });
        };
        if left != right {
            return Err(StructuralMismatch::ConflictingTypes {
                name: name.clone(),
                left,
                right,
            });
        }
    }
    Ok(())
}

type Variables = IndexMap<String, ElementType>;

fn collect_variables(elements: &[Element]) -> Result<Variables, StructuralMismatch> {
    let mut vars = Variables::new();
    collect_into(elements, &mut vars)?;
    Ok(vars)
}

fn collect_into(elements: &[Element], vars: &mut Variables) -> Result<(), StructuralMismatch> {
    for element in elements {
        let Some(name) = element.name() else {
            continue;
        };
        let element_type = element.element_type();
        if let Some(&existing) = vars.get(name) {
            if existing != element_type {
                return Err(StructuralMismatch::ConflictingTypes {
                    name: name.to_string(),
                    left: existing,
                    right: element_type,
                });
            }
        } else {
            vars.insert(name.to_string(), element_type);
        }

        match element {
            Element::Plural { options, .. } | Element::Select { options, .. } => {
                for option in options.values() {
                    collect_into(&option.value, vars)?;
                }
            }
            Element::Tag { children, .. } => collect_into(children, vars)?,
            _ => {}
        }
    }
    Ok(())
}

//! Number skeletons
//!
//! Tokenizes `::`-skeletons such as `currency/EUR .00 group-off` into stems and
//! options, and interprets those tokens into [`NumberFormatOptions`].
//!
//! Stems not in the keyword table are tried, in order, against concise
//! integer width (`000`), fraction precision (`.00##`), significant-digit
//! precision (`@@#`), sign display, and concise notation (`E0`, `EE+!00`).
//! Anything left over is ignored.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::trace;

pub use crate::ast::NumberSkeletonToken;
use crate::skeleton::error::SkeletonError;
use crate::syntax::classify::is_white_space;

// ============================================================================
// OPTIONS RECORD
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberStyle {
    Decimal,
    Percent,
    Currency,
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Notation {
    Standard,
    Scientific,
    Engineering,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompactDisplay {
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrencyDisplay {
    Symbol,
    NarrowSymbol,
    Code,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrencySign {
    Standard,
    Accounting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitDisplay {
    Short,
    Narrow,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignDisplay {
    Auto,
    Always,
    ExceptZero,
    Negative,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupingMode {
    Always,
    Auto,
    Min2,
}

/// `useGrouping`: either `false` or one of the grouping strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UseGrouping {
    Enabled(bool),
    Mode(GroupingMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundingMode {
    Ceil,
    Floor,
    Expand,
    Trunc,
    HalfCeil,
    HalfFloor,
    HalfExpand,
    HalfTrunc,
    HalfEven,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundingPriority {
    Auto,
    MorePrecision,
    LessPrecision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrailingZeroDisplay {
    Auto,
    StripIfInteger,
}

/// Interpreted number skeleton, shaped like `Intl.NumberFormat` options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<NumberStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_display: Option<CurrencyDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_sign: Option<CurrencySign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_display: Option<UnitDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_grouping: Option<UseGrouping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notation: Option<Notation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact_display: Option<CompactDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_display: Option<SignDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_integer_digits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_fraction_digits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_fraction_digits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_significant_digits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_significant_digits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding_priority: Option<RoundingPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding_mode: Option<RoundingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_zero_display: Option<TrailingZeroDisplay>,
}

// ============================================================================
// STRUCTURAL STEM PATTERNS
// ============================================================================

static CONCISE_INTEGER_WIDTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0+$").expect("concise integer width pattern"));

// `.000*` (`.000+` before ICU 67), `.###`, `.00##`
static FRACTION_PRECISION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\.(?:(0+)([*+])?|(#+)|(0+)(#+))$").expect("fraction precision pattern")
});

// `@@@`, `@@+`, `@@##`, each with an optional rounding-priority suffix
static SIGNIFICANT_PRECISION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(@+)(\+|#+)?([rs])?$").expect("significant precision pattern")
});

// `*000`, `##00`, `000`
static INTEGER_WIDTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\*(0+)|(#+)(0+)|(0+))$").expect("integer width pattern")
});

// ============================================================================
// PUBLIC API
// ============================================================================

/// Splits a number skeleton into tokens.
///
/// Tokens are separated by pattern whitespace; each token is split on `/`
/// into its stem and options.
///
/// # Examples
///
/// ```rust
/// use icu_messageformat::skeleton::number::tokenize;
/// let tokens = tokenize("currency/EUR .00").unwrap();
/// assert_eq!(tokens[0].stem, "currency");
/// assert_eq!(tokens[0].options, vec!["EUR".to_string()]);
/// assert_eq!(tokens[1].stem, ".00");
/// ```
pub fn tokenize(skeleton: &str) -> Result<Vec<NumberSkeletonToken>, SkeletonError> {
    let tokens = skeleton
        .split(is_white_space)
        .filter(|piece| !piece.is_empty())
        .map(tokenize_piece)
        .collect::<Result<Vec<_>, _>>()?;

    if tokens.is_empty() {
        return Err(SkeletonError::Empty);
    }
    Ok(tokens)
}

/// Interprets tokens into [`NumberFormatOptions`].
///
/// # Examples
///
/// ```rust
/// use icu_messageformat::skeleton::number::{interpret, tokenize, NumberStyle};
/// let options = interpret(&tokenize("percent .##").unwrap()).unwrap();
/// assert_eq!(options.style, Some(NumberStyle::Percent));
/// assert_eq!(options.minimum_fraction_digits, Some(0));
/// assert_eq!(options.maximum_fraction_digits, Some(2));
/// ```
pub fn interpret(tokens: &[NumberSkeletonToken]) -> Result<NumberFormatOptions, SkeletonError> {
    let mut result = NumberFormatOptions::default();

    for token in tokens {
        trace!(stem = %token.stem, options = ?token.options, "interpreting number skeleton token");

        if apply_keyword_stem(&mut result, token)? {
            continue;
        }

        if CONCISE_INTEGER_WIDTH.is_match(&token.stem) {
            result.minimum_integer_digits = Some(digit_count(&token.stem));
            continue;
        }

        if let Some(caps) = FRACTION_PRECISION.captures(&token.stem) {
            apply_fraction_precision(&mut result, token, &caps)?;
            continue;
        }

        if let Some(caps) = SIGNIFICANT_PRECISION.captures(&token.stem) {
            apply_significant_precision(&mut result, &caps);
            continue;
        }

        if let Some(sign) = sign_options(&token.stem) {
            sign.apply(&mut result);
        }

        if let Some(notation) = concise_notation(&token.stem)? {
            result.notation = Some(notation.notation);
            if notation.sign_display.is_some() {
                result.sign_display = notation.sign_display;
            }
            result.minimum_integer_digits = Some(notation.minimum_integer_digits);
        }
    }

    Ok(result)
}

// ============================================================================
// TOKENIZATION
// ============================================================================

fn tokenize_piece(piece: &str) -> Result<NumberSkeletonToken, SkeletonError> {
    let mut parts = piece.split('/');
    let stem = parts.next().unwrap_or_default().to_string();
    let options: Vec<String> = parts.map(String::from).collect();

    if options.iter().any(String::is_empty) {
        return Err(SkeletonError::EmptyOption {
            token: piece.to_string(),
        });
    }

    Ok(NumberSkeletonToken { stem, options })
}

// ============================================================================
// INTERPRETATION HELPERS
// ============================================================================

/// Applies a stem from the fixed keyword table. Returns `false` if the stem
/// is not a keyword.
fn apply_keyword_stem(
    result: &mut NumberFormatOptions,
    token: &NumberSkeletonToken,
) -> Result<bool, SkeletonError> {
    match token.stem.as_str() {
        "percent" | "%" => result.style = Some(NumberStyle::Percent),
        "%x100" => {
            result.style = Some(NumberStyle::Percent);
            result.scale = Some(100.0);
        }
        "currency" => {
            result.style = Some(NumberStyle::Currency);
            result.currency = Some(required_option(token)?.to_string());
        }
        "measure-unit" | "unit" => {
            result.style = Some(NumberStyle::Unit);
            result.unit = Some(icu_unit_to_ecma(required_option(token)?).to_string());
        }
        "group-off" | ",_" => result.use_grouping = Some(UseGrouping::Enabled(false)),
        "group-min2" | ",?" => result.use_grouping = Some(UseGrouping::Mode(GroupingMode::Min2)),
        "group-auto" => result.use_grouping = Some(UseGrouping::Mode(GroupingMode::Auto)),
        "group-on-aligned" | ",!" | "group-thousands" | ",=" => {
            result.use_grouping = Some(UseGrouping::Mode(GroupingMode::Always))
        }
        "precision-integer" | "." => result.maximum_fraction_digits = Some(0),
        "compact-short" | "K" => {
            result.notation = Some(Notation::Compact);
            result.compact_display = Some(CompactDisplay::Short);
        }
        "compact-long" | "KK" => {
            result.notation = Some(Notation::Compact);
            result.compact_display = Some(CompactDisplay::Long);
        }
        "scientific" | "engineering" => {
            result.notation = Some(if token.stem == "scientific" {
                Notation::Scientific
            } else {
                Notation::Engineering
            });
            for option in &token.options {
                if let Some(sign) = sign_options(option) {
                    sign.apply(result);
                }
            }
        }
        "notation-simple" => result.notation = Some(Notation::Standard),
        "unit-width-narrow" => {
            result.currency_display = Some(CurrencyDisplay::NarrowSymbol);
            result.unit_display = Some(UnitDisplay::Narrow);
        }
        "unit-width-short" => {
            result.currency_display = Some(CurrencyDisplay::Symbol);
            result.unit_display = Some(UnitDisplay::Short);
        }
        "unit-width-full-name" => {
            result.currency_display = Some(CurrencyDisplay::Name);
            result.unit_display = Some(UnitDisplay::Long);
        }
        "unit-width-iso-code" => result.currency_display = Some(CurrencyDisplay::Code),
        "scale" => {
            let option = required_option(token)?;
            let factor = option
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .ok_or_else(|| SkeletonError::InvalidOption {
                    stem: token.stem.clone(),
                    option: option.to_string(),
                    reason: "scale must be a finite number",
                })?;
            result.scale = Some(factor);
        }
        "rounding-mode-floor" => result.rounding_mode = Some(RoundingMode::Floor),
        "rounding-mode-ceiling" => result.rounding_mode = Some(RoundingMode::Ceil),
        "rounding-mode-down" => result.rounding_mode = Some(RoundingMode::Trunc),
        "rounding-mode-up" => result.rounding_mode = Some(RoundingMode::Expand),
        "rounding-mode-half-even" => result.rounding_mode = Some(RoundingMode::HalfEven),
        "rounding-mode-half-down" => result.rounding_mode = Some(RoundingMode::HalfTrunc),
        "rounding-mode-half-up" => result.rounding_mode = Some(RoundingMode::HalfExpand),
        "rounding-mode-half-ceiling" => result.rounding_mode = Some(RoundingMode::HalfCeil),
        "rounding-mode-half-floor" => result.rounding_mode = Some(RoundingMode::HalfFloor),
        "integer-width" => apply_integer_width(result, token)?,
        _ => return Ok(false),
    }
    Ok(true)
}

fn required_option(token: &NumberSkeletonToken) -> Result<&str, SkeletonError> {
    token
        .options
        .first()
        .map(String::as_str)
        .ok_or_else(|| SkeletonError::MissingOption {
            stem: token.stem.clone(),
        })
}

fn single_optional_option(token: &NumberSkeletonToken) -> Result<Option<&str>, SkeletonError> {
    if token.options.len() > 1 {
        return Err(SkeletonError::TooManyOptions {
            stem: token.stem.clone(),
            count: token.options.len(),
        });
    }
    Ok(token.options.first().map(String::as_str))
}

/// `length-meter` → `meter`
fn icu_unit_to_ecma(unit: &str) -> &str {
    unit.split_once('-').map_or(unit, |(_, rest)| rest)
}

fn digit_count(digits: &str) -> u32 {
    u32::try_from(digits.len()).unwrap_or(u32::MAX)
}

fn apply_integer_width(
    result: &mut NumberFormatOptions,
    token: &NumberSkeletonToken,
) -> Result<(), SkeletonError> {
    let option = match single_optional_option(token)? {
        Some(option) => option,
        None => {
            return Err(SkeletonError::MissingOption {
                stem: token.stem.clone(),
            })
        }
    };

    let invalid = |reason| SkeletonError::InvalidOption {
        stem: token.stem.clone(),
        option: option.to_string(),
        reason,
    };

    let caps = INTEGER_WIDTH
        .captures(option)
        .ok_or_else(|| invalid("expected `*0+`, `#+0+`, or `0+`"))?;

    if let Some(min) = caps.get(1) {
        result.minimum_integer_digits = Some(digit_count(min.as_str()));
        Ok(())
    } else if caps.get(2).is_some() {
        Err(invalid("maximum integer digits are not supported"))
    } else {
        Err(invalid("exact integer digits are not supported"))
    }
}

fn apply_fraction_precision(
    result: &mut NumberFormatOptions,
    token: &NumberSkeletonToken,
    caps: &Captures<'_>,
) -> Result<(), SkeletonError> {
    let option = single_optional_option(token)?;

    let (min, max) = fraction_digits(caps);
    if min.is_some() {
        result.minimum_fraction_digits = min;
    }
    if max.is_some() {
        result.maximum_fraction_digits = max;
    }

    match option {
        None => {}
        Some("w") => result.trailing_zero_display = Some(TrailingZeroDisplay::StripIfInteger),
        Some(option) => {
            let caps = SIGNIFICANT_PRECISION.captures(option).ok_or_else(|| {
                SkeletonError::InvalidOption {
                    stem: token.stem.clone(),
                    option: option.to_string(),
                    reason: "expected `w` or a significant-digits suffix",
                }
            })?;
            apply_significant_precision(result, &caps);
        }
    }
    Ok(())
}

/// Minimum and maximum fraction digits for a fraction-precision stem.
fn fraction_digits(caps: &Captures<'_>) -> (Option<u32>, Option<u32>) {
    let len = |i: usize| caps.get(i).map(|m| digit_count(m.as_str()));

    if let (Some(zeros), Some(hashes)) = (len(4), len(5)) {
        // .00##
        (Some(zeros), Some(zeros + hashes))
    } else if let Some(hashes) = len(3) {
        // .###
        (Some(0), Some(hashes))
    } else if caps.get(2).is_some() {
        // .00*
        (len(1), None)
    } else {
        // .00
        (len(1), len(1))
    }
}

fn apply_significant_precision(result: &mut NumberFormatOptions, caps: &Captures<'_>) {
    let at_signs = caps.get(1).map_or(0, |m| digit_count(m.as_str()));

    match caps.get(2).map(|m| m.as_str()) {
        // @@@
        None => {
            result.minimum_significant_digits = Some(at_signs);
            result.maximum_significant_digits = Some(at_signs);
        }
        // @@+
        Some("+") => result.minimum_significant_digits = Some(at_signs),
        // @@##
        Some(hashes) => {
            result.minimum_significant_digits = Some(at_signs);
            result.maximum_significant_digits = Some(at_signs + digit_count(hashes));
        }
    }

    match caps.get(3).map(|m| m.as_str()) {
        Some("r") => result.rounding_priority = Some(RoundingPriority::MorePrecision),
        Some("s") => result.rounding_priority = Some(RoundingPriority::LessPrecision),
        _ => {}
    }
}

#[derive(Debug, Default)]
struct SignOptions {
    sign_display: Option<SignDisplay>,
    currency_sign: Option<CurrencySign>,
}

impl SignOptions {
    fn apply(self, result: &mut NumberFormatOptions) {
        if self.sign_display.is_some() {
            result.sign_display = self.sign_display;
        }
        if self.currency_sign.is_some() {
            result.currency_sign = self.currency_sign;
        }
    }
}

fn sign_options(stem: &str) -> Option<SignOptions> {
    let (sign_display, accounting) = match stem {
        "sign-auto" => (Some(SignDisplay::Auto), false),
        "sign-accounting" | "()" => (None, true),
        "sign-always" | "+!" => (Some(SignDisplay::Always), false),
        "sign-accounting-always" | "()!" => (Some(SignDisplay::Always), true),
        "sign-except-zero" | "+?" => (Some(SignDisplay::ExceptZero), false),
        "sign-accounting-except-zero" | "()?" => (Some(SignDisplay::ExceptZero), true),
        "sign-negative" | "+-" => (Some(SignDisplay::Negative), false),
        "sign-never" | "+_" => (Some(SignDisplay::Never), false),
        _ => return None,
    };
    Some(SignOptions {
        sign_display,
        currency_sign: accounting.then_some(CurrencySign::Accounting),
    })
}

struct ConciseNotation {
    notation: Notation,
    sign_display: Option<SignDisplay>,
    minimum_integer_digits: u32,
}

/// `E0`, `EE00`, `E+!00`, `EE+?0`
fn concise_notation(stem: &str) -> Result<Option<ConciseNotation>, SkeletonError> {
    let (notation, rest) = if let Some(rest) = stem.strip_prefix("EE") {
        (Notation::Engineering, rest)
    } else if let Some(rest) = stem.strip_prefix('E') {
        (Notation::Scientific, rest)
    } else {
        return Ok(None);
    };

    let (sign_display, digits) = if let Some(digits) = rest.strip_prefix("+!") {
        (Some(SignDisplay::Always), digits)
    } else if let Some(digits) = rest.strip_prefix("+?") {
        (Some(SignDisplay::ExceptZero), digits)
    } else {
        (None, rest)
    };

    if !CONCISE_INTEGER_WIDTH.is_match(digits) {
        return Err(SkeletonError::MalformedNotation {
            stem: stem.to_string(),
        });
    }

    Ok(Some(ConciseNotation {
        notation,
        sign_display,
        minimum_integer_digits: digit_count(digits),
    }))
}

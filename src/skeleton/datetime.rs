//! Date-time skeletons
//!
//! Maps CLDR field-letter patterns (`yyyyMMdd`, `EEEE h:mm a`) to
//! [`DateTimeFormatOptions`]. Text inside apostrophes is literal and never
//! read as a field; `''` is an escaped apostrophe.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::skeleton::error::SkeletonError;

// ============================================================================
// OPTIONS RECORD
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericWidth {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MonthWidth {
    Numeric,
    Short,
    Long,
    Narrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextWidth {
    Short,
    Long,
    Narrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourCycle {
    H11,
    H12,
    H23,
    H24,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeZoneNameStyle {
    Short,
    Long,
}

/// Interpreted date-time skeleton, shaped like `Intl.DateTimeFormat` options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeFormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era: Option<TextWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<TextWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour12: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_cycle: Option<HourCycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone_name: Option<TimeZoneNameStyle>,
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// A maximal run of one field letter, e.g. `('M', 3)` for `MMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub letter: char,
    pub width: usize,
}

/// Splits a skeleton into field runs, skipping quoted literals and any
/// character that is not a CLDR field letter.
///
/// Runs longer than the letter's widest form are split, so `ddd` yields
/// `dd` and `d`.
pub fn fields(skeleton: &str) -> Result<Vec<Field>, SkeletonError> {
    let chars: Vec<char> = skeleton.chars().collect();
    let mut fields = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '\'' {
            i = skip_quoted(&chars, i).ok_or_else(|| SkeletonError::UnclosedQuote {
                skeleton: skeleton.to_string(),
            })?;
            continue;
        }

        let Some(max_width) = max_field_width(ch) else {
            i += 1;
            continue;
        };

        let run = chars[i..].iter().take_while(|&&c| c == ch).count();
        let mut remaining = run;
        while remaining > 0 {
            let width = remaining.min(max_width);
            fields.push(Field { letter: ch, width });
            remaining -= width;
        }
        i += run;
    }

    Ok(fields)
}

/// Interprets a date-time skeleton into [`DateTimeFormatOptions`].
///
/// # Examples
///
/// ```rust
/// use icu_messageformat::skeleton::datetime::{interpret, MonthWidth, NumericWidth};
/// let options = interpret("yyyyMMdd").unwrap();
/// assert_eq!(options.year, Some(NumericWidth::Numeric));
/// assert_eq!(options.month, Some(MonthWidth::Numeric));
/// assert_eq!(options.day, Some(NumericWidth::TwoDigit));
/// ```
pub fn interpret(skeleton: &str) -> Result<DateTimeFormatOptions, SkeletonError> {
    trace!(skeleton, "interpreting date-time skeleton");
    let mut result = DateTimeFormatOptions::default();
    for field in fields(skeleton)? {
        apply_field(&mut result, field)?;
    }
    Ok(result)
}

// ============================================================================
// HELPERS
// ============================================================================

/// Index just past the quoted literal starting at `start`, or `None` if the
/// quote is never closed.
fn skip_quoted(chars: &[char], start: usize) -> Option<usize> {
    // ''
    if chars.get(start + 1) == Some(&'\'') {
        return Some(start + 2);
    }
    let mut i = start + 1;
    while i < chars.len() {
        if chars[i] == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                i += 2;
                continue;
            }
            return Some(i + 1);
        }
        i += 1;
    }
    None
}

fn max_field_width(letter: char) -> Option<usize> {
    let width = match letter {
        'G' | 'U' | 'q' | 'Q' | 'M' | 'L' | 'a' | 'b' | 'B' => 5,
        'y' | 'Y' | 'u' | 'r' | 'g' | 'S' | 'A' | 'j' | 'J' | 'C' => usize::MAX,
        'E' | 'e' | 'c' => 6,
        'd' | 'w' | 'h' | 'H' | 'k' | 'K' | 'm' | 's' => 2,
        'D' => 3,
        'F' | 'W' => 1,
        'z' | 'Z' | 'O' | 'v' | 'V' | 'x' | 'X' => 4,
        _ => return None,
    };
    Some(width)
}

fn numeric_width(width: usize) -> NumericWidth {
    if width == 2 {
        NumericWidth::TwoDigit
    } else {
        NumericWidth::Numeric
    }
}

fn text_width(width: usize) -> TextWidth {
    match width {
        4 => TextWidth::Long,
        5 => TextWidth::Narrow,
        _ => TextWidth::Short,
    }
}

fn unsupported(field: char, message: &'static str) -> SkeletonError {
    SkeletonError::UnsupportedField { field, message }
}

fn apply_field(result: &mut DateTimeFormatOptions, field: Field) -> Result<(), SkeletonError> {
    let Field { letter, width } = field;
    match letter {
        'G' => result.era = Some(text_width(width)),
        'y' => result.year = Some(numeric_width(width)),
        'Y' | 'u' | 'U' | 'r' => {
            return Err(unsupported(
                letter,
                "`Y/u/U/r` (year) patterns are not supported, use `y` instead",
            ))
        }
        'q' | 'Q' => {
            return Err(unsupported(letter, "`q/Q` (quarter) patterns are not supported"))
        }
        'M' | 'L' => {
            result.month = Some(match width {
                1 | 2 => MonthWidth::Numeric,
                3 => MonthWidth::Short,
                4 => MonthWidth::Long,
                _ => MonthWidth::Narrow,
            })
        }
        'w' | 'W' => return Err(unsupported(letter, "`w/W` (week) patterns are not supported")),
        'd' => result.day = Some(numeric_width(width)),
        'D' | 'F' | 'g' => {
            return Err(unsupported(
                letter,
                "`D/F/g` (day) patterns are not supported, use `d` instead",
            ))
        }
        'E' => result.weekday = Some(text_width(width)),
        'e' | 'c' => {
            if width < 4 {
                return Err(unsupported(
                    letter,
                    "`e..eee`/`c..ccc` (weekday) patterns are not supported, use `E` instead",
                ));
            }
            result.weekday = Some(text_width(width));
        }
        'a' => result.hour12 = Some(true),
        'b' | 'B' => {
            return Err(unsupported(
                letter,
                "`b/B` (period) patterns are not supported, use `a` instead",
            ))
        }
        'h' | 'H' | 'K' | 'k' => {
            result.hour_cycle = Some(match letter {
                'h' => HourCycle::H12,
                'H' => HourCycle::H23,
                'K' => HourCycle::H11,
                _ => HourCycle::H24,
            });
            result.hour = Some(numeric_width(width));
        }
        'j' | 'J' | 'C' => {
            return Err(unsupported(
                letter,
                "`j/J/C` (hour) patterns are not supported, use `h/H/K/k` instead",
            ))
        }
        'm' => result.minute = Some(numeric_width(width)),
        's' => result.second = Some(numeric_width(width)),
        'S' | 'A' => {
            return Err(unsupported(
                letter,
                "`S/A` (second) patterns are not supported, use `s` instead",
            ))
        }
        'z' => {
            result.time_zone_name = Some(if width < 4 {
                TimeZoneNameStyle::Short
            } else {
                TimeZoneNameStyle::Long
            })
        }
        'Z' | 'O' | 'v' | 'V' | 'X' | 'x' => {
            return Err(unsupported(
                letter,
                "`Z/O/v/V/X/x` (timeZone) patterns are not supported, use `z` instead",
            ))
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_split_runs_by_max_width() {
        let fields = fields("dddMMMMMM").unwrap();
        let widths: Vec<(char, usize)> = fields.iter().map(|f| (f.letter, f.width)).collect();
        assert_eq!(widths, vec![('d', 2), ('d', 1), ('M', 5), ('M', 1)]);
    }

    #[test]
    fn test_fields_skip_quoted_literals() {
        let fields = fields("h 'o''clock' a").unwrap();
        let letters: String = fields.iter().map(|f| f.letter).collect();
        assert_eq!(letters, "ha");
    }

    #[test]
    fn test_unclosed_quote_is_rejected() {
        assert!(matches!(
            fields("yyyy 'at"),
            Err(SkeletonError::UnclosedQuote { .. })
        ));
    }

    #[test]
    fn test_hour_cycles_and_period() {
        let o = interpret("hhmma").unwrap();
        assert_eq!(o.hour_cycle, Some(HourCycle::H12));
        assert_eq!(o.hour, Some(NumericWidth::TwoDigit));
        assert_eq!(o.minute, Some(NumericWidth::TwoDigit));
        assert_eq!(o.hour12, Some(true));
        assert_eq!(interpret("H").unwrap().hour_cycle, Some(HourCycle::H23));
        assert_eq!(interpret("k").unwrap().hour_cycle, Some(HourCycle::H24));
        assert_eq!(interpret("K").unwrap().hour_cycle, Some(HourCycle::H11));
    }

    #[test]
    fn test_text_widths() {
        let o = interpret("GGGGEEEEE").unwrap();
        assert_eq!(o.era, Some(TextWidth::Long));
        assert_eq!(o.weekday, Some(TextWidth::Narrow));
        assert_eq!(interpret("MMMM").unwrap().month, Some(MonthWidth::Long));
        assert_eq!(interpret("zzzz").unwrap().time_zone_name, Some(TimeZoneNameStyle::Long));
    }

    #[test]
    fn test_unsupported_letters_name_substitute() {
        let err = interpret("YYYY").unwrap_err();
        assert!(err.to_string().contains("use `y` instead"));
        assert!(matches!(
            interpret("eee"),
            Err(SkeletonError::UnsupportedField { field: 'e', .. })
        ));
        assert!(interpret("jj").is_err());
        assert!(interpret("Z").is_err());
    }
}

// tests/skeleton_tests.rs

use icu_messageformat::skeleton::datetime::{
    self, MonthWidth, NumericWidth, TextWidth, TimeZoneNameStyle,
};
use icu_messageformat::skeleton::number::{
    self, CompactDisplay, CurrencyDisplay, CurrencySign, GroupingMode, Notation,
    NumberFormatOptions, NumberStyle, RoundingMode, RoundingPriority, SignDisplay,
    TrailingZeroDisplay, UnitDisplay, UseGrouping,
};
use icu_messageformat::skeleton::SkeletonError;
use rstest::rstest;

fn number_options(skeleton: &str) -> NumberFormatOptions {
    let tokens = number::tokenize(skeleton).unwrap();
    number::interpret(&tokens).unwrap()
}

/// Default options with only the fields set by `f`.
fn only(f: impl FnOnce(&mut NumberFormatOptions)) -> NumberFormatOptions {
    let mut options = NumberFormatOptions::default();
    f(&mut options);
    options
}

// ---
// Number skeletons
// ---

#[test]
fn test_percent_with_fraction_precision() {
    let options = number_options("percent .##");
    assert_eq!(options.style, Some(NumberStyle::Percent));
    assert_eq!(options.minimum_fraction_digits, Some(0));
    assert_eq!(options.maximum_fraction_digits, Some(2));
}

#[test]
fn test_currency_and_compact() {
    let options = number_options("currency/GBP compact-short");
    assert_eq!(options.style, Some(NumberStyle::Currency));
    assert_eq!(options.currency.as_deref(), Some("GBP"));
    assert_eq!(options.notation, Some(Notation::Compact));
    assert_eq!(options.compact_display, Some(CompactDisplay::Short));
}

#[test]
fn test_measure_unit_and_scale() {
    let options = number_options("measure-unit/length-meter scale/0.5");
    assert_eq!(options.style, Some(NumberStyle::Unit));
    assert_eq!(options.unit.as_deref(), Some("meter"));
    assert_eq!(options.scale, Some(0.5));
}

#[rstest]
#[case(".00", Some(2), Some(2))]
#[case(".###", Some(0), Some(3))]
#[case(".0##", Some(1), Some(3))]
fn test_fraction_digits(#[case] stem: &str, #[case] min: Option<u32>, #[case] max: Option<u32>) {
    let options = number_options(stem);
    assert_eq!(options.minimum_fraction_digits, min, "stem {stem}");
    assert_eq!(options.maximum_fraction_digits, max, "stem {stem}");
}

#[test]
fn test_significant_digits_with_rounding_priority() {
    let options = number_options("@@#r");
    assert_eq!(options.minimum_significant_digits, Some(2));
    assert_eq!(options.maximum_significant_digits, Some(3));
    assert_eq!(options.rounding_priority, Some(RoundingPriority::MorePrecision));
}

#[rstest]
#[case("percent", only(|o| o.style = Some(NumberStyle::Percent)))]
#[case("%", only(|o| o.style = Some(NumberStyle::Percent)))]
#[case("%x100", only(|o| {
    o.style = Some(NumberStyle::Percent);
    o.scale = Some(100.0);
}))]
#[case("currency/EUR", only(|o| {
    o.style = Some(NumberStyle::Currency);
    o.currency = Some("EUR".into());
}))]
#[case("measure-unit/length-meter", only(|o| {
    o.style = Some(NumberStyle::Unit);
    o.unit = Some("meter".into());
}))]
#[case("unit/mass-kilogram", only(|o| {
    o.style = Some(NumberStyle::Unit);
    o.unit = Some("kilogram".into());
}))]
#[case("precision-integer", only(|o| o.maximum_fraction_digits = Some(0)))]
#[case(".", only(|o| o.maximum_fraction_digits = Some(0)))]
#[case("scale/0.01", only(|o| o.scale = Some(0.01)))]
#[case("integer-width/*000", only(|o| o.minimum_integer_digits = Some(3)))]
#[case("0000", only(|o| o.minimum_integer_digits = Some(4)))]
#[case(".00/w", only(|o| {
    o.minimum_fraction_digits = Some(2);
    o.maximum_fraction_digits = Some(2);
    o.trailing_zero_display = Some(TrailingZeroDisplay::StripIfInteger);
}))]
#[case(".##/@@@", only(|o| {
    o.minimum_fraction_digits = Some(0);
    o.maximum_fraction_digits = Some(2);
    o.minimum_significant_digits = Some(3);
    o.maximum_significant_digits = Some(3);
}))]
#[case("E0", only(|o| {
    o.notation = Some(Notation::Scientific);
    o.minimum_integer_digits = Some(1);
}))]
#[case("EE+!00", only(|o| {
    o.notation = Some(Notation::Engineering);
    o.sign_display = Some(SignDisplay::Always);
    o.minimum_integer_digits = Some(2);
}))]
#[case("scientific/sign-always", only(|o| {
    o.notation = Some(Notation::Scientific);
    o.sign_display = Some(SignDisplay::Always);
}))]
#[case("engineering/()?", only(|o| {
    o.notation = Some(Notation::Engineering);
    o.sign_display = Some(SignDisplay::ExceptZero);
    o.currency_sign = Some(CurrencySign::Accounting);
}))]
fn test_number_stems(#[case] stem: &str, #[case] expected: NumberFormatOptions) {
    assert_eq!(number_options(stem), expected, "stem {stem}");
}

#[rstest]
#[case("group-off", UseGrouping::Enabled(false))]
#[case(",_", UseGrouping::Enabled(false))]
#[case("group-min2", UseGrouping::Mode(GroupingMode::Min2))]
#[case(",?", UseGrouping::Mode(GroupingMode::Min2))]
#[case("group-auto", UseGrouping::Mode(GroupingMode::Auto))]
#[case("group-on-aligned", UseGrouping::Mode(GroupingMode::Always))]
#[case(",!", UseGrouping::Mode(GroupingMode::Always))]
#[case("group-thousands", UseGrouping::Mode(GroupingMode::Always))]
#[case(",=", UseGrouping::Mode(GroupingMode::Always))]
fn test_grouping_stems(#[case] stem: &str, #[case] grouping: UseGrouping) {
    let expected = only(|o| o.use_grouping = Some(grouping));
    assert_eq!(number_options(stem), expected, "stem {stem}");
}

#[rstest]
#[case("compact-short", Notation::Compact, Some(CompactDisplay::Short))]
#[case("K", Notation::Compact, Some(CompactDisplay::Short))]
#[case("compact-long", Notation::Compact, Some(CompactDisplay::Long))]
#[case("KK", Notation::Compact, Some(CompactDisplay::Long))]
#[case("scientific", Notation::Scientific, None)]
#[case("engineering", Notation::Engineering, None)]
#[case("notation-simple", Notation::Standard, None)]
fn test_notation_stems(
    #[case] stem: &str,
    #[case] notation: Notation,
    #[case] compact: Option<CompactDisplay>,
) {
    let expected = only(|o| {
        o.notation = Some(notation);
        o.compact_display = compact;
    });
    assert_eq!(number_options(stem), expected, "stem {stem}");
}

#[rstest]
#[case("unit-width-narrow", CurrencyDisplay::NarrowSymbol, Some(UnitDisplay::Narrow))]
#[case("unit-width-short", CurrencyDisplay::Symbol, Some(UnitDisplay::Short))]
#[case("unit-width-full-name", CurrencyDisplay::Name, Some(UnitDisplay::Long))]
#[case("unit-width-iso-code", CurrencyDisplay::Code, None)]
fn test_unit_width_stems(
    #[case] stem: &str,
    #[case] currency: CurrencyDisplay,
    #[case] unit: Option<UnitDisplay>,
) {
    let expected = only(|o| {
        o.currency_display = Some(currency);
        o.unit_display = unit;
    });
    assert_eq!(number_options(stem), expected, "stem {stem}");
}

#[rstest]
#[case("rounding-mode-floor", RoundingMode::Floor)]
#[case("rounding-mode-ceiling", RoundingMode::Ceil)]
#[case("rounding-mode-down", RoundingMode::Trunc)]
#[case("rounding-mode-up", RoundingMode::Expand)]
#[case("rounding-mode-half-even", RoundingMode::HalfEven)]
#[case("rounding-mode-half-down", RoundingMode::HalfTrunc)]
#[case("rounding-mode-half-up", RoundingMode::HalfExpand)]
#[case("rounding-mode-half-ceiling", RoundingMode::HalfCeil)]
#[case("rounding-mode-half-floor", RoundingMode::HalfFloor)]
fn test_rounding_mode_stems(#[case] stem: &str, #[case] mode: RoundingMode) {
    let expected = only(|o| o.rounding_mode = Some(mode));
    assert_eq!(number_options(stem), expected, "stem {stem}");
}

#[rstest]
#[case("sign-auto", Some(SignDisplay::Auto), None)]
#[case("sign-accounting", None, Some(CurrencySign::Accounting))]
#[case("()", None, Some(CurrencySign::Accounting))]
#[case("sign-always", Some(SignDisplay::Always), None)]
#[case("+!", Some(SignDisplay::Always), None)]
#[case("sign-accounting-always", Some(SignDisplay::Always), Some(CurrencySign::Accounting))]
#[case("()!", Some(SignDisplay::Always), Some(CurrencySign::Accounting))]
#[case("sign-except-zero", Some(SignDisplay::ExceptZero), None)]
#[case("+?", Some(SignDisplay::ExceptZero), None)]
#[case(
    "sign-accounting-except-zero",
    Some(SignDisplay::ExceptZero),
    Some(CurrencySign::Accounting)
)]
#[case("()?", Some(SignDisplay::ExceptZero), Some(CurrencySign::Accounting))]
#[case("sign-negative", Some(SignDisplay::Negative), None)]
#[case("+-", Some(SignDisplay::Negative), None)]
#[case("sign-never", Some(SignDisplay::Never), None)]
#[case("+_", Some(SignDisplay::Never), None)]
fn test_sign_stems(
    #[case] stem: &str,
    #[case] sign: Option<SignDisplay>,
    #[case] currency_sign: Option<CurrencySign>,
) {
    let expected = only(|o| {
        o.sign_display = sign;
        o.currency_sign = currency_sign;
    });
    assert_eq!(number_options(stem), expected, "stem {stem}");
}

#[test]
fn test_unknown_stems_are_ignored() {
    assert_eq!(number_options("frobnicate"), NumberFormatOptions::default());
}

#[test]
fn test_tokenize_errors() {
    assert_eq!(number::tokenize(""), Err(SkeletonError::Empty));
    assert!(matches!(
        number::tokenize("currency/"),
        Err(SkeletonError::EmptyOption { .. })
    ));
}

#[test]
fn test_interpret_errors() {
    let missing = number::tokenize("currency").unwrap();
    assert!(matches!(
        number::interpret(&missing),
        Err(SkeletonError::MissingOption { .. })
    ));

    let too_many = number::tokenize("integer-width/*00/*0").unwrap();
    assert!(matches!(
        number::interpret(&too_many),
        Err(SkeletonError::TooManyOptions { .. })
    ));
}

#[rstest]
#[case("scale/abc")]
#[case("scale/inf")]
#[case(".##/foo")]
#[case("integer-width/##00")]
#[case("integer-width/000")]
fn test_invalid_stem_options(#[case] skeleton: &str) {
    let tokens = number::tokenize(skeleton).unwrap();
    let err = number::interpret(&tokens).unwrap_err();
    assert!(
        matches!(err, SkeletonError::InvalidOption { .. }),
        "{skeleton}: {err:?}"
    );
}

#[test]
fn test_malformed_concise_notation() {
    let tokens = number::tokenize("E+x0").unwrap();
    assert!(matches!(
        number::interpret(&tokens),
        Err(SkeletonError::MalformedNotation { .. })
    ));
}

// ---
// Date-time skeletons
// ---

#[test]
fn test_year_month_day() {
    let options = datetime::interpret("yyyyMMdd").unwrap();
    assert_eq!(options.year, Some(NumericWidth::Numeric));
    assert_eq!(options.month, Some(MonthWidth::Numeric));
    assert_eq!(options.day, Some(NumericWidth::TwoDigit));
}

#[rstest]
#[case("M", MonthWidth::Numeric)]
#[case("MMM", MonthWidth::Short)]
#[case("MMMM", MonthWidth::Long)]
#[case("MMMMM", MonthWidth::Narrow)]
fn test_month_widths(#[case] skeleton: &str, #[case] width: MonthWidth) {
    assert_eq!(datetime::interpret(skeleton).unwrap().month, Some(width));
}

#[test]
fn test_weekday_and_era() {
    let options = datetime::interpret("GGGG EEE").unwrap();
    assert_eq!(options.era, Some(TextWidth::Long));
    assert_eq!(options.weekday, Some(TextWidth::Short));
}

#[rstest]
#[case("eeee", TextWidth::Long)]
#[case("ccccc", TextWidth::Narrow)]
#[case("eeeeee", TextWidth::Short)]
#[case("EEEEE", TextWidth::Narrow)]
fn test_local_weekday_widths(#[case] skeleton: &str, #[case] width: TextWidth) {
    assert_eq!(datetime::interpret(skeleton).unwrap().weekday, Some(width));
}

#[rstest]
#[case("z", TimeZoneNameStyle::Short)]
#[case("zzz", TimeZoneNameStyle::Short)]
#[case("zzzz", TimeZoneNameStyle::Long)]
fn test_time_zone_name(#[case] skeleton: &str, #[case] style: TimeZoneNameStyle) {
    assert_eq!(datetime::interpret(skeleton).unwrap().time_zone_name, Some(style));
}

#[test]
fn test_quoted_literals_are_skipped() {
    let options = datetime::interpret("h 'hours of' a").unwrap();
    assert_eq!(options.hour12, Some(true));
    assert!(options.minute.is_none());
    assert!(options.second.is_none());
}

#[rstest]
#[case("YYYY", 'Y')]
#[case("u", 'u')]
#[case("U", 'U')]
#[case("r", 'r')]
#[case("q", 'q')]
#[case("QQQ", 'Q')]
#[case("ww", 'w')]
#[case("W", 'W')]
#[case("D", 'D')]
#[case("F", 'F')]
#[case("g", 'g')]
#[case("b", 'b')]
#[case("BBBB", 'B')]
#[case("jj", 'j')]
#[case("J", 'J')]
#[case("C", 'C')]
#[case("SSS", 'S')]
#[case("A", 'A')]
#[case("ZZZZ", 'Z')]
#[case("O", 'O')]
#[case("v", 'v')]
#[case("VV", 'V')]
#[case("X", 'X')]
#[case("x", 'x')]
#[case("e", 'e')]
#[case("ccc", 'c')]
fn test_unsupported_fields(#[case] skeleton: &str, #[case] letter: char) {
    let err = datetime::interpret(skeleton).unwrap_err();
    assert!(
        matches!(err, SkeletonError::UnsupportedField { field, .. } if field == letter),
        "{skeleton}: {err:?}"
    );
}

#[rstest]
#[case("b")]
#[case("B")]
fn test_day_period_points_at_am_pm(#[case] skeleton: &str) {
    let err = datetime::interpret(skeleton).unwrap_err();
    assert!(err.to_string().contains("use `a` instead"), "{err}");
}

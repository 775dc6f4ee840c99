//! Validation of the raw `number` query parameter.

use crate::errors::ClassifyError;

/// Smallest `f64` strictly above the `i64` range; `i64::MAX as f64` rounds up to this value.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;
const I64_LOWER_BOUND: f64 = -9_223_372_036_854_775_808.0;

/// Parses the raw `number` query parameter into an integer.
///
/// Integer literals such as `"5"` or `"-12"` are accepted directly. Decimal
/// text is accepted only when it carries no fractional part, so `"5.0"` and
/// `"1e3"` succeed while `"5.5"` is rejected with [`ClassifyError::NonInteger`].
/// Text that is not numeric at all, including a missing parameter, is
/// rejected with [`ClassifyError::NonNumeric`].  Underscores are accepted as
/// digit separators when they sit between two digits, as in `"1_000"`.
///
/// ```
/// # use numclass::{ClassifyError, parse_number};
/// assert_eq!(parse_number(Some("5.0")), Ok(5));
/// assert_eq!(parse_number(Some("5.5")), Err(ClassifyError::NonInteger));
/// assert_eq!(parse_number(Some("abc")), Err(ClassifyError::NonNumeric));
/// ```
pub fn parse_number(raw: Option<&str>) -> Result<i64, ClassifyError> {
    let text = raw.ok_or(ClassifyError::NonNumeric)?.trim();
    let text = strip_digit_separators(text).ok_or(ClassifyError::NonNumeric)?;
    let text = text.as_str();

    if let Ok(value) = text.parse::<i64>() {
        return Ok(value);
    }

    let value: f64 = text.parse().map_err(|_| ClassifyError::NonNumeric)?;
    integral_value(value).ok_or(ClassifyError::NonInteger)
}

/// Removes `_` separators, or returns `None` if one is not flanked by digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let is_digit = |c: Option<u8>| c.is_some_and(|c| c.is_ascii_digit());
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !is_digit(before) || !is_digit(after) {
            return None;
        }
    }
    Some(text.replace('_', ""))
}

/// Returns the integer held by `value`, if it is finite, whole, and within `i64` range.
fn integral_value(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if !(I64_LOWER_BOUND..I64_UPPER_BOUND).contains(&value) {
        return None;
    }
    Some(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literals() {
        assert_eq!(parse_number(Some("5")), Ok(5));
        assert_eq!(parse_number(Some("0")), Ok(0));
        assert_eq!(parse_number(Some("-17")), Ok(-17));
        assert_eq!(parse_number(Some("+8")), Ok(8));
    }

    #[test]
    fn integer_literals_keep_full_precision() {
        assert_eq!(
            parse_number(Some("9007199254740993")),
            Ok(9_007_199_254_740_993)
        );
        assert_eq!(parse_number(Some("-9223372036854775808")), Ok(i64::MIN));
    }

    #[test]
    fn whole_floats_are_integers() {
        assert_eq!(parse_number(Some("5.0")), Ok(5));
        assert_eq!(parse_number(Some("-3.000")), Ok(-3));
        assert_eq!(parse_number(Some("1e3")), Ok(1000));
        assert_eq!(parse_number(Some("-0.0")), Ok(0));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_number(Some("  42 ")), Ok(42));
        assert_eq!(parse_number(Some("\t6.0\n")), Ok(6));
    }

    #[test]
    fn fractional_values_are_invalid() {
        assert_eq!(parse_number(Some("5.5")), Err(ClassifyError::NonInteger));
        assert_eq!(parse_number(Some("4.5")), Err(ClassifyError::NonInteger));
        assert_eq!(parse_number(Some("-0.1")), Err(ClassifyError::NonInteger));
    }

    #[test]
    fn non_finite_values_are_invalid() {
        assert_eq!(parse_number(Some("inf")), Err(ClassifyError::NonInteger));
        assert_eq!(parse_number(Some("-infinity")), Err(ClassifyError::NonInteger));
        assert_eq!(parse_number(Some("nan")), Err(ClassifyError::NonInteger));
    }

    #[test]
    fn out_of_range_values_are_invalid() {
        assert_eq!(
            parse_number(Some("99999999999999999999")),
            Err(ClassifyError::NonInteger)
        );
        assert_eq!(parse_number(Some("1e300")), Err(ClassifyError::NonInteger));
    }

    #[test]
    fn digit_separators() {
        assert_eq!(parse_number(Some("1_000")), Ok(1000));
        assert_eq!(parse_number(Some("-1_0.0")), Ok(-10));
        assert_eq!(parse_number(Some("1_0.5")), Err(ClassifyError::NonInteger));
        assert_eq!(parse_number(Some("_100")), Err(ClassifyError::NonNumeric));
        assert_eq!(parse_number(Some("100_")), Err(ClassifyError::NonNumeric));
        assert_eq!(parse_number(Some("1__0")), Err(ClassifyError::NonNumeric));
        assert_eq!(parse_number(Some("1_.0")), Err(ClassifyError::NonNumeric));
    }

    #[test]
    fn non_numeric_text() {
        assert_eq!(parse_number(Some("abc")), Err(ClassifyError::NonNumeric));
        assert_eq!(parse_number(Some("")), Err(ClassifyError::NonNumeric));
        assert_eq!(parse_number(Some("12abc")), Err(ClassifyError::NonNumeric));
        assert_eq!(parse_number(None), Err(ClassifyError::NonNumeric));
    }
}

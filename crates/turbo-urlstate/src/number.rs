//! Lenient number parsing and formatting for query values.
//!
//! Query values are user-editable, so parsing reads the longest numeric
//! prefix instead of rejecting the whole string: `"10abc"` is `10`, and a
//! value with no leading digits is `NaN` (floats) or `None` (integers).

use std::cmp::Ordering;

/// Parse the longest leading decimal literal of `input`.
///
/// Leading whitespace is skipped; a sign, fraction, exponent and the literal
/// `Infinity` are recognised. Returns `NaN` when no digits lead the string.
pub fn parse_leading_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            end = j;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut j = end + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the leading base-10 integer of `input`.
///
/// `"2abc"` and `"2.5"` both give `Some(2)`; no leading digits gives `None`.
/// Values beyond the `i64` range saturate at `i64::MAX` / `i64::MIN`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    let negative = bytes.first() == Some(&b'-');
    match s[..end].parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Render a number the way it appears in a URL: `10`, `10.5`, `NaN`.
///
/// Finite values always use plain decimal notation, so very large or very
/// small magnitudes (`1e21`, `1e-7`) are written out in full rather than in
/// exponent form.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Locale-style string ordering.
///
/// Compares case-insensitively first; strings differing only by case put
/// lowercase first. Punctuation and digits are ordered by code point, so
/// `a-b` sorts before `a1` and `a_b`.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

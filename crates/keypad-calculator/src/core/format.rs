//! Numeral parsing and display formatting
//!
//! Operands live as text so partial input such as `"3."` can be shown while
//! it is typed. These helpers convert between that text and `f64`.

use crate::error::{CalcError, CalcResult};

/// Parses operand text as a number
///
/// Accepts partial numerals like `"5."` and `".5"`; rejects a lone `"."`,
/// a lone `"-"`, the empty string and anything that reads as NaN.
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| CalcError::invalid_operand(text))?;
    if value.is_nan() {
        return Err(CalcError::invalid_operand(text));
    }
    Ok(value)
}

/// Formats a number the shortest way that reads back to the same value
///
/// Integral values carry no decimal point and negative zero prints as `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Formats a computed result
///
/// Values with a fractional part are rounded to `decimal_places` and read
/// back, so `1.50000000` shows as `1.5` and `1/3` as `0.33333333`.
#[must_use]
pub fn format_result(value: f64, decimal_places: u32) -> String {
    if !value.is_finite() || value.fract() == 0.0 {
        return format_number(value);
    }
    to_fixed(value, decimal_places as usize)
        .parse::<f64>()
        .map_or_else(|_| format_number(value), format_number)
}

/// Digits inspected past the rounding position when looking for an exact tie
///
/// A representable tie terminates on the digit after the cut; any other
/// remainder of a value that can round up is at least 2^-104.
const TIE_GUARD_DIGITS: usize = 64;

/// Rounds to `places` decimals with exact ties going away from zero
fn to_fixed(value: f64, places: usize) -> String {
    let expanded = format!("{:.*}", places + TIE_GUARD_DIGITS, value.abs());
    let Some((whole, fraction)) = expanded.split_once('.') else {
        return format!("{value:.places$}");
    };
    let (kept, dropped) = fraction.split_at(places);
    let is_tie = dropped
        .strip_prefix('5')
        .is_some_and(|rest| rest.bytes().all(|b| b == b'0'));
    if !is_tie {
        return format!("{value:.places$}");
    }

    let mut digits: Vec<u8> = whole.bytes().chain(kept.bytes()).collect();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    let (whole, kept) = digits.split_at(digits.len() - places);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let whole: String = whole.iter().copied().map(char::from).collect();
    let kept: String = kept.iter().copied().map(char::from).collect();
    format!("{sign}{whole}.{kept}")
}

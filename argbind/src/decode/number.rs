//! Integer and floating point parsing with suffix expansion.

use std::borrow::Cow;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use super::ScalarKind;
use crate::DecodeError;

/// Expands a trailing power-of-ten suffix into decimal zeros.
///
/// The literal before the suffix must itself be an integer (an optional
/// leading `-` followed by at least one digit). Anything else is returned
/// unchanged so that the numeric parse that follows fails on its own.
pub(crate) fn expand_suffix(raw: &str) -> Cow<'_, str> {
    let Some(last) = raw.chars().last() else {
        return Cow::Borrowed(raw);
    };
    let zeros = match last {
        'K' => 3,
        'M' => 6,
        'G' => 9,
        'T' => 12,
        'P' => 15,
        'E' => 18,
        _ => return Cow::Borrowed(raw),
    };
    match raw.strip_suffix(last) {
        Some(literal) if is_integer_literal(literal) => {
            Cow::Owned(format!("{literal}{}", "0".repeat(zeros)))
        }
        _ => Cow::Borrowed(raw),
    }
}

/// Returns `true` for an optional `-` followed by one or more ASCII digits.
pub(crate) fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn int_error(raw: &str, kind: ScalarKind, err: &ParseIntError) -> DecodeError {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DecodeError::overflow(raw, kind),
        _ => DecodeError::conversion(raw, kind),
    }
}

pub(crate) fn parse_signed<T>(raw: &str, kind: ScalarKind) -> Result<T, DecodeError>
where
    T: FromStr<Err = ParseIntError>,
{
    expand_suffix(raw)
        .parse::<T>()
        .map_err(|err| int_error(raw, kind, &err))
}

/// Parses an unsigned integer, reporting negative literals as overflow.
pub(crate) fn parse_unsigned<T>(raw: &str, kind: ScalarKind) -> Result<T, DecodeError>
where
    T: FromStr<Err = ParseIntError>,
{
    let expanded = expand_suffix(raw);
    match expanded.parse::<T>() {
        Ok(value) => Ok(value),
        Err(err) => match expanded.strip_prefix('-') {
            Some(digits) if is_integer_literal(digits) => {
                if digits.bytes().all(|b| b == b'0') {
                    digits.parse::<T>().map_err(|e| int_error(raw, kind, &e))
                } else {
                    Err(DecodeError::overflow(raw, kind))
                }
            }
            _ => Err(int_error(raw, kind, &err)),
        },
    }
}

/// Parses a float, reporting finite literals that round to infinity as
/// overflow.
pub(crate) fn parse_float<T>(
    raw: &str,
    kind: ScalarKind,
    is_infinite: fn(T) -> bool,
) -> Result<T, DecodeError>
where
    T: FromStr + Copy,
{
    let value = raw
        .parse::<T>()
        .map_err(|_| DecodeError::conversion(raw, kind))?;
    if is_infinite(value) && !raw.to_ascii_lowercase().contains("inf") {
        return Err(DecodeError::overflow(raw, kind));
    }
    Ok(value)
}

// ABOUTME: Duration expression parser for activity records ("30m", "1h30m", "1.5h", "-10m")
// ABOUTME: Converts signed, fractional, multi-unit duration text into chrono TimeDelta values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Duration expressions
//!
//! Grammar: an optional sign followed by one or more `<number><unit>`
//! components, where a number is decimal with an optional fraction and the
//! unit is one of `ns`, `us`, `µs`, `μs`, `ms`, `s`, `m`, `h`. A bare `0`
//! (optionally signed) is the zero duration. Whitespace is never accepted.
//!
//! The result is accumulated as a nanosecond count that must fit a signed
//! 64-bit integer.

use chrono::TimeDelta;
use stride_core::errors::ValidationError;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Largest magnitude a negative duration may reach (`i64::MIN` nanoseconds)
const MAX_MAGNITUDE: u64 = 1 << 63;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "µs" | "μs" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Parse a duration expression such as `30m`, `1h30m` or `1.5h`
///
/// # Errors
///
/// Returns `ValidationError::InvalidDuration` when the text is empty, a
/// component lacks digits or a unit, the unit is unknown, or the total
/// overflows a signed 64-bit nanosecond count.
pub fn parse_duration(text: &str) -> Result<TimeDelta, ValidationError> {
    let invalid = |reason: &str| ValidationError::invalid_duration(text, reason);

    let (negative, mut rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(invalid("empty duration"));
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (nanos, remaining) = parse_component(rest).map_err(|reason| invalid(&reason))?;
        total = total
            .checked_add(nanos)
            .filter(|sum| *sum <= MAX_MAGNITUDE)
            .ok_or_else(|| invalid("value overflows"))?;
        rest = remaining;
    }

    let signed = if negative {
        // `total` is at most 2^63, so the negation always fits
        0_i64.wrapping_sub_unsigned(total)
    } else {
        i64::try_from(total).map_err(|_| invalid("value overflows"))?
    };
    Ok(TimeDelta::nanoseconds(signed))
}

/// Parse one `<number><unit>` component, returning its nanoseconds and the rest
fn parse_component(input: &str) -> Result<(u64, &str), String> {
    let (whole, whole_digits, rest) = leading_int(input)?;

    let (fraction, scale, fraction_digits, rest) = rest
        .strip_prefix('.')
        .map_or((0, 1.0, 0, rest), leading_fraction);

    if whole_digits == 0 && fraction_digits == 0 {
        return Err("expected a number".to_owned());
    }

    let unit_len = rest
        .find(|c: char| c == '.' || c.is_ascii_digit())
        .unwrap_or(rest.len());
    if unit_len == 0 {
        return Err("missing unit".to_owned());
    }
    let (unit, rest) = rest.split_at(unit_len);
    let unit = unit_nanos(unit).ok_or_else(|| format!("unknown unit {unit:?}"))?;

    let mut nanos = whole
        .checked_mul(unit)
        .filter(|value| *value <= MAX_MAGNITUDE)
        .ok_or_else(|| "value overflows".to_owned())?;
    if fraction > 0 {
        let fractional = (fraction as f64 * (unit as f64 / scale)) as u64;
        nanos = nanos
            .checked_add(fractional)
            .filter(|value| *value <= MAX_MAGNITUDE)
            .ok_or_else(|| "value overflows".to_owned())?;
    }
    Ok((nanos, rest))
}

/// Consume leading ASCII digits as an integer
fn leading_int(input: &str) -> Result<(u64, usize, &str), String> {
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    for byte in input.bytes().take(digits) {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(byte - b'0')))
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or_else(|| "value overflows".to_owned())?;
    }
    Ok((value, digits, &input[digits..]))
}

/// Consume fraction digits, ignoring precision beyond what fits in a `u64`
fn leading_fraction(input: &str) -> (u64, f64, usize, &str) {
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    let mut scale = 1.0;
    let mut saturated = false;
    for byte in input.bytes().take(digits) {
        if saturated {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(byte - b'0')))
        {
            Some(next) => {
                value = next;
                scale *= 10.0;
            }
            None => saturated = true,
        }
    }
    (value, scale, digits, &input[digits..])
}

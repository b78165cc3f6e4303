use crate::error::ConvError;
use crate::scan::{scan_float, scan_integer};
use crate::suffix::split_suffix;
use log::trace;
use std::num::IntErrorKind;

/// Parse a base-10 signed integer.
///
/// Leading whitespace and a sign are accepted, as with `strtol`; anything after
/// the digits is an error.
pub fn parse_integer(text: &str) -> Result<i64, ConvError> {
    let scan = scan_integer(text);
    let parsed = scan.number.parse::<i64>();
    trace!("parse_integer({:?}): prefix={:?} -> {:?}", text, scan.number, parsed);

    match parsed {
        Ok(value) if scan.rest.is_empty() => Ok(value),
        Ok(_) => Err(ConvError::TrailingCharacters {
            rest: scan.rest.to_string(),
        }),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(ConvError::Range {
                input: text.to_string(),
            }),
            // The scanner only hands over sign+digits, so anything else means it found none
            _ => Err(ConvError::NoDigits {
                input: text.to_string(),
            }),
        },
    }
}

/// Parse a floating-point number, optionally followed by a magnitude suffix.
///
/// With `allow_suffix`:
/// - `K` / `M` / `G` / `T` / `P` = ×1000^1 … ×1000^5
/// - the same letter followed by `i` = ×1024^1 … ×1024^5
///
/// Overflow to infinity and underflow below the smallest normal value are range
/// errors, matching where `strtod` sets `ERANGE`.
pub fn parse_float(text: &str, allow_suffix: bool) -> Result<f64, ConvError> {
    let out_of_range = || ConvError::Range {
        input: text.to_string(),
    };

    let (value, scan) = scan_float(text).ok_or_else(|| ConvError::NoDigits {
        input: text.to_string(),
    })?;
    trace!("parse_float({:?}): prefix={:?} -> {}", text, scan.number, value);

    let overflowed = value.is_infinite() && !scan.is_special();
    let underflowed = value.abs() < f64::MIN_POSITIVE && scan.has_nonzero_mantissa();
    if overflowed || underflowed {
        return Err(out_of_range());
    }

    if scan.rest.is_empty() {
        return Ok(value);
    }

    if !allow_suffix {
        return Err(ConvError::TrailingCharacters {
            rest: scan.rest.to_string(),
        });
    }

    let (suffix, rest) = split_suffix(scan.rest)?;
    if !rest.is_empty() {
        return Err(ConvError::TrailingCharacters {
            rest: rest.to_string(),
        });
    }

    let scaled = match suffix {
        Some(suffix) => value * suffix.multiplier(),
        None => value,
    };
    if scaled.is_infinite() && value.is_finite() {
        return Err(out_of_range());
    }

    Ok(scaled)
}

//! Prefix scanners mirroring what C's `strtol`/`strtod` would consume.
//!
//! Only ASCII bytes are ever consumed, so every split lands on a char boundary.

/// A numeric prefix split off the front of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan<'a> {
    /// The number itself, leading whitespace removed. Empty when nothing was consumed.
    pub number: &'a str,
    /// Everything after the consumed prefix.
    pub rest: &'a str,
}

impl<'a> Scan<'a> {
    fn nothing(text: &'a str) -> Self {
        Self {
            number: "",
            rest: text,
        }
    }

    fn split(text: &'a str, start: usize, end: usize) -> Self {
        Self {
            number: &text[start..end],
            rest: &text[end..],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.number.is_empty()
    }

    /// `inf`, `infinity` or `nan`, as opposed to a digit string.
    pub fn is_special(&self) -> bool {
        self.number
            .trim_start_matches(['+', '-'])
            .starts_with(|c: char| c.is_ascii_alphabetic())
    }

    /// Whether the mantissa (the part before any exponent) has a non-zero digit.
    pub fn has_nonzero_mantissa(&self) -> bool {
        let unsigned = self.number.trim_start_matches(['+', '-']);
        match hex_body(unsigned.as_bytes()) {
            Some(body) => body
                .iter()
                .take_while(|b| !matches!(b, b'p' | b'P'))
                .any(|b| b.is_ascii_hexdigit() && *b != b'0'),
            None => unsigned
                .bytes()
                .take_while(|b| !matches!(b, b'e' | b'E'))
                .any(|b| matches!(b, b'1'..=b'9')),
        }
    }
}

/// C `isspace` in the "C" locale; note `\x0b` which `is_ascii_whitespace` skips.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn skip_space(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| is_c_space(**b)).count()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

/// The bytes after a `0x`/`0X` prefix, if there is one.
fn hex_body(bytes: &[u8]) -> Option<&[u8]> {
    match bytes {
        [b'0', b'x' | b'X', body @ ..] => Some(body),
        _ => None,
    }
}

/// Scan a base-10 integer: whitespace, optional sign, at least one digit.
pub fn scan_integer(text: &str) -> Scan<'_> {
    let bytes = text.as_bytes();
    let start = skip_space(bytes);
    let pos = start + sign_len(&bytes[start..]);

    let digits = count_digits(&bytes[pos..]);
    if digits == 0 {
        return Scan::nothing(text);
    }

    Scan::split(text, start, pos + digits)
}

/// Scan and convert a float: whitespace, then a hex float (`0x1.8p3`), a decimal
/// float, `inf`/`infinity` or `nan`. Returns `None` when nothing is consumed.
///
/// Overflow and underflow are not errors here; the value comes back as
/// infinity, zero or subnormal for the caller to classify.
pub fn scan_float(text: &str) -> Option<(f64, Scan<'_>)> {
    let bytes = text.as_bytes();
    let start = skip_space(bytes);
    let body = &bytes[start..];

    let (value, len) = match scan_hex_float(body) {
        Some(found) => found,
        None => fast_float::parse_partial::<f64, _>(body).ok()?,
    };
    if len == 0 {
        return None;
    }

    // NaN carries the sign that was written, as printf shows it
    let value = if value.is_nan() {
        f64::NAN.copysign(if body.first() == Some(&b'-') { -1.0 } else { 1.0 })
    } else {
        value
    };

    Some((value, Scan::split(text, start, start + len)))
}

/// Hex float as `strtod` reads it: sign, `0x`, hex digits with at most one `.`,
/// optional binary exponent `p[+-]digits`.
///
/// Digits past the 60th bit are dropped rather than rounded.
fn scan_hex_float(bytes: &[u8]) -> Option<(f64, usize)> {
    let sign = sign_len(bytes);
    let negative = bytes.first() == Some(&b'-');
    let body = hex_body(&bytes[sign..])?;
    let body_start = bytes.len() - body.len();

    let mut pos = body_start;
    let mut mantissa: u64 = 0;
    let mut exponent: i64 = 0;
    let mut digits = 0;
    let mut seen_point = false;

    while let Some(&b) = bytes.get(pos) {
        if b == b'.' && !seen_point {
            seen_point = true;
            pos += 1;
            continue;
        }
        let digit = match (b as char).to_digit(16) {
            Some(digit) => u64::from(digit),
            None => break,
        };
        digits += 1;
        if mantissa >> 60 == 0 {
            mantissa = (mantissa << 4) | digit;
            if seen_point {
                exponent -= 4;
            }
        } else if !seen_point {
            exponent += 4;
        }
        pos += 1;
    }

    // "0x" alone: strtod takes the "0" and leaves the "x"
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'p' | b'P')) {
        let exp_sign = pos + 1;
        let exp_start = exp_sign + sign_len(&bytes[exp_sign..]);
        let exp_digits = count_digits(&bytes[exp_start..]);
        if exp_digits > 0 {
            let magnitude = bytes[exp_start..exp_start + exp_digits]
                .iter()
                .fold(0i64, |acc, b| {
                    acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
                });
            exponent = if bytes[exp_sign] == b'-' {
                exponent.saturating_sub(magnitude)
            } else {
                exponent.saturating_add(magnitude)
            };
            pos = exp_start + exp_digits;
        }
    }

    let value = scale_by_power_of_two(mantissa as f64, exponent);
    Some((if negative { -value } else { value }, pos))
}

/// `value * 2^exponent` in steps that each stay inside f64's normal range.
fn scale_by_power_of_two(mut value: f64, mut exponent: i64) -> f64 {
    while exponent != 0 && value != 0.0 && value.is_finite() {
        let step = exponent.clamp(-1000, 1000);
        value *= 2f64.powi(step as i32);
        exponent -= step;
    }
    value
}

use crate::error::ConvError;

/// Magnitude letters and the power of the base each one stands for.
pub const SUFFIXES: [(char, u32); 5] = [('K', 1), ('M', 2), ('G', 3), ('T', 4), ('P', 5)];

/// Marker after the letter that switches to binary multiples (`Ki`, `Mi`, ...).
const BINARY_MARKER: char = 'i';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// SI, powers of 1000
    Decimal,
    /// IEC, powers of 1024
    Binary,
}

impl Base {
    pub fn value(self) -> u64 {
        match self {
            Base::Decimal => 1000,
            Base::Binary => 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suffix {
    pub exponent: u32,
    pub base: Base,
}

impl Suffix {
    /// `base^exponent`. At most 1024^5 = 2^50, so exact as an `f64`.
    pub fn multiplier(&self) -> f64 {
        self.base.value().pow(self.exponent) as f64
    }
}

pub fn exponent_for(letter: char) -> Option<u32> {
    SUFFIXES
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, exponent)| *exponent)
}

/// Decode a suffix at the front of `rest`, returning it with whatever follows.
///
/// Empty input yields `None`; an unknown letter is an error rather than being
/// left for the trailing-characters check.
pub fn split_suffix(rest: &str) -> Result<(Option<Suffix>, &str), ConvError> {
    let mut chars = rest.chars();
    let letter = match chars.next() {
        Some(letter) => letter,
        None => return Ok((None, rest)),
    };

    let exponent = exponent_for(letter).ok_or(ConvError::InvalidSuffix { suffix: letter })?;
    let after = chars.as_str();

    let (base, after) = match after.strip_prefix(BINARY_MARKER) {
        Some(after) => (Base::Binary, after),
        None => (Base::Decimal, after),
    };

    Ok((Some(Suffix { exponent, base }), after))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_complete() {
        let letters: String = SUFFIXES.iter().map(|(l, _)| *l).collect();
        assert_eq!(letters, "KMGTP");
        for (i, (letter, _)) in SUFFIXES.iter().enumerate() {
            assert_eq!(exponent_for(*letter), Some(i as u32 + 1));
        }
    }

    #[test]
    fn test_unknown_letters() {
        for letter in ['k', 'm', 'E', 'X', 'B', 'i'] {
            assert_eq!(exponent_for(letter), None, "{}", letter);
        }
    }

    #[test]
    fn test_split_decimal() {
        let (suffix, rest) = split_suffix("G").unwrap();
        assert_eq!(
            suffix,
            Some(Suffix {
                exponent: 3,
                base: Base::Decimal
            })
        );
        assert_eq!(rest, "");
    }

    #[test]
    fn test_split_binary_keeps_tail() {
        let (suffix, rest) = split_suffix("TiB").unwrap();
        assert_eq!(suffix.unwrap().base, Base::Binary);
        assert_eq!(rest, "B");
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(split_suffix("").unwrap(), (None, ""));
    }

    #[test]
    fn test_split_invalid() {
        assert_eq!(
            split_suffix("X").unwrap_err(),
            ConvError::InvalidSuffix { suffix: 'X' }
        );
    }

    #[test]
    fn test_multiplier() {
        let kib = Suffix {
            exponent: 1,
            base: Base::Binary,
        };
        assert_eq!(kib.multiplier(), 1024.0);

        let pb = Suffix {
            exponent: 5,
            base: Base::Decimal,
        };
        assert_eq!(pb.multiplier(), 1e15);
    }
}

//! Kubernetes resource quantities (`10Gi`, `500M`, `1e3`) as byte counts.

use thiserror::Error;

/// A quantity string that cannot be read as a byte count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// The string has no numeric part or a malformed one.
    #[error("invalid quantity {0:?}")]
    Invalid(String),
    /// The suffix is not a known SI, binary, or exponent suffix.
    #[error("unknown quantity suffix {suffix:?} in {quantity:?}")]
    UnknownSuffix {
        /// Offending suffix.
        suffix: String,
        /// Full quantity string.
        quantity: String,
    },
    /// Byte counts cannot be negative.
    #[error("negative quantity {0:?}")]
    Negative(String),
    /// The value does not fit in 64 bits.
    #[error("quantity {0:?} is out of range")]
    Overflow(String),
}

enum Scale {
    Binary(u32),
    Decimal(i32),
}

/// Parses a quantity into bytes.
///
/// Fractional results are rounded up to the next whole byte.
///
/// # Errors
///
/// Returns a [`QuantityError`] for malformed, negative, or out-of-range input.
pub fn parse_bytes(quantity: &str) -> Result<u64, QuantityError> {
    let s = quantity.trim();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let split = unsigned
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(unsigned.len());
    let (number, suffix) = unsigned.split_at(split);

    let (int_part, frac_part) = number.split_once('.').unwrap_or((number, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(QuantityError::Invalid(quantity.to_string()));
    }
    if frac_part.contains('.') {
        return Err(QuantityError::Invalid(quantity.to_string()));
    }

    let scale = parse_suffix(suffix).ok_or_else(|| QuantityError::UnknownSuffix {
        suffix: suffix.to_string(),
        quantity: quantity.to_string(),
    })?;

    let overflow = || QuantityError::Overflow(quantity.to_string());
    let digits: u128 = format!("{int_part}{frac_part}")
        .parse()
        .map_err(|_| overflow())?;
    if negative && digits != 0 {
        return Err(QuantityError::Negative(quantity.to_string()));
    }

    let frac_len = i32::try_from(frac_part.len()).map_err(|_| overflow())?;
    let (multiplier, exponent) = match scale {
        Scale::Binary(power) => (1024u128.checked_pow(power).ok_or_else(overflow)?, -frac_len),
        Scale::Decimal(exp) => (1, exp.saturating_sub(frac_len)),
    };

    let mut numerator = digits.checked_mul(multiplier).ok_or_else(overflow)?;
    let mut denominator = 1u128;
    if exponent >= 0 {
        let factor = 10u128
            .checked_pow(exponent.unsigned_abs())
            .ok_or_else(overflow)?;
        numerator = numerator.checked_mul(factor).ok_or_else(overflow)?;
    } else {
        // Past u128 the quotient is below one byte either way.
        denominator = 10u128
            .checked_pow(exponent.unsigned_abs())
            .unwrap_or(u128::MAX);
    }

    let bytes = numerator.div_ceil(denominator);
    u64::try_from(bytes).map_err(|_| overflow())
}

fn parse_suffix(suffix: &str) -> Option<Scale> {
    let scale = match suffix {
        "" => Scale::Decimal(0),
        "Ki" => Scale::Binary(1),
        "Mi" => Scale::Binary(2),
        "Gi" => Scale::Binary(3),
        "Ti" => Scale::Binary(4),
        "Pi" => Scale::Binary(5),
        "Ei" => Scale::Binary(6),
        "n" => Scale::Decimal(-9),
        "u" => Scale::Decimal(-6),
        "m" => Scale::Decimal(-3),
        "k" => Scale::Decimal(3),
        "M" => Scale::Decimal(6),
        "G" => Scale::Decimal(9),
        "T" => Scale::Decimal(12),
        "P" => Scale::Decimal(15),
        "E" => Scale::Decimal(18),
        _ => {
            let exp = suffix.strip_prefix(['e', 'E'])?;
            Scale::Decimal(exp.parse().ok()?)
        }
    };
    Some(scale)
}

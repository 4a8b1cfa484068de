use crate::core::digit::{digit_char, digit_value};
use crate::domain::model::NormalizedLiteral;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation;

/// Converts integer literals between positional bases 2–36.
///
/// Digits are the case-insensitive alphanumerics '0'-'9' and 'a'-'z'
/// (values 0–35); output digits are always lowercase. Magnitudes are held in
/// a `u128`, which covers any literal of up to 24 digits in every base
/// (128 digits in base 2, 32 in base 16); larger values fail with
/// [`ConvertError::MagnitudeOverflow`].
pub struct BaseConverter {
    from_base: u32,
    to_base: u32,
}

impl Default for BaseConverter {
    fn default() -> Self {
        Self {
            from_base: 2,
            to_base: 10,
        }
    }
}

impl BaseConverter {
    pub fn new(from_base: u32, to_base: u32) -> Self {
        Self { from_base, to_base }
    }

    /// Validate `literal` and re-express it in the destination base.
    ///
    /// Validation order is fixed: literal shape, then `from_base` range,
    /// then digits against `from_base`, then `to_base` range.
    pub fn convert(&self, literal: &str) -> Result<String> {
        let lowered = literal.to_lowercase();

        validation::validate_literal(&lowered)?;
        let literal = NormalizedLiteral::from_lowered(&lowered);

        validation::validate_base("from_base", self.from_base)?;
        validation::validate_digits_for_base(&literal.digits, self.from_base)?;
        validation::validate_base("to_base", self.to_base)?;

        // Nothing to compute when the bases agree or the value is zero; the
        // normalized literal is already the answer.
        if self.from_base == self.to_base || literal.is_zero() {
            return Ok(literal.resign(literal.digits.clone()));
        }

        let magnitude = decode_magnitude(&literal, self.from_base)?;
        tracing::debug!(
            "decoded \"{}\" (base {}) to magnitude {}",
            literal.digits,
            self.from_base,
            magnitude
        );

        let converted = if self.to_base == 10 {
            magnitude.to_string()
        } else {
            encode_magnitude(magnitude, self.to_base)?
        };
        tracing::debug!("encoded magnitude {} as \"{}\" (base {})", magnitude, converted, self.to_base);

        Ok(literal.resign(converted))
    }
}

/// Convert `literal` from `from_base` to `to_base`.
///
/// The common call shape; see [`BaseConverter`] for the semantics and
/// [`BaseConverter::default`] for the conventional base pair (2 → 10).
pub fn convert_base(literal: &str, from_base: u32, to_base: u32) -> Result<String> {
    BaseConverter::new(from_base, to_base).convert(literal)
}

/// Accumulate digit values right-to-left: value * from_base^position, with
/// position counting up from the least significant digit.
fn decode_magnitude(literal: &NormalizedLiteral, from_base: u32) -> Result<u128> {
    let overflow = || ConvertError::MagnitudeOverflow {
        literal: literal.digits.clone(),
        base: from_base,
    };

    let base = u128::from(from_base);
    let mut magnitude: u128 = 0;
    let mut place: u128 = 1;

    for (position, digit) in literal.digits.chars().rev().enumerate() {
        if position > 0 {
            place = place.checked_mul(base).ok_or_else(overflow)?;
        }
        let term = u128::from(digit_value(digit)?)
            .checked_mul(place)
            .ok_or_else(overflow)?;
        magnitude = magnitude.checked_add(term).ok_or_else(overflow)?;
    }

    Ok(magnitude)
}

/// Repeated division by `to_base`, collecting remainders least significant
/// first, then reversed into reading order.
fn encode_magnitude(magnitude: u128, to_base: u32) -> Result<String> {
    // The division loop yields no digits for zero.
    if magnitude == 0 {
        return Ok("0".to_string());
    }

    let base = u128::from(to_base);
    let mut quotient = magnitude;
    let mut remainders = String::new();

    while quotient != 0 {
        let remainder = (quotient % base) as u32;
        remainders.push(digit_char(remainder)?);
        quotient /= base;
    }

    Ok(remainders.chars().rev().collect())
}

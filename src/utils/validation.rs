use crate::core::digit::{digit_value, MAX_BASE, MIN_BASE};
use crate::utils::error::{ConvertError, Result};
use regex::Regex;

/// Structural check for an already-lowercased literal: an optional single
/// leading '-', a non-zero leading digit, then any run of digits. The sole
/// literal "0" is the one permitted zero-leading form.
pub fn validate_literal(lowered: &str) -> Result<()> {
    if lowered == "0" {
        return Ok(());
    }

    let re = Regex::new(r"^-?[a-z1-9][a-z0-9]*$").unwrap();
    if !re.is_match(lowered) {
        return Err(ConvertError::InvalidLiteral {
            literal: lowered.to_string(),
        });
    }

    Ok(())
}

pub fn validate_base(param: &'static str, base: u32) -> Result<()> {
    if base < MIN_BASE {
        return Err(ConvertError::BaseOutOfRange {
            param,
            value: base,
            reason: format!("is below the minimum supported base {}", MIN_BASE),
        });
    }
    if base > MAX_BASE {
        return Err(ConvertError::BaseOutOfRange {
            param,
            value: base,
            reason: format!("exceeds the maximum supported base {}", MAX_BASE),
        });
    }
    Ok(())
}

/// Every digit of `digits` must have a value below `base`. Assumes the
/// literal already passed [`validate_literal`], so `digit_value` cannot fail
/// here; the `?` stays as a guard against being called out of order.
pub fn validate_digits_for_base(digits: &str, base: u32) -> Result<()> {
    for digit in digits.chars() {
        if digit_value(digit)? >= base {
            return Err(ConvertError::DigitOutOfRangeForBase {
                literal: digits.to_string(),
                base,
            });
        }
    }
    Ok(())
}

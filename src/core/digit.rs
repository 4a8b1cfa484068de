use crate::utils::error::{ConvertError, Result};

/// Every digit symbol in positional order. Both decode and encode go
/// through this one table.
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = ALPHABET.len() as u32;

/// Numeric value of a single lowercase digit character ('0'-'9', 'a'-'z').
pub fn digit_value(digit: char) -> Result<u32> {
    if digit.is_ascii() {
        if let Some(index) = ALPHABET.iter().position(|&symbol| symbol == digit as u8) {
            return Ok(index as u32);
        }
    }

    Err(ConvertError::DigitSyntax {
        message: format!("'{}' is not a valid digit", digit),
    })
}

/// Digit character for a value in 0..=35, the inverse of [`digit_value`].
pub fn digit_char(value: u32) -> Result<char> {
    ALPHABET
        .get(value as usize)
        .map(|&symbol| symbol as char)
        .ok_or_else(|| ConvertError::DigitSyntax {
            message: format!("{} is outside the digit value range 0-{}", value, MAX_BASE - 1),
        })
}

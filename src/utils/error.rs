use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("invalid value for `{param}`: {value} {reason}")]
    BaseOutOfRange {
        param: &'static str,
        value: u32,
        reason: String,
    },

    #[error("\"{literal}\" is not a valid number (numbers must not start with 0)")]
    InvalidLiteral { literal: String },

    #[error("the number {literal} can't be base {base}")]
    DigitOutOfRangeForBase { literal: String, base: u32 },

    #[error("digit error: {message}")]
    DigitSyntax { message: String },

    #[error("the number {literal} (base {base}) exceeds the supported magnitude")]
    MagnitudeOverflow { literal: String, base: u32 },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

pub mod convert;
pub mod digit;

pub use crate::domain::model::NormalizedLiteral;
pub use crate::utils::error::Result;

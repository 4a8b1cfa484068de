pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::convert::{convert_base, BaseConverter};
pub use crate::utils::error::{ConvertError, Result};

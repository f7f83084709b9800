mod digit_source;
mod service;

pub use self::digit_source::{DigitSourceTrait, DynDigitSource};
pub use self::service::{DynLuhnService, LuhnServiceTrait};

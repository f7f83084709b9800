mod luhn;
mod validate;

pub use self::luhn::LuhnError;
pub use self::validate::format_validation_errors;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LuhnError {
    #[error("Invalid digit {ch:?} at index {index}")]
    InvalidDigit { ch: char, index: usize },

    #[error("Invalid number")]
    InvalidNumber,

    #[error("Prefix of {prefix_len} digits does not fit a number of length {length}")]
    PrefixTooLong { prefix_len: usize, length: usize },

    #[error("Length {length} exceeds the maximum of {max}")]
    LengthTooLarge { length: usize, max: usize },

    #[error("Validation failed: {0}")]
    Validation(String),
}

use crate::{
    checksum::{Parity, checksum},
    errors::LuhnError,
};

/// Checks `digits` against the Luhn formula.
///
/// The empty string sums to zero and therefore passes.
pub fn validate(digits: &str) -> Result<(), LuhnError> {
    let sum = checksum(digits, Parity::for_validation(digits.len()))?;

    if sum % 10 != 0 {
        return Err(LuhnError::InvalidNumber);
    }

    Ok(())
}

pub fn is_valid(digits: &str) -> bool {
    validate(digits).is_ok()
}

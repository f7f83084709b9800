use crate::{
    checksum::{Parity, checksum},
    domain::responses::CheckDigitResponse,
    errors::LuhnError,
};

/// Computes the digit that makes `number` pass [`validate`](super::validate)
/// once appended.
pub fn calculate(number: &str) -> Result<CheckDigitResponse, LuhnError> {
    // Scan as if the check digit were already in place.
    let sum = checksum(number, Parity::for_calculation(number.len()))?;

    let check = ((10 - sum % 10) % 10) as u8;
    let check_digit = char::from(b'0' + check);

    let mut full_number = String::with_capacity(number.len() + 1);
    full_number.push_str(number);
    full_number.push(check_digit);

    Ok(CheckDigitResponse {
        check_digit,
        full_number,
    })
}

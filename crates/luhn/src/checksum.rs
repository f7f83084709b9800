//! The weighted digit sum shared by validation and check-digit calculation.

use crate::errors::LuhnError;

/// Which zero-based positions, counted from the left, get doubled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Parity for a complete number: the rightmost digit is never doubled.
    pub fn for_validation(len: usize) -> Self {
        Self::from_bit(len % 2)
    }

    /// Parity for a payload whose check digit is not appended yet.
    pub fn for_calculation(len: usize) -> Self {
        Self::from_bit((len + 1) % 2)
    }

    fn from_bit(bit: usize) -> Self {
        if bit == 0 { Self::Even } else { Self::Odd }
    }

    fn bit(self) -> usize {
        match self {
            Self::Even => 0,
            Self::Odd => 1,
        }
    }
}

/// Sums `digits` left to right, doubling every position whose index matches
/// `parity` and folding doubled values above 9 back into a single digit.
///
/// Stops at the first non-digit byte.
pub fn checksum(digits: &str, parity: Parity) -> Result<u64, LuhnError> {
    let doubled = parity.bit();
    let mut sum: u64 = 0;

    for (index, byte) in digits.bytes().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(LuhnError::InvalidDigit {
                ch: invalid_char(digits, index),
                index,
            });
        }

        let mut value = u64::from(byte - b'0');
        if index % 2 == doubled {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }

        sum += value;
    }

    Ok(sum)
}

// Multi-byte characters are reported whole rather than as a stray byte.
fn invalid_char(digits: &str, index: usize) -> char {
    digits
        .get(index..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_follows_length() {
        assert_eq!(Parity::for_validation(16), Parity::Even);
        assert_eq!(Parity::for_validation(11), Parity::Odd);
        assert_eq!(Parity::for_calculation(15), Parity::Even);
        assert_eq!(Parity::for_calculation(10), Parity::Odd);
    }

    #[test]
    fn doubles_and_folds_selected_positions() {
        // 9 doubled is 18, folded to 9; 5 is kept.
        assert_eq!(checksum("95", Parity::Even), Ok(14));
        // 9 kept; 5 doubled is 10, folded to 1.
        assert_eq!(checksum("95", Parity::Odd), Ok(10));
    }

    #[test]
    fn empty_input_sums_to_zero() {
        assert_eq!(checksum("", Parity::Even), Ok(0));
        assert_eq!(checksum("", Parity::Odd), Ok(0));
    }

    #[test]
    fn stops_at_first_invalid_digit() {
        assert_eq!(
            checksum("12a4b", Parity::Even),
            Err(LuhnError::InvalidDigit { ch: 'a', index: 2 })
        );
    }

    #[test]
    fn reports_multibyte_characters_whole() {
        assert_eq!(
            checksum("1é", Parity::Even),
            Err(LuhnError::InvalidDigit { ch: 'é', index: 1 })
        );
    }

    #[test]
    fn long_inputs_do_not_overflow() {
        let digits = "9".repeat(10_000);
        assert_eq!(checksum(&digits, Parity::Even), Ok(90_000));
    }
}

mod check_digit;

pub use self::check_digit::CheckDigitResponse;

use regex::Regex;
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]*$").unwrap_or_else(|e| unreachable!("static pattern: {e}"))
});

/// True when every character is an ASCII digit. The empty string qualifies.
pub fn is_digit_string(value: &str) -> bool {
    DIGITS.is_match(value)
}

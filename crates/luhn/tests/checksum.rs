use luhn::{LuhnError, calculate, is_valid, validate};
use proptest::prelude::*;

#[test]
fn concrete_cases() -> anyhow::Result<()> {
    luhn::utils::init_logger();

    assert_eq!(validate("1234567812345670"), Ok(()));
    assert_eq!(validate("1234567812345678"), Err(LuhnError::InvalidNumber));
    assert_eq!(validate("0"), Ok(()));
    assert!(validate("8").is_err());

    let res = calculate("123456781234567")?;
    assert_eq!(res.check_digit, '0');
    assert_eq!(res.full_number, "1234567812345670");

    let res = calculate("7992739871")?;
    assert_eq!(res.check_digit, '3');
    assert_eq!(res.full_number, "79927398713");

    Ok(())
}

#[test]
fn non_digits_are_rejected() {
    assert!(matches!(validate("12a4"), Err(LuhnError::InvalidDigit { .. })));
    assert!(matches!(calculate("12a4"), Err(LuhnError::InvalidDigit { .. })));
}

#[test]
fn empty_string_is_valid() {
    assert!(is_valid(""));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn calculated_numbers_validate(s in "[0-9]{0,200}") {
        let res = calculate(&s).unwrap();
        prop_assert_eq!(res.full_number.len(), s.len() + 1);
        prop_assert!(res.full_number.starts_with(s.as_str()));
        prop_assert_eq!(validate(&res.full_number), Ok(()));
    }

    #[test]
    fn calculate_is_deterministic(s in "[0-9]{0,64}") {
        prop_assert_eq!(calculate(&s), calculate(&s));
    }

    #[test]
    fn changing_one_digit_breaks_the_check(s in "[0-9]{1,64}", pos in any::<prop::sample::Index>(), delta in 1u8..10) {
        let full = calculate(&s).unwrap().full_number;
        let mut bytes = full.into_bytes();
        let i = pos.index(bytes.len());
        bytes[i] = b'0' + (bytes[i] - b'0' + delta) % 10;
        let altered = String::from_utf8(bytes).unwrap();
        prop_assert_eq!(validate(&altered), Err(LuhnError::InvalidNumber));
    }

    #[test]
    fn first_non_digit_is_reported(head in "[0-9]{0,16}", bad in "[a-zA-Z -]", tail in "[0-9a-z]{0,8}") {
        let input = format!("{head}{bad}{tail}");
        let expected = LuhnError::InvalidDigit { ch: bad.chars().next().unwrap(), index: head.len() };
        prop_assert_eq!(validate(&input), Err(expected.clone()));
        prop_assert_eq!(calculate(&input), Err(expected));
    }
}

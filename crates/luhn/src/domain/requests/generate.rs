use crate::utils::is_digit_string;
use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_prefix"))]
    pub prefix: String,

    #[validate(range(
        min = 1,
        max = 10000,
        message = "Length must be between 1 and 10000"
    ))]
    pub length: usize,
}

impl GenerateRequest {
    pub fn new(length: usize) -> Self {
        Self {
            prefix: String::new(),
            length,
        }
    }

    pub fn with_prefix(prefix: impl Into<String>, length: usize) -> Self {
        Self {
            prefix: prefix.into(),
            length,
        }
    }
}

fn validate_prefix(prefix: &str) -> Result<(), ValidationError> {
    if is_digit_string(prefix) {
        Ok(())
    } else {
        Err(ValidationError::new("regex")
            .with_message(Cow::Borrowed("Prefix must contain only ASCII digits")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_GENERATE_LENGTH;

    #[test]
    fn accepts_digit_prefix() {
        assert!(GenerateRequest::with_prefix("4000", 16).validate().is_ok());
        assert!(GenerateRequest::new(1).validate().is_ok());
    }

    #[test]
    fn rejects_non_digit_prefix() {
        let errors = GenerateRequest::with_prefix("40-0", 16)
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("prefix"));
    }

    #[test]
    fn rejects_out_of_range_length() {
        assert!(GenerateRequest::new(0).validate().is_err());
        assert!(GenerateRequest::new(MAX_GENERATE_LENGTH + 1).validate().is_err());
    }

    #[test]
    fn deserializes_without_prefix() {
        let req: GenerateRequest = serde_json::from_str(r#"{"length": 16}"#).unwrap();
        assert_eq!(req.prefix, "");
        assert_eq!(req.length, 16);
    }
}

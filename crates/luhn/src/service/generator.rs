use crate::{
    abstract_trait::DynDigitSource,
    config::{GeneratorConfig, PrefixPolicy},
    domain::requests::GenerateRequest,
    errors::{LuhnError, format_validation_errors},
    service::calculate,
};
use tracing::{debug, warn};
use validator::Validate;

/// Produces random numbers that pass the Luhn check.
#[derive(Clone)]
pub struct LuhnGenerator {
    source: DynDigitSource,
    config: GeneratorConfig,
}

impl LuhnGenerator {
    pub fn new(source: DynDigitSource, config: GeneratorConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// `length` digits in total, the last one being the check digit.
    /// A length of zero yields an empty string.
    pub fn generate(&self, length: usize) -> Result<String, LuhnError> {
        self.generate_with_prefix("", length)
    }

    /// `prefix`, then random digits, then the check digit, `length` digits in
    /// total. A prefix that leaves no room for the check digit is handled by
    /// the configured [`PrefixPolicy`].
    pub fn generate_with_prefix(&self, prefix: &str, length: usize) -> Result<String, LuhnError> {
        if length > self.config.max_length {
            warn!(
                "📏 Requested length {length} exceeds maximum {}",
                self.config.max_length
            );
            return Err(LuhnError::LengthTooLarge {
                length,
                max: self.config.max_length,
            });
        }

        if let Some((index, ch)) = prefix.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            warn!("❌ Prefix contains non-digit {ch:?} at index {index}");
            return Err(LuhnError::InvalidDigit { ch, index });
        }

        if prefix.len() >= length {
            if prefix.is_empty() {
                return Ok(String::new());
            }

            return match self.config.prefix_policy {
                PrefixPolicy::AppendCheckDigit => {
                    debug!(
                        "🔢 Prefix of {} digits fills length {length}, appending check digit only",
                        prefix.len()
                    );
                    Ok(calculate(prefix)?.full_number)
                }
                PrefixPolicy::Reject => {
                    warn!(
                        "🚫 Prefix of {} digits does not fit length {length}",
                        prefix.len()
                    );
                    Err(LuhnError::PrefixTooLong {
                        prefix_len: prefix.len(),
                        length,
                    })
                }
            };
        }

        let mut payload = String::with_capacity(length);
        payload.push_str(prefix);
        self.source.fill_digits(&mut payload, length - prefix.len() - 1);

        let number = calculate(&payload)?.full_number;

        debug!(
            "✅ Generated number of length {} with prefix length {}",
            number.len(),
            prefix.len()
        );

        Ok(number)
    }

    pub fn generate_from_request(&self, req: &GenerateRequest) -> Result<String, LuhnError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            warn!("📝 Validation failed: {error_msg}");
            return Err(LuhnError::Validation(error_msg));
        }

        self.generate_with_prefix(&req.prefix, req.length)
    }
}

use serde::Deserialize;

pub const MAX_GENERATE_LENGTH: usize = 10_000;

/// What to do when a prefix leaves no room for random digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixPolicy {
    /// Ignore the length hint and return the prefix with its check digit.
    #[default]
    AppendCheckDigit,
    /// Fail with `LuhnError::PrefixTooLong`.
    Reject,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub prefix_policy: PrefixPolicy,
    pub max_length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefix_policy: PrefixPolicy::default(),
            max_length: MAX_GENERATE_LENGTH,
        }
    }
}

impl GeneratorConfig {
    pub fn with_prefix_policy(mut self, prefix_policy: PrefixPolicy) -> Self {
        self.prefix_policy = prefix_policy;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

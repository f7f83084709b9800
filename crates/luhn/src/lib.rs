//! Luhn checksum validation, check-digit calculation and generation of random
//! numbers that pass the check.
//!
//! ```
//! let res = luhn::calculate("7992739871").unwrap();
//! assert_eq!(res.check_digit, '3');
//! assert!(luhn::validate(&res.full_number).is_ok());
//!
//! let number = luhn::generate_with_prefix("4", 16).unwrap();
//! assert_eq!(number.len(), 16);
//! assert!(luhn::is_valid(&number));
//! ```

pub mod abstract_trait;
pub mod checksum;
pub mod config;
pub mod domain;
pub mod errors;
pub mod service;
pub mod utils;

use crate::{
    config::GeneratorConfig,
    service::LuhnGenerator,
    utils::ProcessDigitSource,
};
use std::sync::{Arc, LazyLock};

pub use crate::{
    domain::responses::CheckDigitResponse,
    errors::LuhnError,
    service::{calculate, is_valid, validate},
};

static DEFAULT_GENERATOR: LazyLock<LuhnGenerator> = LazyLock::new(|| {
    LuhnGenerator::new(
        Arc::new(ProcessDigitSource),
        GeneratorConfig::default().with_max_length(usize::MAX),
    )
});

/// A random valid Luhn number of `length` digits, empty for zero.
pub fn generate(length: usize) -> String {
    match DEFAULT_GENERATOR.generate(length) {
        Ok(number) => number,
        Err(e) => unreachable!("random digit payload failed the checksum: {e}"),
    }
}

/// A random valid Luhn number of `length` digits starting with `prefix`.
///
/// When `prefix` is at least `length` digits long the length is ignored and
/// the result is `prefix` followed by its check digit.
pub fn generate_with_prefix(prefix: &str, length: usize) -> Result<String, LuhnError> {
    DEFAULT_GENERATOR.generate_with_prefix(prefix, length)
}

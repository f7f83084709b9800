mod generator;

pub use self::generator::{GeneratorConfig, MAX_GENERATE_LENGTH, PrefixPolicy};

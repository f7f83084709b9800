use crate::{
    abstract_trait::{DynDigitSource, LuhnServiceTrait},
    config::GeneratorConfig,
    domain::{requests::GenerateRequest, responses::CheckDigitResponse},
    errors::LuhnError,
    service::{LuhnGenerator, calculate, validate},
};
use tracing::{debug, info, instrument};

pub struct LuhnService {
    generator: LuhnGenerator,
}

impl LuhnService {
    pub fn new(source: DynDigitSource, config: GeneratorConfig) -> Self {
        Self {
            generator: LuhnGenerator::new(source, config),
        }
    }
}

impl LuhnServiceTrait for LuhnService {
    #[instrument(skip_all, fields(len = digits.len()))]
    fn validate(&self, digits: &str) -> Result<(), LuhnError> {
        match validate(digits) {
            Ok(()) => {
                debug!("✅ Luhn check passed");
                Ok(())
            }
            Err(e) => {
                info!("❌ Luhn check failed: {e}");
                Err(e)
            }
        }
    }

    #[instrument(skip_all, fields(len = number.len()))]
    fn calculate(&self, number: &str) -> Result<CheckDigitResponse, LuhnError> {
        let response = calculate(number).inspect_err(|e| info!("❌ Check digit failed: {e}"))?;

        debug!("🔢 Check digit {}", response.check_digit);

        Ok(response)
    }

    #[instrument(skip(self))]
    fn generate(&self, length: usize) -> Result<String, LuhnError> {
        self.generator.generate(length)
    }

    #[instrument(skip(self, prefix), fields(prefix_len = prefix.len()))]
    fn generate_with_prefix(&self, prefix: &str, length: usize) -> Result<String, LuhnError> {
        self.generator.generate_with_prefix(prefix, length)
    }

    #[instrument(skip_all, fields(length = req.length))]
    fn generate_from_request(&self, req: &GenerateRequest) -> Result<String, LuhnError> {
        self.generator.generate_from_request(req)
    }
}
